use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::{Movie, MovieId};

// ============================================================================
// Catalog API wire types
// ============================================================================

/// Response from `GET /search`
///
/// A payload without `results` is an empty result list, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
}

/// Response from `GET /recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<Movie>,
}

/// Body of `POST /favorites`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: String,
    pub movie: Movie,
}

/// Error body sent by the service with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_without_results_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{"results":[{"id":1,"title":"Batman"},{"id":2,"title":"Batman Returns","poster_path":"/a.jpg"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].title, "Batman");
        assert_eq!(response.results[1].poster_path.as_deref(), Some("/a.jpg"));
    }

    #[test]
    fn test_favorite_request_serialization() {
        let body = FavoriteRequest {
            user_id: "ana".to_string(),
            movie: Movie::new(1, "Batman"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user_id": "ana", "movie": { "id": 1, "title": "Batman" } })
        );
    }

    #[test]
    fn test_api_error_body_detail_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"No encontrado"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("No encontrado"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(body.detail.is_none());
    }
}
