/// HTTP catalog backend
///
/// Talks JSON to the catalog/favorites service:
/// 1. Search: GET /search?q= → `{ results: Movie[] }`
/// 2. Favorites: GET/POST /favorites, DELETE /favorites/{movie_id}
/// 3. Recommendations: GET /recommendations?user_id= → `{ count, results }`
///
/// Read endpoints get a cache-busting `_` parameter plus no-cache headers so
/// proxies never hand back a stale answer for a repeated query.
use crate::{
    error::{ClientError, ClientResult},
    models::{ApiErrorBody, FavoriteRequest, Movie, MovieId, RecommendationResponse, SearchResponse},
    services::providers::{
        request_id::{RequestId, REQUEST_ID_HEADER},
        CatalogApi,
    },
};
use chrono::Utc;
use reqwest::{
    header::{CACHE_CONTROL, PRAGMA},
    Client as HttpClient, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

const NO_CACHE: &str = "no-cache, no-store";

#[derive(Clone)]
pub struct HttpCatalog {
    http_client: HttpClient,
    api_url: String,
}

impl HttpCatalog {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), api_url)
    }

    pub fn with_client(http_client: HttpClient, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            api_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// GET with cache busting and no-cache directives
    fn fresh_get(&self, path: &str) -> RequestBuilder {
        let cache_buster = Utc::now().timestamp_millis().to_string();
        self.http_client
            .get(self.url(path))
            .query(&[("_", cache_buster.as_str())])
            .header(CACHE_CONTROL, NO_CACHE)
            .header(PRAGMA, "no-cache")
    }

    /// Sends the request tagged with a fresh request id
    async fn send(&self, request: RequestBuilder, operation: &'static str) -> ClientResult<Response> {
        let request_id = RequestId::new();
        tracing::debug!(request_id = %request_id, operation, "Sending catalog request");

        let response = request
            .header(REQUEST_ID_HEADER, request_id.header_value())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_default();

            tracing::warn!(
                request_id = %request_id,
                operation,
                status = %status,
                body = %body,
                "Catalog API returned an error status"
            );

            return Err(ClientError::Api { status, detail });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize catalog response"
            );
            ClientError::Decode(e)
        })
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalog {
    async fn search(&self, query: &str) -> ClientResult<Vec<Movie>> {
        let request = self.fresh_get("/search").query(&[("q", query)]);
        let response = self.send(request, "search").await?;
        let payload: SearchResponse = Self::decode(response).await?;

        tracing::info!(
            query = %query,
            results = payload.results.len(),
            backend = self.name(),
            "Title search completed"
        );

        Ok(payload.results)
    }

    async fn list_favorites(&self, user_id: &str) -> ClientResult<Vec<Movie>> {
        let request = self.fresh_get("/favorites").query(&[("user_id", user_id)]);
        let response = self.send(request, "list_favorites").await?;
        Self::decode(response).await
    }

    async fn add_favorite(&self, user_id: &str, movie: &Movie) -> ClientResult<Movie> {
        let body = FavoriteRequest {
            user_id: user_id.to_string(),
            movie: movie.clone(),
        };
        let request = self.http_client.post(self.url("/favorites")).json(&body);
        let response = self.send(request, "add_favorite").await?;
        Self::decode(response).await
    }

    async fn remove_favorite(&self, user_id: &str, movie_id: MovieId) -> ClientResult<()> {
        let request = self
            .http_client
            .delete(self.url(&format!("/favorites/{}", movie_id)))
            .query(&[("user_id", user_id)]);
        self.send(request, "remove_favorite").await?;
        Ok(())
    }

    async fn recommendations(&self, user_id: &str) -> ClientResult<Vec<Movie>> {
        let request = self
            .fresh_get("/recommendations")
            .query(&[("user_id", user_id)]);
        let response = self.send(request, "recommendations").await?;
        let payload: RecommendationResponse = Self::decode(response).await?;
        Ok(payload.results)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
