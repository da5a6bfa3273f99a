use crate::{error::ClientResult, models::Movie, services::providers::CatalogApi};

/// Whether a user has enough favorites for recommendations to mean anything
///
/// The service answers either way; this only decides whether the trigger is
/// offered.
pub fn recommendations_available(favorite_count: usize, threshold: usize) -> bool {
    favorite_count >= threshold
}

/// Fetches recommendations computed from the user's favorites
pub async fn get_recommendations(api: &dyn CatalogApi, user_id: &str) -> ClientResult<Vec<Movie>> {
    let recommendations = api.recommendations(user_id).await?;

    tracing::info!(
        user_id = %user_id,
        results = recommendations.len(),
        backend = api.name(),
        "Recommendations fetched"
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockCatalogApi;

    #[test]
    fn test_recommendations_available_threshold() {
        assert!(!recommendations_available(0, 5));
        assert!(!recommendations_available(4, 5));
        assert!(recommendations_available(5, 5));
        assert!(recommendations_available(12, 5));
    }

    #[tokio::test]
    async fn test_get_recommendations_passes_through() {
        let mut api = MockCatalogApi::new();
        api.expect_recommendations()
            .withf(|user_id| user_id == "ana")
            .times(1)
            .returning(|_| Ok(vec![Movie::new(603, "The Matrix")]));
        api.expect_name().return_const("mock");

        let result = get_recommendations(&api, "ana").await.unwrap();
        assert_eq!(result, vec![Movie::new(603, "The Matrix")]);
    }
}
