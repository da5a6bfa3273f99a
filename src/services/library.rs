use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::ClientError,
    models::{Movie, MovieId},
    services::{
        providers::CatalogApi,
        recommendations::{get_recommendations, recommendations_available},
    },
    view::LibraryView,
};

pub const MISSING_USER_MESSAGE: &str = "Enter your user id";
pub const LOAD_FAVORITES_ERROR: &str = "Could not load favorites";
pub const ADD_FAVORITE_ERROR: &str = "Could not add favorite";
pub const ADDED_MESSAGE: &str = "Added to favorites";
pub const REMOVE_FAVORITE_ERROR: &str = "Could not remove favorite";
pub const REMOVED_MESSAGE: &str = "Removed from favorites";
pub const RECOMMENDATIONS_ERROR: &str = "Could not get recommendations";

/// Favorites and recommendations panel
///
/// Plain request/response glue: every operation is awaited to completion and
/// every failure ends up as a notice on the view, never as an error returned
/// to the caller.
pub struct LibraryController {
    api: Arc<dyn CatalogApi>,
    view: Arc<dyn LibraryView>,
    recommendation_threshold: usize,
}

impl LibraryController {
    pub fn new(api: Arc<dyn CatalogApi>, view: Arc<dyn LibraryView>, config: &ClientConfig) -> Self {
        Self {
            api,
            view,
            recommendation_threshold: config.recommendation_threshold,
        }
    }

    /// Trimmed user id, or a notice when there is none
    fn user<'a>(&self, user_id: &'a str) -> Option<&'a str> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            self.view.on_notice(MISSING_USER_MESSAGE);
            None
        } else {
            Some(user_id)
        }
    }

    /// Renders the user's favorites and toggles the recommendations trigger
    pub async fn load_favorites(&self, user_id: &str) {
        let Some(user_id) = self.user(user_id) else {
            return;
        };

        self.view.on_loading_change(true);
        match self.api.list_favorites(user_id).await {
            Ok(favorites) => {
                tracing::debug!(user_id = %user_id, count = favorites.len(), "Favorites loaded");
                self.view.on_favorites(&favorites);
                self.view.on_recommendations_available(recommendations_available(
                    favorites.len(),
                    self.recommendation_threshold,
                ));
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to load favorites");
                self.view.on_notice(LOAD_FAVORITES_ERROR);
            }
        }
        self.view.on_loading_change(false);
    }

    pub async fn add_favorite(&self, user_id: &str, movie: &Movie) {
        let Some(user_id) = self.user(user_id) else {
            return;
        };

        match self.api.add_favorite(user_id, movie).await {
            Ok(stored) => {
                tracing::info!(user_id = %user_id, movie_id = stored.id, "Favorite added");
                self.view.on_notice(ADDED_MESSAGE);
                self.load_favorites(user_id).await;
            }
            Err(e) => self.notify_failure(&e, ADD_FAVORITE_ERROR),
        }
    }

    pub async fn remove_favorite(&self, user_id: &str, movie_id: MovieId) {
        let Some(user_id) = self.user(user_id) else {
            return;
        };

        match self.api.remove_favorite(user_id, movie_id).await {
            Ok(()) => {
                tracing::info!(user_id = %user_id, movie_id, "Favorite removed");
                self.view.on_notice(REMOVED_MESSAGE);
                self.load_favorites(user_id).await;
            }
            Err(e) => self.notify_failure(&e, REMOVE_FAVORITE_ERROR),
        }
    }

    /// Renders recommendations into the results list
    pub async fn recommend(&self, user_id: &str) {
        let Some(user_id) = self.user(user_id) else {
            return;
        };

        self.view.on_loading_change(true);
        match get_recommendations(self.api.as_ref(), user_id).await {
            Ok(movies) => self.view.on_results(&movies),
            Err(e) => self.notify_failure(&e, RECOMMENDATIONS_ERROR),
        }
        self.view.on_loading_change(false);
    }

    /// Server detail when the service sent one, `fallback` otherwise
    fn notify_failure(&self, error: &ClientError, fallback: &str) {
        tracing::warn!(error = %error, "Library request failed");
        self.view.on_notice(error.detail().unwrap_or(fallback));
    }
}
