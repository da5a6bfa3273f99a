/// Catalog service abstraction
///
/// The search controller and the library panel talk to the backend only
/// through `CatalogApi`, so tests can swap in fakes with controllable latency
/// and the HTTP implementation can be replaced without touching the controllers.
use crate::{
    error::ClientResult,
    models::{Movie, MovieId},
};

pub mod http;
pub mod request_id;

pub use http::HttpCatalog;

/// Trait for catalog/favorites backends
///
/// Implementations must be cancel-safe: dropping a returned future mid-flight
/// is how a superseded search is aborted, and it must stop all further work
/// for that call.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search the catalog by free text
    ///
    /// Must defeat intermediary caching: identical queries issued twice are
    /// two real lookups.
    async fn search(&self, query: &str) -> ClientResult<Vec<Movie>>;

    /// List a user's stored favorites
    async fn list_favorites(&self, user_id: &str) -> ClientResult<Vec<Movie>>;

    /// Store a movie as a favorite, returning the stored record
    async fn add_favorite(&self, user_id: &str, movie: &Movie) -> ClientResult<Movie>;

    /// Remove a stored favorite
    async fn remove_favorite(&self, user_id: &str, movie_id: MovieId) -> ClientResult<()>;

    /// Fetch recommendations computed from the user's favorites
    async fn recommendations(&self, user_id: &str) -> ClientResult<Vec<Movie>>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
