use crate::models::Movie;

pub mod terminal;

pub use terminal::TerminalRenderer;

/// Effects the search controller produces
///
/// Called while the controller holds its state lock, so implementations must
/// not call back into the controller.
pub trait ViewRenderer: Send + Sync {
    /// Loading indicator toggled. Only called on actual changes.
    fn on_loading_change(&self, loading: bool);

    /// Replace the rendered result list wholesale
    fn on_results(&self, results: &[Movie]);

    /// Show a transient notice; the rendered list stays as it is
    fn on_error(&self, message: &str);
}

/// Effects the favorites/recommendations panel produces
pub trait LibraryView: Send + Sync {
    fn on_loading_change(&self, loading: bool);

    /// Replace the rendered favorites list
    fn on_favorites(&self, favorites: &[Movie]);

    /// Show or hide the recommendations trigger
    fn on_recommendations_available(&self, available: bool);

    /// Recommendations go to the same list search results use
    fn on_results(&self, results: &[Movie]);

    fn on_notice(&self, message: &str);
}
