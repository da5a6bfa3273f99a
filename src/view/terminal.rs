use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::{
    models::Movie,
    view::{LibraryView, ViewRenderer},
};

/// Renders both panels as plain text on stdout
///
/// Remembers the last rendered result list so the front end can refer to
/// results by position.
#[derive(Default)]
pub struct TerminalRenderer {
    results: Mutex<Vec<Movie>>,
    recommendations_available: AtomicBool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `index`-th (1-based) movie of the last rendered list
    pub fn result_at(&self, index: usize) -> Option<Movie> {
        index
            .checked_sub(1)
            .and_then(|i| self.results.lock().get(i).cloned())
    }

    /// Last availability signal from the library panel; false until favorites load
    pub fn recommendations_available(&self) -> bool {
        self.recommendations_available.load(Ordering::SeqCst)
    }

    fn print(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", text);
        let _ = stdout.flush();
    }

    fn render_cards(&self, heading: &str, movies: &[Movie], empty: &str) {
        if movies.is_empty() {
            self.print(empty);
            return;
        }
        let mut out = format!("{}:", heading);
        for (i, movie) in movies.iter().enumerate() {
            out.push_str(&format!("\n  {:>2}. {}", i + 1, movie));
            if let Some(poster) = movie.poster_url() {
                out.push_str(&format!("\n      {}", poster));
            }
        }
        self.print(&out);
    }
}

impl ViewRenderer for TerminalRenderer {
    fn on_loading_change(&self, loading: bool) {
        if loading {
            self.print("… searching");
        }
    }

    fn on_results(&self, results: &[Movie]) {
        *self.results.lock() = results.to_vec();
        self.render_cards("Results", results, "(no results)");
    }

    fn on_error(&self, message: &str) {
        self.print(&format!("! {}", message));
    }
}

impl LibraryView for TerminalRenderer {
    fn on_loading_change(&self, _loading: bool) {}

    fn on_favorites(&self, favorites: &[Movie]) {
        self.render_cards("Favorites", favorites, "(no favorites yet)");
    }

    fn on_recommendations_available(&self, available: bool) {
        self.recommendations_available.store(available, Ordering::SeqCst);
        if available {
            self.print("Recommendations ready: type /reco");
        }
    }

    fn on_results(&self, results: &[Movie]) {
        ViewRenderer::on_results(self, results);
    }

    fn on_notice(&self, message: &str) {
        self.print(&format!("* {}", message));
    }
}
