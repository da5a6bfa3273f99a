use serde::{Deserialize, Serialize};
use std::fmt::Display;

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Catalog identifier for a movie
pub type MovieId = u64;

/// A movie summary as returned by the catalog service
///
/// Passed through unmodified: whatever the search endpoint returns is what
/// gets rendered and, if the user picks it, posted back as a favorite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            genre_ids: None,
        }
    }

    /// Full poster URL, when the catalog knows a poster for this movie
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}
