pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, SearchOutcome};
pub use models::Movie;
pub use search::{SearchController, SearchPhase, SearchSettings};
pub use services::{CatalogApi, HttpCatalog, LibraryController};
pub use view::{LibraryView, TerminalRenderer, ViewRenderer};
