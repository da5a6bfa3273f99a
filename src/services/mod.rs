pub mod library;
pub mod providers;
pub mod recommendations;

pub use library::LibraryController;
pub use providers::{CatalogApi, HttpCatalog};
