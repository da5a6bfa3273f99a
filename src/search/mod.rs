//! Search-as-you-type controller
//!
//! Keystrokes go through a [`Debouncer`], the surviving query is issued
//! through a [`RequestCanceler`] that aborts whatever lookup was still in
//! flight, and [`SearchController`] renders only the outcome of the latest one.

pub mod canceler;
pub mod debounce;
pub mod orchestrator;

pub use canceler::{Generation, RequestCanceler, SearchRequest};
pub use debounce::{Debouncer, Ticket};
pub use orchestrator::{SearchController, SearchPhase, SearchSettings, SEARCH_ERROR_MESSAGE};
