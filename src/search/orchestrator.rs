use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use crate::{
    config::ClientConfig,
    error::{ClientResult, SearchOutcome},
    models::Movie,
    search::{
        canceler::{Generation, RequestCanceler},
        debounce::{Debouncer, Ticket},
    },
    services::providers::CatalogApi,
    view::ViewRenderer,
};

/// Notice shown when the current search fails
pub const SEARCH_ERROR_MESSAGE: &str = "Error searching movies";

/// Where the search controller currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing typed yet, or torn down
    Idle,
    /// Waiting for the input to go quiet
    Debouncing,
    /// A lookup is in flight
    Loading,
    /// The latest lookup's results are on screen
    Rendered,
    /// The latest lookup failed; the previous results are still on screen
    Failed,
    /// Input too short to search; an empty list is on screen
    Empty,
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for SearchSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            debounce: config.debounce(),
            min_query_len: config.min_query_len,
        }
    }
}

/// Turns keystrokes into debounced, cancelable catalog lookups
///
/// Only the most recently issued lookup can reach the view: issuing a new one
/// aborts the previous task, and completions re-check their generation under
/// the state lock before rendering. Dropping the controller aborts any pending
/// timer and in-flight lookup.
pub struct SearchController {
    shared: Arc<Shared>,
}

struct Shared {
    api: Arc<dyn CatalogApi>,
    view: Arc<dyn ViewRenderer>,
    settings: SearchSettings,
    state: Mutex<ControllerState>,
}

struct ControllerState {
    phase: SearchPhase,
    input: String,
    loading: bool,
    debouncer: Debouncer,
    requests: RequestCanceler,
}

impl SearchController {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        view: Arc<dyn ViewRenderer>,
        settings: SearchSettings,
    ) -> Self {
        let shared = Arc::new(Shared {
            api,
            view,
            settings,
            state: Mutex::new(ControllerState {
                phase: SearchPhase::Idle,
                input: String::new(),
                loading: false,
                debouncer: Debouncer::new(),
                requests: RequestCanceler::new(),
            }),
        });
        Self { shared }
    }

    /// Input changed; `text` is the whole raw input value
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&self, text: &str) {
        self.shared.input(text);
    }

    /// Search the current input now, skipping the debounce delay
    pub fn submit(&self) {
        self.shared.submit();
    }

    pub fn phase(&self) -> SearchPhase {
        self.shared.state.lock().phase
    }

    /// The normalized current input
    pub fn query(&self) -> String {
        normalize(&self.shared.state.lock().input).to_string()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().loading
    }

    /// Aborts the pending timer and any in-flight lookup
    pub fn shutdown(&self) {
        let mut state = self.shared.state.lock();
        state.debouncer.cancel();
        if state.requests.cancel() {
            tracing::debug!("Aborted in-flight search on shutdown");
        }
        state.phase = SearchPhase::Idle;
        state.loading = false;
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn normalize(input: &str) -> &str {
    input.trim()
}

impl Shared {
    fn input(self: &Arc<Self>, text: &str) {
        let mut state = self.state.lock();
        state.input = text.to_string();
        let query = normalize(text).to_string();

        if self.too_short(&query) {
            self.apply_outcome(&mut state, SearchOutcome::ValidationSkip);
            return;
        }

        state.phase = SearchPhase::Debouncing;
        let weak = Arc::downgrade(self);
        state
            .debouncer
            .schedule(self.settings.debounce, move |ticket| fire_later(weak, ticket, query));
    }

    fn submit(self: &Arc<Self>) {
        let mut state = self.state.lock();
        state.debouncer.cancel();
        let query = normalize(&state.input).to_string();

        if self.too_short(&query) {
            self.apply_outcome(&mut state, SearchOutcome::ValidationSkip);
            return;
        }

        self.launch(&mut state, query);
    }

    fn too_short(&self, query: &str) -> bool {
        query.chars().count() < self.settings.min_query_len
    }

    fn fire(self: &Arc<Self>, ticket: Ticket, query: String) {
        let mut state = self.state.lock();
        if !state.debouncer.claim(ticket) {
            return;
        }
        self.launch(&mut state, query);
    }

    fn launch(self: &Arc<Self>, state: &mut ControllerState, query: String) {
        state.phase = SearchPhase::Loading;
        self.set_loading(state, true);

        let weak = Arc::downgrade(self);
        let api = self.api.clone();
        let lookup_query = query.clone();
        let generation = state.requests.issue(&query, move |generation| async move {
            let result = api.search(&lookup_query).await;
            if let Some(shared) = weak.upgrade() {
                shared.settle(generation, result);
            }
        });

        tracing::info!(query = %query, generation, "Search issued");
    }

    fn settle(&self, generation: Generation, result: ClientResult<Vec<Movie>>) {
        let mut state = self.state.lock();
        if !state.requests.complete(generation) {
            tracing::debug!(generation, "Discarding superseded search outcome");
            self.apply_outcome(&mut state, SearchOutcome::Cancelled);
            return;
        }

        match result {
            Ok(movies) => {
                tracing::debug!(generation, results = movies.len(), "Rendering search results");
                self.settle_phase(&mut state, SearchPhase::Rendered);
                self.view.on_results(&movies);
                self.set_loading(&mut state, false);
            }
            Err(e) => self.apply_outcome(&mut state, SearchOutcome::Transport(e)),
        }
    }

    fn apply_outcome(&self, state: &mut ControllerState, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Cancelled => {}
            SearchOutcome::ValidationSkip => {
                state.debouncer.cancel();
                if state.requests.cancel() {
                    tracing::debug!("Input too short, aborted in-flight search");
                }
                state.phase = SearchPhase::Empty;
                self.view.on_results(&[]);
                self.set_loading(state, false);
            }
            SearchOutcome::Transport(e) => {
                tracing::warn!(error = %e, "Search failed");
                self.settle_phase(state, SearchPhase::Failed);
                self.view.on_error(SEARCH_ERROR_MESSAGE);
                self.set_loading(state, false);
            }
        }
    }

    /// A newer keystroke still waiting on its timer keeps the phase at `Debouncing`
    fn settle_phase(&self, state: &mut ControllerState, phase: SearchPhase) {
        state.phase = if state.debouncer.is_pending() {
            SearchPhase::Debouncing
        } else {
            phase
        };
    }

    fn set_loading(&self, state: &mut ControllerState, loading: bool) {
        if state.loading != loading {
            state.loading = loading;
            self.view.on_loading_change(loading);
        }
    }
}

async fn fire_later(weak: Weak<Shared>, ticket: Ticket, query: String) {
    if let Some(shared) = weak.upgrade() {
        shared.fire(ticket, query);
    }
}
