use std::future::Future;

use tokio::task::AbortHandle;

/// Monotonic tag distinguishing one issued search from the next
pub type Generation = u64;

/// A cancelable in-flight search
#[derive(Debug)]
pub struct SearchRequest {
    generation: Generation,
    query: String,
    abort: AbortHandle,
}

impl SearchRequest {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }

    /// Aborts the lookup task. No-op once it has finished.
    fn cancel(&self) {
        self.abort.abort();
    }
}

/// Owns the single "current search" slot
///
/// Issuing a new search aborts the previous lookup task, which drops its
/// network future and guarantees its completion step never runs. The
/// completion step must still call [`RequestCanceler::complete`] and bail out
/// on `false`: an abort cannot stop a task that is already past its last
/// await point.
#[derive(Debug, Default)]
pub struct RequestCanceler {
    current: Option<SearchRequest>,
    last_generation: Generation,
}

impl RequestCanceler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes the current search and spawns `lookup` as the new one
    pub fn issue<F, Fut>(&mut self, query: &str, lookup: F) -> Generation
    where
        F: FnOnce(Generation) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.current.take() {
            if !previous.is_finished() {
                tracing::debug!(
                    generation = previous.generation,
                    query = %previous.query,
                    "Superseding in-flight search"
                );
            }
            previous.cancel();
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        let handle = tokio::spawn(lookup(generation));

        self.current = Some(SearchRequest {
            generation,
            query: query.to_string(),
            abort: handle.abort_handle(),
        });
        generation
    }

    /// The active search, if any
    pub fn current(&self) -> Option<&SearchRequest> {
        self.current.as_ref()
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current
            .as_ref()
            .is_some_and(|request| request.generation == generation)
    }

    /// Retires `generation` if it is still current
    ///
    /// Returns false for superseded searches, whose outcome must be dropped.
    pub fn complete(&mut self, generation: Generation) -> bool {
        if self.is_current(generation) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Aborts the current search, if any
    ///
    /// Returns true when a search was actually outstanding.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(request) => {
                let outstanding = !request.is_finished();
                request.cancel();
                outstanding
            }
            None => false,
        }
    }
}

impl Drop for RequestCanceler {
    fn drop(&mut self) {
        self.cancel();
    }
}
