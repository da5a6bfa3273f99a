use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Identifies one arming of a [`Debouncer`]
pub type Ticket = u64;

/// Coalesces a burst of triggers into one delayed action
///
/// Each `schedule` aborts the pending timer and arms a new one, so only the
/// tail of a burst runs. A zero delay still runs on a spawned task, never
/// inline.
///
/// Aborting a timer that already woke up cannot stop it. Actions that care
/// should claim their ticket with [`Debouncer::claim`] before doing anything,
/// under the same lock that guards `schedule`.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(Ticket, JoinHandle<()>)>,
    next_ticket: Ticket,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing any pending one
    ///
    /// `action` receives the ticket of this arming.
    pub fn schedule<F, Fut>(&mut self, delay: Duration, action: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(ticket).await;
        });
        self.pending = Some((ticket, handle));
        ticket
    }

    /// Clears the pending timer without running it
    pub fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }

    /// Marks `ticket` as fired; false if it was rearmed or cancelled meanwhile
    pub fn claim(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some((pending, _)) if pending == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_action(
        counter: &Arc<AtomicUsize>,
    ) -> impl FnOnce(Ticket) -> std::future::Ready<()> + Send + 'static {
        let counter = counter.clone();
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once_at_tail() {
        let mut debouncer = Debouncer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            debouncer.schedule(Duration::from_millis(350), counting_action(&fired));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(260)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_action() {
        let mut debouncer = Debouncer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(Duration::from_millis(50), counting_action(&fired));
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_deferred() {
        let mut debouncer = Debouncer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(Duration::ZERO, counting_action(&fired));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_claim_only_current_ticket() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule(Duration::from_secs(1), |_| async {});
        let second = debouncer.schedule(Duration::from_secs(1), |_| async {});

        assert!(!debouncer.claim(first));
        assert!(debouncer.claim(second));
        assert!(!debouncer.claim(second));
        assert!(!debouncer.is_pending());
    }
}
