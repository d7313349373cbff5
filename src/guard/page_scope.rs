//! Generation counter tying in-flight requests to the page that issued them.
//!
//! Requests are never aborted. Instead each page lifecycle hands out tickets
//! stamped with its current generation; leaving the page (unmount, route
//! change, logout) advances the generation, and results carried by an older
//! ticket are dropped instead of being applied to a page that is gone.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PageLifecycle {
    generation: Arc<AtomicU64>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Ticket for work issued now.
    pub fn ticket(&self) -> ScopeTicket {
        ScopeTicket {
            generation: Arc::clone(&self.generation),
            issued: self.generation(),
        }
    }

    /// Invalidate every outstanding ticket. Returns the new generation.
    pub fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Proof that a piece of work belongs to a given page generation.
#[derive(Debug, Clone)]
pub struct ScopeTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl ScopeTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }

    /// `Some(value)` while the issuing page generation is still live.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }

    /// Await `work` and keep its output only if the page is still live afterwards.
    pub async fn run<F: Future>(self, work: F) -> Option<F::Output> {
        let output = work.await;
        self.accept(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_current_until_advance() {
        let lifecycle = PageLifecycle::new();
        let ticket = lifecycle.ticket();
        assert!(ticket.is_current());
        assert_eq!(ticket.accept(5), Some(5));

        assert_eq!(lifecycle.advance(), 1);
        assert!(!ticket.is_current());
        assert_eq!(ticket.accept(5), None);
    }

    #[test]
    fn test_new_ticket_after_advance_is_current() {
        let lifecycle = PageLifecycle::new();
        lifecycle.advance();
        let ticket = lifecycle.ticket();
        assert!(ticket.is_current());
    }

    #[tokio::test]
    async fn test_run_discards_output_of_superseded_work() {
        let lifecycle = PageLifecycle::new();
        let ticket = lifecycle.ticket();
        let advancing = lifecycle.clone();

        let result = ticket
            .run(async move {
                // Navigation happens while the request is in flight.
                advancing.advance();
                "stale"
            })
            .await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_run_keeps_output_of_live_work() {
        let lifecycle = PageLifecycle::new();
        let result = lifecycle.ticket().run(async { 42 }).await;
        assert_eq!(result, Some(42));
    }
}
