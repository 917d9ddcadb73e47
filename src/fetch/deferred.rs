//! Single-settlement deferred value
//!
//! A `Deferred<T>` is the read side of a one-shot result: it settles exactly
//! once, either to `Ok(T)` or to a `DashboardError`. The write side is a
//! `Settler<T>` whose `resolve` and `reject` consume it, so a second
//! settlement cannot be expressed.
//!
//! `Deferred<T>` is a `Future` yielding `Result<T, DashboardError>`. Handlers
//! for both outcomes can be chained with [`Deferred::then`]. Dropping the
//! settler without settling yields `DashboardError::NotDelivered`.

use crate::types::DashboardError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::debug;

/// Result carried by a deferred value
pub type Settlement<T> = Result<T, DashboardError>;

/// Read side of a pending result
#[derive(Debug)]
#[must_use = "a deferred value does nothing unless awaited"]
pub struct Deferred<T> {
    receiver: oneshot::Receiver<Settlement<T>>,
}

/// Write side of a pending result
#[derive(Debug)]
pub struct Settler<T> {
    sender: oneshot::Sender<Settlement<T>>,
}

impl<T> Deferred<T> {
    /// Create an unsettled deferred value and the settler that completes it
    pub fn pending() -> (Settler<T>, Deferred<T>) {
        let (sender, receiver) = oneshot::channel();
        (Settler { sender }, Deferred { receiver })
    }

    /// Wait for settlement and pass the outcome to the matching handler
    ///
    /// Exactly one of `on_fulfilled` and `on_rejected` runs, exactly once.
    pub async fn then<U, F, G>(self, on_fulfilled: F, on_rejected: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(DashboardError) -> U,
    {
        match self.await {
            Ok(value) => on_fulfilled(value),
            Err(error) => on_rejected(error),
        }
    }
}

impl<T> Future for Deferred<T> {
    type Output = Settlement<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(settlement)) => Poll::Ready(settlement),
            Poll::Ready(Err(_)) => Poll::Ready(Err(DashboardError::NotDelivered)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Settler<T> {
    /// Settle successfully with `value`
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settle with an error
    pub fn reject(self, error: DashboardError) {
        self.settle(Err(error));
    }

    /// Settle with an already built result
    pub fn settle(self, result: Settlement<T>) {
        if self.sender.send(result).is_err() {
            debug!("deferred value dropped before settlement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_delivers_value() {
        let (settler, deferred) = Deferred::pending();
        settler.resolve(42);

        assert_eq!(deferred.await, Ok(42));
    }

    #[tokio::test]
    async fn test_reject_delivers_error() {
        let (settler, deferred) = Deferred::<u32>::pending();
        settler.reject(DashboardError::fetch_rejected("offline"));

        assert_eq!(
            deferred.await,
            Err(DashboardError::fetch_rejected("offline"))
        );
    }

    #[tokio::test]
    async fn test_dropped_settler_is_not_delivered() {
        let (settler, deferred) = Deferred::<u32>::pending();
        drop(settler);

        assert_eq!(deferred.await, Err(DashboardError::NotDelivered));
    }

    #[tokio::test]
    async fn test_then_runs_success_handler_only() {
        let (settler, deferred) = Deferred::pending();
        settler.resolve(vec![1, 2, 3]);

        let outcome = deferred
            .then(|values| format!("got {}", values.len()), |e| format!("failed: {e}"))
            .await;

        assert_eq!(outcome, "got 3");
    }

    #[tokio::test]
    async fn test_then_runs_failure_handler_only() {
        let (settler, deferred) = Deferred::<Vec<u32>>::pending();
        settler.settle(Err(DashboardError::NotDelivered));

        let outcome = deferred
            .then(|values| format!("got {}", values.len()), |e| format!("failed: {e}"))
            .await;

        assert_eq!(outcome, "failed: Fetch finished without delivering a result");
    }

    #[test]
    fn test_settling_after_reader_dropped_is_harmless() {
        let (settler, deferred) = Deferred::<u32>::pending();
        drop(deferred);

        settler.resolve(1);
    }
}
