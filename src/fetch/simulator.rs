//! Simulated remote data source
//!
//! The simulator stands in for an API call: every fetch waits for the
//! configured delay on a spawned Tokio task and then settles with either the
//! full record set or a rejection, depending on `FetchConfig::succeed`.
//!
//! # Fetch styles
//!
//! ```text
//! fetch()                -> Deferred<Vec<TransactionRecord>>   (primitive)
//! fetch_with_callback(f) -> spawns a task awaiting fetch(), calls f on success
//! fetch_suspended()      -> async fn awaiting fetch()
//! ```
//!
//! All fetches must be started from inside a Tokio runtime.

use crate::core::RecordStore;
use crate::fetch::deferred::Deferred;
use crate::fetch::FetchStyle;
use crate::types::{DashboardError, TransactionRecord};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default artificial latency of a fetch, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Reason carried by a rejected fetch
pub const REJECTION_REASON: &str = "unable to retrieve transaction data";

/// Configuration for the fetch simulator
#[derive(Clone, Debug, PartialEq)]
pub struct FetchConfig {
    /// Artificial latency before a fetch settles
    pub delay: Duration,
    /// Whether fetches settle successfully
    pub succeed: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            succeed: true,
        }
    }
}

impl FetchConfig {
    /// Create a FetchConfig with custom values
    ///
    /// Delays above one minute are treated as a typo and fall back to the
    /// default.
    pub fn new(delay_ms: u64, succeed: bool) -> Self {
        let default = Self::default();

        let delay = if delay_ms > 60_000 {
            warn!(
                delay_ms,
                default_ms = DEFAULT_DELAY_MS,
                "fetch delay out of range, using default"
            );
            default.delay
        } else {
            Duration::from_millis(delay_ms)
        };

        Self { delay, succeed }
    }
}

/// Lifecycle of the most recent fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has been started yet
    Idle,
    /// A fetch is waiting for its delay to elapse
    Pending,
    /// The fetch settled with the record set
    Fulfilled,
    /// The fetch settled with an error
    Rejected,
}

/// Generation-tagged state of the most recent fetch
#[derive(Debug)]
struct FetchTracker {
    generation: u64,
    state: FetchState,
}

/// Delayed, single-settlement access to a record store
#[derive(Debug, Clone)]
pub struct FetchSimulator {
    store: RecordStore,
    config: FetchConfig,
    tracker: Arc<Mutex<FetchTracker>>,
}

impl FetchSimulator {
    pub fn new(store: RecordStore, config: FetchConfig) -> Self {
        Self {
            store,
            config,
            tracker: Arc::new(Mutex::new(FetchTracker {
                generation: 0,
                state: FetchState::Idle,
            })),
        }
    }

    /// State of the most recently started fetch
    pub fn state(&self) -> FetchState {
        self.tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    /// Mark a new fetch as pending and return its generation
    fn begin(tracker: &Mutex<FetchTracker>) -> u64 {
        let mut tracker = tracker.lock().unwrap_or_else(PoisonError::into_inner);
        tracker.generation += 1;
        tracker.state = FetchState::Pending;
        tracker.generation
    }

    /// Record a settlement, unless a newer fetch has started since
    fn finish(tracker: &Mutex<FetchTracker>, generation: u64, next: FetchState) {
        let mut tracker = tracker.lock().unwrap_or_else(PoisonError::into_inner);
        if tracker.generation == generation {
            tracker.state = next;
        } else {
            debug!(
                generation,
                latest = tracker.generation,
                "superseded fetch settled"
            );
        }
    }

    /// Deferred-value style
    ///
    /// Starts the fetch immediately and returns a handle that settles once
    /// the delay has elapsed.
    pub fn fetch(&self) -> Deferred<Vec<TransactionRecord>> {
        let (settler, deferred) = Deferred::pending();
        let store = self.store.clone();
        let config = self.config.clone();
        let tracker = Arc::clone(&self.tracker);

        let generation = Self::begin(&tracker);
        debug!(
            generation,
            delay_ms = config.delay.as_millis() as u64,
            "fetch started"
        );

        tokio::spawn(async move {
            tokio::time::sleep(config.delay).await;

            if config.succeed {
                Self::finish(&tracker, generation, FetchState::Fulfilled);
                settler.resolve(store.snapshot());
            } else {
                Self::finish(&tracker, generation, FetchState::Rejected);
                settler.reject(DashboardError::fetch_rejected(REJECTION_REASON));
            }
        });

        deferred
    }

    /// Callback style
    ///
    /// `callback` receives the records once the fetch fulfills. There is no
    /// error channel: on rejection the callback is dropped without running.
    pub fn fetch_with_callback<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<TransactionRecord>) + Send + 'static,
    {
        let deferred = self.fetch();

        tokio::spawn(async move {
            match deferred.await {
                Ok(records) => callback(records),
                Err(error) => debug!(%error, "fetch rejected, callback not invoked"),
            }
        })
    }

    /// Suspend style
    pub async fn fetch_suspended(&self) -> Result<Vec<TransactionRecord>, DashboardError> {
        self.fetch().await
    }

    /// Fetch through any of the three styles and collect the outcome
    pub async fn fetch_with_style(
        &self,
        style: FetchStyle,
    ) -> Result<Vec<TransactionRecord>, DashboardError> {
        match style {
            FetchStyle::Callback => {
                let (sender, receiver) = oneshot::channel();
                self.fetch_with_callback(move |records| {
                    let _ = sender.send(records);
                });
                receiver.await.map_err(|_| DashboardError::NotDelivered)
            }
            FetchStyle::Deferred => self.fetch().then(Ok, Err).await,
            FetchStyle::Suspend => self.fetch_suspended().await,
        }
    }
}
