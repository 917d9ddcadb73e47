//! Simulated asynchronous data fetch
//!
//! This module models an external data source with artificial latency. The
//! single asynchronous primitive is the [`Deferred`] value; the callback and
//! suspend styles are thin adapters over it, so all three settle exactly once
//! and deliver the same records.

use clap::ValueEnum;
use std::fmt;

pub mod deferred;
pub mod simulator;

pub use deferred::{Deferred, Settlement, Settler};
pub use simulator::{FetchConfig, FetchSimulator, FetchState, DEFAULT_DELAY_MS, REJECTION_REASON};

/// The three interchangeable ways of waiting for a fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetchStyle {
    /// Continuation invoked with the records; no error channel
    Callback,
    /// Handle that settles once, with success and failure handlers
    Deferred,
    /// `async` routine awaited by the caller
    Suspend,
}

impl FetchStyle {
    pub const ALL: [FetchStyle; 3] = [FetchStyle::Callback, FetchStyle::Deferred, FetchStyle::Suspend];
}

impl fmt::Display for FetchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStyle::Callback => "callback",
            FetchStyle::Deferred => "deferred",
            FetchStyle::Suspend => "suspend",
        };
        f.write_str(name)
    }
}
