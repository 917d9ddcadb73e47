//! Transaction Dashboard Library
//! # Overview
//!
//! This library renders a small in-memory transaction list, filters it by
//! payment status, totals it, and simulates an asynchronous data fetch that
//! can be awaited in three interchangeable styles.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, PaymentStatus, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::record_store`] - Immutable canonical record set
//!   - [`core::view_filter`] - Paid / unpaid / all views
//!   - [`core::aggregator`] - Exact totals and rupiah formatting
//!   - [`core::dashboard`] - Presentation driver with loading indicator
//! - [`fetch`] - Simulated data source with deferred, callback and suspend styles
//! - [`io`] - CSV input and presentation sinks
//! - [`app`] - Replays CLI actions against a dashboard
//!
//! # Data Flow
//!
//! ```text
//! RecordStore ──> view_filter ──> aggregator ──> PresentationSink
//!      │                                              ▲
//!      └──> FetchSimulator (delay) ──> Dashboard::load ┘
//! ```

pub mod app;
pub mod cli;
pub mod core;
pub mod fetch;
pub mod io;
pub mod types;

pub use crate::core::{Dashboard, PresentationSink, RecordStore, StatusFilter};
pub use fetch::{Deferred, FetchConfig, FetchSimulator, FetchState, FetchStyle};
pub use types::{DashboardError, ListItem, PaymentStatus, TransactionId, TransactionRecord};
