//! Core business logic module
//!
//! This module contains the dashboard components:
//! - `traits` - The presentation sink abstraction
//! - `record_store` - Canonical, immutable record set
//! - `view_filter` - Status-based views
//! - `aggregator` - Totals and currency formatting
//! - `dashboard` - Presentation driver wiring everything together

pub mod aggregator;
pub mod dashboard;
pub mod record_store;
pub mod traits;
pub mod view_filter;

pub use aggregator::{format_rupiah, total};
pub use dashboard::{Dashboard, LoadingGuard, StyleComparison};
pub use record_store::RecordStore;
pub use traits::PresentationSink;
pub use view_filter::{filter, StatusFilter};
