//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records, payment status and list items
//! - `error`: Error types for the dashboard

pub mod error;
pub mod transaction;

pub use error::DashboardError;
pub use transaction::{ListItem, PaymentStatus, TransactionId, TransactionRecord};
