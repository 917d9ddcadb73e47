//! Error types for the Transaction Dashboard
//!
//! This module defines all error types that can occur while loading records,
//! fetching them through the simulated data source, or writing output.
//!
//! # Error Categories
//!
//! - **Fetch Errors**: The simulated data source rejected or never delivered
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid status or amount values
//! - **Record Errors**: Duplicate transaction IDs in the record set

use crate::types::TransactionId;
use thiserror::Error;

/// Main error type for the dashboard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// The fetch simulator settled with a rejection
    ///
    /// This is the only failure path of a fetch. It is logged by the caller
    /// and never retried.
    #[error("Failed to fetch transactions: {reason}")]
    FetchRejected {
        /// Description of why the fetch failed
        reason: String,
    },

    /// A fetch was dropped before it settled
    ///
    /// Happens when the settling side goes away without resolving or
    /// rejecting, e.g. a callback-style fetch whose continuation never ran.
    #[error("Fetch finished without delivering a result")]
    NotDelivered,

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown payment status in input
    #[error("Invalid status '{status}' for transaction {id}")]
    InvalidStatus {
        /// The invalid status string
        status: String,
        /// Transaction ID
        id: TransactionId,
    },

    /// Invalid amount value (negative or malformed)
    #[error("Invalid amount '{amount}' for transaction {id}")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Transaction ID
        id: TransactionId,
    },

    /// Duplicate transaction ID encountered
    ///
    /// Transaction IDs must be unique within the record store.
    #[error("Duplicate transaction ID {id}")]
    DuplicateId {
        /// Transaction ID that is duplicated
        id: TransactionId,
    },
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for DashboardError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DashboardError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DashboardError {
    /// Create a FetchRejected error
    pub fn fetch_rejected(reason: &str) -> Self {
        DashboardError::FetchRejected {
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(status: &str, id: TransactionId) -> Self {
        DashboardError::InvalidStatus {
            status: status.to_string(),
            id,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: TransactionId) -> Self {
        DashboardError::InvalidAmount {
            amount: amount.to_string(),
            id,
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(id: TransactionId) -> Self {
        DashboardError::DuplicateId { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fetch_rejected(
        DashboardError::FetchRejected { reason: "service unavailable".to_string() },
        "Failed to fetch transactions: service unavailable"
    )]
    #[case::not_delivered(
        DashboardError::NotDelivered,
        "Fetch finished without delivering a result"
    )]
    #[case::file_not_found(
        DashboardError::FileNotFound { path: "records.csv".to_string() },
        "File not found: records.csv"
    )]
    #[case::parse_error_with_line(
        DashboardError::ParseError { line: Some(4), message: "Invalid field".to_string() },
        "CSV parse error at line 4: Invalid field"
    )]
    #[case::parse_error_without_line(
        DashboardError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_status(
        DashboardError::InvalidStatus { status: "refunded".to_string(), id: 9 },
        "Invalid status 'refunded' for transaction 9"
    )]
    #[case::invalid_amount(
        DashboardError::InvalidAmount { amount: "-5".to_string(), id: 2 },
        "Invalid amount '-5' for transaction 2"
    )]
    #[case::duplicate_id(
        DashboardError::DuplicateId { id: 3 },
        "Duplicate transaction ID 3"
    )]
    fn test_error_display(#[case] error: DashboardError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::fetch_rejected(
        DashboardError::fetch_rejected("timeout"),
        DashboardError::FetchRejected { reason: "timeout".to_string() }
    )]
    #[case::invalid_status(
        DashboardError::invalid_status("void", 1),
        DashboardError::InvalidStatus { status: "void".to_string(), id: 1 }
    )]
    #[case::invalid_amount(
        DashboardError::invalid_amount("abc", 5),
        DashboardError::InvalidAmount { amount: "abc".to_string(), id: 5 }
    )]
    #[case::duplicate_id(DashboardError::duplicate_id(8), DashboardError::DuplicateId { id: 8 })]
    fn test_helper_functions(#[case] result: DashboardError, #[case] expected: DashboardError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: DashboardError = io_error.into();
        assert!(matches!(error, DashboardError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
