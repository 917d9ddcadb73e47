//! Transaction-related types for the Transaction Dashboard
//!
//! This module defines the transaction record, its payment status and the
//! read-only list item handed to presentation sinks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier
///
/// Supports transaction IDs from 0 to 4,294,967,295
pub type TransactionId = u32;

/// Payment status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The customer has paid the full total
    Paid,

    /// The total is still outstanding
    Unpaid,
}

impl PaymentStatus {
    /// Lowercase name, as used in CSV input and output
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transaction record
///
/// Records are immutable once the record store has been built. Every other
/// component works on borrowed subsets or cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Unique, stable transaction identifier
    pub id: TransactionId,

    /// Customer name
    pub customer: String,

    /// Non-negative transaction total
    pub total: Decimal,

    /// Whether the transaction has been paid
    pub status: PaymentStatus,
}

impl TransactionRecord {
    pub fn new(
        id: TransactionId,
        customer: impl Into<String>,
        total: Decimal,
        status: PaymentStatus,
    ) -> Self {
        TransactionRecord {
            id,
            customer: customer.into(),
            total,
            status,
        }
    }
}

/// One row of a rendered list
///
/// This is everything a presentation sink is allowed to see about a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub customer: String,
    pub total: Decimal,
    pub status: PaymentStatus,
}

impl From<&TransactionRecord> for ListItem {
    fn from(record: &TransactionRecord) -> Self {
        ListItem {
            customer: record.customer.clone(),
            total: record.total,
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PaymentStatus::Paid, "paid")]
    #[case(PaymentStatus::Unpaid, "unpaid")]
    fn test_status_display(#[case] status: PaymentStatus, #[case] expected: &str) {
        assert_eq!(status.to_string(), expected);
        assert_eq!(status.as_str(), expected);
    }

    #[test]
    fn test_list_item_from_record_keeps_display_fields() {
        let record = TransactionRecord::new(7, "Andi", Decimal::from(200_000), PaymentStatus::Paid);
        let item = ListItem::from(&record);

        assert_eq!(item.customer, "Andi");
        assert_eq!(item.total, Decimal::from(200_000));
        assert_eq!(item.status, PaymentStatus::Paid);
    }
}
