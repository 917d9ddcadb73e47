//! Status-based views over a record set

use crate::types::{PaymentStatus, TransactionRecord};

/// Predicate selecting which records a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Paid,
    Unpaid,
    All,
}

impl StatusFilter {
    /// Whether `record` belongs in this view
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            StatusFilter::Paid => record.status == PaymentStatus::Paid,
            StatusFilter::Unpaid => record.status == PaymentStatus::Unpaid,
            StatusFilter::All => true,
        }
    }
}

/// Select the records matching `predicate`, keeping their relative order
///
/// Accepts the store contents or the result of an earlier filter.
pub fn filter<'a, I>(records: I, predicate: StatusFilter) -> Vec<&'a TransactionRecord>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    records
        .into_iter()
        .filter(|record| predicate.matches(record))
        .collect()
}
