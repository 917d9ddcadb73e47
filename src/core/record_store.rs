//! Record store holding the canonical transaction list
//!
//! The store is populated once at startup and never mutated afterwards. It
//! keeps records behind an `Arc<[TransactionRecord]>` so that cloning the store
//! (e.g. to hand it to a background fetch task) only bumps a reference count.
//!
//! # Validation
//!
//! Construction rejects duplicate transaction IDs and negative totals, so
//! every derived view can assume a well-formed record set.

use crate::io::csv_format::read_records_csv;
use crate::types::{DashboardError, PaymentStatus, TransactionRecord};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Immutable, ordered collection of transaction records
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Arc<[TransactionRecord]>,
}

impl RecordStore {
    /// Create a store from an ordered list of records
    ///
    /// # Errors
    ///
    /// * `DuplicateId` - if two records share a transaction ID
    /// * `InvalidAmount` - if a record has a negative total
    pub fn new(records: Vec<TransactionRecord>) -> Result<Self, DashboardError> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if !seen.insert(record.id) {
                return Err(DashboardError::duplicate_id(record.id));
            }
            if record.total < Decimal::ZERO {
                return Err(DashboardError::invalid_amount(
                    &record.total.to_string(),
                    record.id,
                ));
            }
        }

        Ok(RecordStore {
            records: records.into(),
        })
    }

    /// The built-in record set used when no data file is given
    pub fn seeded() -> Self {
        RecordStore {
            records: Arc::from(vec![
                TransactionRecord::new(1, "Andi", Decimal::from(200_000), PaymentStatus::Paid),
                TransactionRecord::new(2, "Budi", Decimal::from(150_000), PaymentStatus::Unpaid),
                TransactionRecord::new(3, "Citra", Decimal::from(300_000), PaymentStatus::Paid),
            ]),
        }
    }

    /// Load a store from a CSV file with columns `id,customer,total,status`
    pub fn from_csv_path(path: &Path) -> Result<Self, DashboardError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DashboardError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DashboardError::from(e),
        })?;

        let records = read_records_csv(file)?;
        debug!(path = %path.display(), count = records.len(), "loaded transaction records");

        Self::new(records)
    }

    /// The full ordered record set
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// An owned copy of the full record set
    pub fn snapshot(&self) -> Vec<TransactionRecord> {
        self.records.to_vec()
    }

    /// Hand the full record set to `callback` right away
    ///
    /// This is the undelayed counterpart of the fetch simulator's callback
    /// style.
    pub fn with_records<F, R>(&self, callback: F) -> R
    where
        F: FnOnce(&[TransactionRecord]) -> R,
    {
        callback(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::seeded()
    }
}
