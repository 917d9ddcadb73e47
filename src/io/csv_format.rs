//! CSV format handling for transaction records and list output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Reading a whole record set from any reader
//! - List output serialization
//!
//! Input files use the columns `id,customer,total,status`.

use crate::types::{DashboardError, ListItem, PaymentStatus, TransactionId, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::{Read, Write};
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Amount and status are kept as strings so conversion can report the
/// offending value together with the transaction ID.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: TransactionId,
    pub customer: String,
    pub total: String,
    pub status: String,
}

/// Convert a CsvRecord to a TransactionRecord
///
/// This function:
/// - Parses the status string (case insensitive) into a PaymentStatus
/// - Parses the total into a Decimal and rejects negative values
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionRecord, DashboardError> {
    let status = match csv_record.status.trim().to_lowercase().as_str() {
        "paid" => PaymentStatus::Paid,
        "unpaid" => PaymentStatus::Unpaid,
        _ => {
            return Err(DashboardError::invalid_status(
                &csv_record.status,
                csv_record.id,
            ))
        }
    };

    let total = Decimal::from_str(csv_record.total.trim())
        .map_err(|_| DashboardError::invalid_amount(&csv_record.total, csv_record.id))?;
    if total.is_sign_negative() && !total.is_zero() {
        return Err(DashboardError::invalid_amount(
            &csv_record.total,
            csv_record.id,
        ));
    }

    Ok(TransactionRecord {
        id: csv_record.id,
        customer: csv_record.customer,
        total,
        status,
    })
}

/// Read every record from a CSV source
///
/// Unlike a streaming processor, the record set is all-or-nothing: the first
/// malformed row aborts loading.
pub fn read_records_csv<R: Read>(input: R) -> Result<Vec<TransactionRecord>, DashboardError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    reader
        .deserialize::<CsvRecord>()
        .map(|row| convert_csv_record(row?))
        .collect()
}

/// Write a rendered list in CSV format
///
/// Writes the columns `customer,total,status` in the order given.
pub fn write_items_csv(items: &[ListItem], output: &mut dyn Write) -> Result<(), DashboardError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["customer", "total", "status"])?;

    for item in items {
        writer.write_record([
            item.customer.as_str(),
            item.total.to_string().as_str(),
            item.status.as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn csv_record(total: &str, status: &str) -> CsvRecord {
        CsvRecord {
            id: 1,
            customer: "Andi".to_string(),
            total: total.to_string(),
            status: status.to_string(),
        }
    }

    #[rstest]
    #[case("paid", PaymentStatus::Paid)]
    #[case("unpaid", PaymentStatus::Unpaid)]
    #[case("PAID", PaymentStatus::Paid)] // case insensitive
    fn test_convert_csv_record_status(#[case] status: &str, #[case] expected: PaymentStatus) {
        let record = convert_csv_record(csv_record("200000", status)).unwrap();

        assert_eq!(record.status, expected);
        assert_eq!(record.total, Decimal::from(200_000));
        assert_eq!(record.customer, "Andi");
    }

    #[rstest]
    #[case::unknown_status("100", "refunded", DashboardError::invalid_status("refunded", 1))]
    #[case::malformed_total("abc", "paid", DashboardError::invalid_amount("abc", 1))]
    #[case::negative_total("-10", "paid", DashboardError::invalid_amount("-10", 1))]
    fn test_convert_csv_record_invalid(
        #[case] total: &str,
        #[case] status: &str,
        #[case] expected: DashboardError,
    ) {
        let result = convert_csv_record(csv_record(total, status));
        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn test_read_records_csv_preserves_order() {
        let input = "id,customer,total,status\n\
                     1, Andi ,200000,paid\n\
                     2,Budi,150000.50,unpaid\n";

        let records = read_records_csv(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].customer, "Andi");
        assert_eq!(records[1].total, Decimal::from_str("150000.50").unwrap());
    }

    #[test]
    fn test_read_records_csv_reports_parse_error() {
        let input = "id,customer,total,status\nnot-a-number,Andi,1,paid\n";

        let result = read_records_csv(input.as_bytes());
        assert!(matches!(result, Err(DashboardError::ParseError { .. })));
    }

    #[test]
    fn test_write_items_csv() {
        let items = vec![
            ListItem {
                customer: "Andi".to_string(),
                total: Decimal::from(200_000),
                status: PaymentStatus::Paid,
            },
            ListItem {
                customer: "Budi".to_string(),
                total: Decimal::from(150_000),
                status: PaymentStatus::Unpaid,
            },
        ];
        let mut output = Vec::new();

        write_items_csv(&items, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "customer,total,status\nAndi,200000,paid\nBudi,150000,unpaid\n"
        );
    }
}
