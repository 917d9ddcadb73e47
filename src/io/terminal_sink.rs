//! Plain-text presentation sinks
//!
//! `TerminalSink` prints a table of customers, amounts and status badges plus
//! a `Total:` line. `CsvSink` emits each rendered list as CSV and ignores the
//! loading indicator. Write failures are logged and otherwise ignored, since a
//! sink is write-only from the dashboard's point of view.

use crate::core::aggregator::format_rupiah;
use crate::core::traits::PresentationSink;
use crate::io::csv_format::write_items_csv;
use crate::types::ListItem;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Shown in place of the table when a view has no rows
pub const EMPTY_STATE: &str = "No transactions to show";

/// Human-readable table output
#[derive(Debug)]
pub struct TerminalSink<W: Write + Send> {
    output: Mutex<W>,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_with(&self, f: impl FnOnce(&mut W) -> std::io::Result<()>) {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = f(&mut output).and_then(|_| output.flush()) {
            warn!(%error, "failed to write to terminal");
        }
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn render_list(&self, items: &[ListItem]) {
        self.write_with(|out| {
            if items.is_empty() {
                return writeln!(out, "{}", EMPTY_STATE);
            }

            let width = items
                .iter()
                .map(|item| item.customer.chars().count())
                .max()
                .unwrap_or(0)
                .max("Customer".len());

            writeln!(out, "{:<width$}  {:>16}  {}", "Customer", "Amount", "Status")?;
            for item in items {
                writeln!(
                    out,
                    "{:<width$}  {:>16}  {}",
                    item.customer,
                    format_rupiah(item.total),
                    item.status.as_str().to_uppercase()
                )?;
            }
            Ok(())
        });
    }

    fn render_total(&self, formatted: &str) {
        self.write_with(|out| writeln!(out, "Total: {}", formatted));
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            self.write_with(|out| writeln!(out, "Loading..."));
        }
    }
}

/// CSV output, one block per rendered list
#[derive(Debug)]
pub struct CsvSink<W: Write + Send> {
    output: Mutex<W>,
}

impl<W: Write + Send> CsvSink<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> PresentationSink for CsvSink<W> {
    fn render_list(&self, items: &[ListItem]) {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = write_items_csv(items, &mut *output) {
            warn!(%error, "failed to write CSV output");
        }
    }

    fn render_total(&self, formatted: &str) {
        debug!(total = formatted, "aggregate total");
    }

    fn set_loading(&self, visible: bool) {
        debug!(visible, "loading indicator");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use rust_decimal::Decimal;

    fn items() -> Vec<ListItem> {
        vec![
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
        ]
    }

    #[test]
    fn test_terminal_sink_renders_table() {
        let sink = TerminalSink::new(Vec::new());
        sink.render_list(&items());
        sink.render_total("Rp 350.000");

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Customer"));
        assert!(lines[1].starts_with("Andi"));
        assert!(lines[1].contains("Rp 200.000"));
        assert!(lines[1].ends_with("PAID"));
        assert!(lines[2].ends_with("UNPAID"));
        assert_eq!(lines[3], "Total: Rp 350.000");
    }

    #[test]
    fn test_terminal_sink_empty_state() {
        let sink = TerminalSink::new(Vec::new());
        sink.render_list(&[]);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, format!("{}\n", EMPTY_STATE));
    }

    #[test]
    fn test_terminal_sink_only_prints_loading_when_shown() {
        let sink = TerminalSink::new(Vec::new());
        sink.set_loading(true);
        sink.set_loading(false);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "Loading...\n");
    }

    #[test]
    fn test_csv_sink_writes_rows_only() {
        let sink = CsvSink::new(Vec::new());
        sink.set_loading(true);
        sink.render_list(&items());
        sink.render_total("Rp 350.000");
        sink.set_loading(false);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "customer,total,status\nAndi,200000,paid\nBudi,150000,unpaid\n"
        );
    }
}
