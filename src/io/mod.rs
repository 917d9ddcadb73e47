//! I/O module
//!
//! Handles CSV input and every presentation sink.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, list serialization)
//! - `terminal_sink` - Table and CSV sinks writing to any `Write`
//! - `memory_sink` - Sink that keeps the current view in memory

pub mod csv_format;
pub mod memory_sink;
pub mod terminal_sink;

pub use csv_format::{convert_csv_record, read_records_csv, write_items_csv, CsvRecord};
pub use memory_sink::{MemorySink, SinkSnapshot};
pub use terminal_sink::{CsvSink, TerminalSink};
