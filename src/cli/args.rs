use crate::fetch::{FetchConfig, FetchStyle, DEFAULT_DELAY_MS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Render, filter and total a list of transactions
#[derive(Parser, Debug)]
#[command(name = "transaction-dashboard")]
#[command(about = "Render, filter and total a list of transactions", long_about = None)]
pub struct CliArgs {
    /// Actions to run, in order
    #[arg(
        value_name = "ACTION",
        default_value = "load",
        help = "Actions to run in order: load, paid, unpaid, all, compare"
    )]
    pub actions: Vec<Action>,

    /// Optional CSV file with columns id,customer,total,status
    #[arg(
        long = "data",
        value_name = "FILE",
        help = "CSV file to load records from (default: built-in sample data)"
    )]
    pub data_file: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds
    #[arg(
        long = "delay-ms",
        value_name = "MS",
        help = "Simulated fetch latency in milliseconds (default: 1000)"
    )]
    pub delay_ms: Option<u64>,

    /// Make every simulated fetch fail
    #[arg(long = "fail", help = "Make every simulated fetch reject")]
    pub fail: bool,

    /// Fetch style used by the load action
    #[arg(
        long = "style",
        value_name = "STYLE",
        default_value = "suspend",
        help = "How load waits for the fetch: 'callback', 'deferred' or 'suspend'"
    )]
    pub style: FetchStyle,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Output format: 'table' or 'csv'"
    )]
    pub format: OutputFormat,
}

/// User-triggered dashboard actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Fetch the records with a delay and render them
    Load,
    /// Show paid transactions only
    Paid,
    /// Show unpaid transactions only
    Unpaid,
    /// Show every transaction
    All,
    /// Fetch through every style and compare the results
    Compare,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Create a FetchConfig from CLI arguments
    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig::new(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS), !self.fail)
    }
}
