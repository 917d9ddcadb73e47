//! Transaction Dashboard CLI
//!
//! Command-line front end that replays dashboard actions and prints each
//! rendered view to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                  # load the sample data
//! cargo run -- load paid unpaid all
//! cargo run -- --style callback --delay-ms 2000 load
//! cargo run -- --data transactions.csv --format csv all
//! cargo run -- --fail load                   # exercise the rejection path
//! cargo run -- compare
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to adjust.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (data file not found, malformed records, runtime failure)

use std::process;
use tracing_subscriber::EnvFilter;
use transaction_dashboard::{app, cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    // One thread is enough: the only concurrency is the simulated fetch delay
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: Failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(app::run(&args, std::io::stdout())) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
