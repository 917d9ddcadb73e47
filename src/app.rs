//! Application runner
//!
//! Builds the record store and sink from CLI arguments and replays the
//! requested actions against a [`Dashboard`], in order.

use crate::cli::{Action, CliArgs, OutputFormat};
use crate::core::{Dashboard, PresentationSink, RecordStore};
use crate::fetch::FetchStyle;
use crate::types::DashboardError;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the record store named by the arguments
///
/// Falls back to the built-in sample records when no data file is given.
pub fn build_store(args: &CliArgs) -> Result<RecordStore, DashboardError> {
    match &args.data_file {
        Some(path) => RecordStore::from_csv_path(path),
        None => Ok(RecordStore::seeded()),
    }
}

/// Run each action against the dashboard, one after another
///
/// `load` waits through `style`; every other action is synchronous.
pub async fn run_actions<S: PresentationSink>(
    dashboard: &Dashboard<S>,
    actions: &[Action],
    style: FetchStyle,
) {
    for action in actions {
        info!(?action, "running action");
        match action {
            Action::Load => dashboard.load_with(style).await,
            Action::Paid => dashboard.show_paid(),
            Action::Unpaid => dashboard.show_unpaid(),
            Action::All => dashboard.show_all(),
            Action::Compare => {
                let comparison = dashboard.compare_styles().await;
                if comparison.all_identical() {
                    info!("all fetch styles delivered identical records");
                } else {
                    warn!("fetch styles delivered different results");
                }
            }
        }
    }
}

/// Run the whole application, writing the rendered views to `output`
pub async fn run<W>(args: &CliArgs, output: W) -> Result<(), DashboardError>
where
    W: Write + Send,
{
    let store = build_store(args)?;
    let config = args.to_fetch_config();
    info!(
        records = store.len(),
        delay_ms = config.delay.as_millis() as u64,
        succeed = config.succeed,
        "dashboard ready"
    );

    match args.format {
        OutputFormat::Table => {
            let sink = Arc::new(crate::io::TerminalSink::new(output));
            let dashboard = Dashboard::new(store, config, sink);
            run_actions(&dashboard, &args.actions, args.style).await;
        }
        OutputFormat::Csv => {
            let sink = Arc::new(crate::io::CsvSink::new(output));
            let dashboard = Dashboard::new(store, config, sink);
            run_actions(&dashboard, &args.actions, args.style).await;
        }
    }

    Ok(())
}
