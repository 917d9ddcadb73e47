//! Presentation driver
//!
//! The `Dashboard` ties the record store, fetch simulator and a presentation
//! sink together. It exposes the four user actions:
//!
//! - `load` - show the loading indicator, fetch, render, hide the indicator
//! - `show_paid`, `show_unpaid`, `show_all` - filter the store synchronously
//!
//! # Loading indicator
//!
//! `load` holds a [`LoadingGuard`] for the whole fetch-and-render sequence.
//! The guard hides the indicator when dropped, so it is cleared on success,
//! on rejection and when a sink panics while rendering.

use crate::core::aggregator::{format_rupiah, total};
use crate::core::traits::PresentationSink;
use crate::core::view_filter::{filter, StatusFilter};
use crate::core::RecordStore;
use crate::fetch::{FetchConfig, FetchSimulator, FetchStyle};
use crate::types::{DashboardError, ListItem, TransactionRecord};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shows the loading indicator for as long as it is alive
pub struct LoadingGuard<'a, S: PresentationSink + ?Sized> {
    sink: &'a S,
}

impl<'a, S: PresentationSink + ?Sized> LoadingGuard<'a, S> {
    pub fn show(sink: &'a S) -> Self {
        sink.set_loading(true);
        Self { sink }
    }
}

impl<S: PresentationSink + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.set_loading(false);
    }
}

/// Outcome of fetching once through every style
#[derive(Debug, Clone, PartialEq)]
pub struct StyleComparison {
    pub results: Vec<(FetchStyle, Result<Vec<TransactionRecord>, DashboardError>)>,
}

impl StyleComparison {
    /// Whether every style succeeded with the same records
    pub fn all_identical(&self) -> bool {
        let mut results = self.results.iter().map(|(_, result)| result);
        match results.next() {
            Some(Ok(first)) => results.all(|other| other.as_ref() == Ok(first)),
            _ => false,
        }
    }
}

/// Presentation driver over an injected store and sink
pub struct Dashboard<S: PresentationSink> {
    store: RecordStore,
    fetcher: FetchSimulator,
    sink: Arc<S>,
}

impl<S: PresentationSink> Dashboard<S> {
    pub fn new(store: RecordStore, config: FetchConfig, sink: Arc<S>) -> Self {
        let fetcher = FetchSimulator::new(store.clone(), config);
        Self {
            store,
            fetcher,
            sink,
        }
    }

    /// Fetch the records and render them
    ///
    /// A rejected fetch is logged and nothing is rendered. The loading
    /// indicator is hidden again before this returns in every case.
    pub async fn load(&self) {
        self.load_with(FetchStyle::Suspend).await
    }

    /// Same as [`Dashboard::load`], waiting through the given fetch style
    pub async fn load_with(&self, style: FetchStyle) {
        let _loading = LoadingGuard::show(self.sink.as_ref());

        match self.fetcher.fetch_with_style(style).await {
            Ok(records) => {
                info!(count = records.len(), %style, "transactions received");
                self.present(&records);
            }
            Err(error) => {
                error!(%error, %style, "failed to load transactions");
            }
        }
    }

    pub fn show_paid(&self) {
        self.show(StatusFilter::Paid);
    }

    pub fn show_unpaid(&self) {
        self.show(StatusFilter::Unpaid);
    }

    pub fn show_all(&self) {
        self.show(StatusFilter::All);
    }

    /// Render the store contents matching `predicate`, without fetching
    pub fn show(&self, predicate: StatusFilter) {
        let view = filter(self.store.records(), predicate);
        self.present(view);
    }

    /// Fetch once through every style and report what each delivered
    ///
    /// The three fetches run side by side, so this takes one fetch delay.
    pub async fn compare_styles(&self) -> StyleComparison {
        let fetches = FetchStyle::ALL.map(|style| async move {
            (style, self.fetcher.fetch_with_style(style).await)
        });
        let results = join_all(fetches).await;

        for (style, result) in &results {
            match result {
                Ok(records) => info!(%style, count = records.len(), "style delivered records"),
                Err(error) => warn!(%style, %error, "style did not deliver records"),
            }
        }

        StyleComparison { results }
    }

    fn present<'a, I>(&self, records: I)
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let records: Vec<&TransactionRecord> = records.into_iter().collect();
        let items: Vec<ListItem> = records.iter().map(|record| ListItem::from(*record)).collect();

        self.sink.render_list(&items);
        self.sink
            .render_total(&format_rupiah(total(records.iter().copied())));
    }
}
