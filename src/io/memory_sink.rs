//! In-memory presentation sink
//!
//! Records everything pushed into it so callers can inspect the current view.
//! A list of `None` means nothing has been rendered yet, which is distinct
//! from an empty list that was rendered.

use crate::core::traits::PresentationSink;
use crate::types::ListItem;
use std::sync::{Mutex, PoisonError};

/// Current state of a [`MemorySink`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinkSnapshot {
    /// Last rendered list, `None` if nothing was rendered yet
    pub list: Option<Vec<ListItem>>,
    /// Last rendered formatted total
    pub total: Option<String>,
    /// Whether the loading indicator is currently visible
    pub loading: bool,
    /// Number of times a list has been rendered
    pub list_renders: usize,
    /// Every loading indicator change, in order
    pub loading_history: Vec<bool>,
}

#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<SinkSnapshot>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SinkSnapshot {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn with_state(&self, f: impl FnOnce(&mut SinkSnapshot)) {
        f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

impl PresentationSink for MemorySink {
    fn render_list(&self, items: &[ListItem]) {
        self.with_state(|state| {
            state.list = Some(items.to_vec());
            state.list_renders += 1;
        });
    }

    fn render_total(&self, formatted: &str) {
        self.with_state(|state| state.total = Some(formatted.to_string()));
    }

    fn set_loading(&self, visible: bool) {
        self.with_state(|state| {
            state.loading = visible;
            state.loading_history.push(visible);
        });
    }
}
