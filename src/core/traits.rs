//! Core traits for presenting derived views
//!
//! The dashboard only ever pushes already-derived values into a sink; it never
//! reads anything back. Terminal, CSV and in-memory sinks implement the same
//! interface and can be swapped freely.

use crate::types::ListItem;

/// Write-only display surface
///
/// Methods take `&self` so a sink can be shared between the dashboard and a
/// loading guard; implementations use interior mutability.
pub trait PresentationSink: Send + Sync {
    /// Replace the displayed list with `items`, in order
    fn render_list(&self, items: &[ListItem]);

    /// Replace the displayed aggregate with an already formatted amount
    fn render_total(&self, formatted: &str);

    /// Show or hide the loading indicator
    fn set_loading(&self, visible: bool);
}
