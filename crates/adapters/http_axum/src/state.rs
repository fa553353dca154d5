//! Shared application state for axum handlers.

use std::sync::Arc;

use camcal_domain::calendar::Calendar;

/// Application state shared across all axum handlers.
///
/// The calendar is read-only configuration, validated before the server
/// starts; handlers only ever clone the `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The validated page configuration.
    pub calendar: Arc<Calendar>,
}

impl AppState {
    /// Wrap a validated calendar for sharing across handlers.
    #[must_use]
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }
}
