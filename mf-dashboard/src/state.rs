//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use mf_chart::{Dataset, Figure};
use mf_db::models::StateInfo;
use mf_db::Database;

/// Default dropdown selection on page load.
pub const DEFAULT_STATE: &str = "Alabama";

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether startup loading is still in progress
    pub loading: Signal<bool>,
    /// Fatal startup error, if any
    pub error_msg: Signal<Option<String>>,
    /// State lookup entries for the dropdowns
    pub states: Signal<Vec<StateInfo>>,
    /// Which tab is showing
    pub active_tab: Signal<Dataset>,
    /// Selected state on the monthly tab
    pub monthly_state: Signal<String>,
    /// Selected state on the quarterly tab
    pub quarterly_state: Signal<String>,
    /// Nationwide figure, computed once at startup (tab 3 is static)
    pub national_figure: Signal<Option<Figure>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            states: Signal::new(Vec::new()),
            active_tab: Signal::new(Dataset::MonthlyByState),
            monthly_state: Signal::new(DEFAULT_STATE.to_string()),
            quarterly_state: Signal::new(DEFAULT_STATE.to_string()),
            national_figure: Signal::new(None),
        }
    }

    /// The selection signal backing one tab's dropdown, if that tab has one.
    pub fn selection_for(&self, tab: Dataset) -> Option<Signal<String>> {
        match tab {
            Dataset::MonthlyByState => Some(self.monthly_state),
            Dataset::QuarterlyByState => Some(self.quarterly_state),
            Dataset::QuarterlyNationwide => None,
        }
    }
}
