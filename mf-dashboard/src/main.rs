//! Motor Fuels: Highway Consumption Analysis
//!
//! A three-tab dashboard over the FHWA motor-fuel highway consumption
//! tables: monthly by state, quarterly by state and quarterly nationwide.
//! Tabs 1-2 carry a state dropdown; tab 3 is a static nationwide chart
//! computed once at startup.
//!
//! Data flow:
//! 1. `build.rs` copies the fixture CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database.
//! 4. A selection change re-runs `mf_chart::render` for that tab and the
//!    resulting figure is drawn by D3.js via the js_bridge.

mod components;
mod js_bridge;
mod state;

use components::{ChartContainer, ErrorDisplay, LoadingSpinner, PageHeader, StateSelector, TabBar};
use dioxus::prelude::*;
use mf_chart::{Dataset, Figure};
use mf_db::Database;
use state::AppState;

/// Monthly-by-state consumption table.
const MONTHLY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/monthly.csv"));
/// Quarterly-by-state consumption table.
const QUARTERLY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/quarterly_states.csv"));
/// Quarterly nationwide aggregate table.
const NATION_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/quarterly_nation.csv"));
/// State name to FHWA code lookup.
const STATE_CODES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/state_codes.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mf-dashboard-root"))
        .launch(App);
}

/// Chart container DOM id for one tab.
fn chart_id(tab: Dataset) -> String {
    format!("{}-chart", tab.slug())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load all tables on mount. Any failure here is fatal: the error box
    // is shown and nothing else is served.
    use_effect(move || {
        let db = match Database::new() {
            Ok(db) => db,
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let loads: [(&str, anyhow::Result<()>); 4] = [
            ("monthly table", db.load_monthly(MONTHLY_CSV)),
            ("quarterly table", db.load_quarterly(QUARTERLY_CSV)),
            ("nationwide table", db.load_national(NATION_CSV)),
            ("state codes", db.load_state_codes(STATE_CODES_CSV)),
        ];
        for (what, result) in loads {
            if let Err(e) = result {
                log::error!("failed to load {}: {}", what, e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load {}: {}", what, e)));
                state.loading.set(false);
                return;
            }
        }

        match db.query_states() {
            Ok(states) => state.states.set(states),
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to read state lookup: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        // The nationwide chart is static: computed once here, never wired
        // to a selection control.
        match mf_chart::render(&db, Dataset::QuarterlyNationwide, None) {
            Ok(figure) => state.national_figure.set(Some(figure)),
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to build nationwide chart: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        js_bridge::init_charts();
        state.db.set(Some(db));
        state.loading.set(false);
    });

    // Re-render the active tab's chart whenever its inputs change. Only
    // the active tab's selection signal is read, so tab 3 never reacts
    // to the dropdowns.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let tab = (state.active_tab)();
        let figure: Figure = match tab {
            Dataset::QuarterlyNationwide => match (state.national_figure)() {
                Some(figure) => figure,
                None => return,
            },
            _ => {
                let selected = match state.selection_for(tab) {
                    Some(selection) => selection(),
                    None => return,
                };
                match mf_chart::render(&db, tab, Some(&selected)) {
                    Ok(figure) => figure,
                    Err(e) => {
                        // Not expected under correct data shape; log and keep
                        // the previous chart on screen.
                        log::error!("chart render failed for {:?}: {}", tab, e);
                        return;
                    }
                }
            }
        };

        js_bridge::render_consumption_chart(&chart_id(tab), &figure.to_json());
    });

    let active = (state.active_tab)();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 20px; font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;",

            PageHeader {
                title: "Motor Fuels: Highway Consumption Analysis".to_string(),
                subtitle: "Highway gallons by motor-fuel code, from the FHWA pre-aggregated tables".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                TabBar {}

                if active != Dataset::QuarterlyNationwide {
                    StateSelector { tab: active }
                }

                ChartContainer {
                    id: chart_id(active),
                    min_height: 450,
                }
            }
        }
    }
}
