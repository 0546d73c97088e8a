//! Tab bar switching between the three dashboard views.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_chart::Dataset;

const TABS: [Dataset; 3] = [
    Dataset::MonthlyByState,
    Dataset::QuarterlyByState,
    Dataset::QuarterlyNationwide,
];

const ACTIVE_STYLE: &str = "padding: 8px 16px; border: none; border-bottom: 3px solid #2c3e50; background: none; font-weight: bold; cursor: pointer;";
const INACTIVE_STYLE: &str = "padding: 8px 16px; border: none; background: none; color: #666; cursor: pointer;";

/// Three mutually exclusive tabs; clicking one updates `active_tab`.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    let buttons = TABS.iter().map(|&tab| {
        let label = tab.label();
        let style = if tab == active { ACTIVE_STYLE } else { INACTIVE_STYLE };
        rsx! {
            button {
                key: "{label}",
                style: "{style}",
                onclick: move |_| state.active_tab.set(tab),
                "{label}"
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 2px solid #ccc; margin: 16px 0 12px 0;",
            {buttons}
        }
    }
}
