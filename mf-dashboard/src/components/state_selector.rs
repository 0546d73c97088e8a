//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;
use mf_chart::Dataset;

/// State dropdown for one of the by-state tabs.
///
/// Options come from the state-code lookup in AppState; changing the
/// selection updates that tab's signal, which re-renders its chart.
/// Renders nothing for the nationwide tab, which has no selector.
#[component]
pub fn StateSelector(tab: Dataset) -> Element {
    let state = use_context::<AppState>();
    let Some(mut selection) = state.selection_for(tab) else {
        return rsx! {};
    };
    let states = state.states.read().clone();
    let selected = selection();
    let select_id = format!("state-select-{}", tab.slug());

    let on_change = move |evt: Event<FormData>| {
        selection.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            h5 {
                style: "margin: 0 0 4px 0;",
                "Select state"
            }
            select {
                id: "{select_id}",
                style: "width: 40%; min-width: 200px; padding: 4px;",
                onchange: on_change,
                for entry in states.iter() {
                    option {
                        value: "{entry.name}",
                        selected: entry.name == selected,
                        "{entry.name}"
                    }
                }
            }
        }
    }
}
