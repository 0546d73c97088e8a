//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// A (fuel_code, date, value) triple for the multi-line consumption chart.
///
/// Each point carries the motor-fuel code it belongs to, enabling the
/// chart to draw one line per MF code.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelDateValue {
    pub fuel_code: String,
    pub date: String,
    pub value: f64,
}

/// State lookup entry for the selection dropdowns.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StateInfo {
    /// Full state name (e.g. "Alabama"), the value filtered on.
    pub name: String,
    /// FHWA numeric state code, kept as text.
    pub code: String,
}
