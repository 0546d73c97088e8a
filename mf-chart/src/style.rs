//! Fixed cosmetic styling for the consumption chart.
//!
//! The dashboard has exactly one look; nothing here is user-configurable.
//! Serialized as camelCase for the D3.js side.

use serde::Serialize;

/// Line color cycle, assigned to series in first-appearance order.
pub const COLOR_CYCLE: [&str; 3] = ["blue", "red", "#00CC96"];

/// Base chart title; a per-state suffix is appended when filtering.
pub const BASE_TITLE: &str = "Motor Fuels: Highway Consumption";

/// Chart layout configuration consumed by the D3.js renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub plot_background: &'static str,
    pub font_family: &'static str,
    pub font_color: &'static str,
    pub title_font_color: &'static str,
    pub title_font_size: u32,
    pub title_bold: bool,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend_title: &'static str,
    pub axis_line_color: &'static str,
    pub axis_line_width: u32,
    pub grid_color: &'static str,
    pub grid_width: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            plot_background: "#FFFFFF",
            font_family: "Helvetica Neue",
            font_color: "black",
            title_font_color: "black",
            title_font_size: 25,
            title_bold: true,
            x_label: "Date",
            y_label: "Gallons",
            legend_title: "MF Codes",
            axis_line_color: "black",
            axis_line_width: 2,
            grid_color: "lightgrey",
            grid_width: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_serializes_camel_case() {
        let json = serde_json::to_string(&Layout::default()).unwrap();
        assert!(json.contains("\"plotBackground\":\"#FFFFFF\""));
        assert!(json.contains("\"gridColor\":\"lightgrey\""));
        assert!(json.contains("\"titleFontSize\":25"));
    }
}
