//! The serializable chart object handed to the D3.js renderer.

use crate::style::{Layout, BASE_TITLE, COLOR_CYCLE};
use mf_db::models::FuelDateValue;
use serde::Serialize;

/// One point on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// One chart line: all points sharing a motor-fuel code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// The MF code, shown in the legend.
    pub name: String,
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

/// A complete chart: title, lines and fixed layout.
///
/// Zero series is a valid figure; the renderer draws an empty plot area
/// with the title rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub series: Vec<Series>,
    pub layout: Layout,
}

impl Figure {
    /// Group points (already ordered by fuel code, then date) into one
    /// series per code and attach the title and fixed styling.
    pub fn from_points(points: &[FuelDateValue], state: Option<&str>) -> Figure {
        let mut series: Vec<Series> = Vec::new();
        for point in points {
            let start_new = series
                .last()
                .map(|s| s.name != point.fuel_code)
                .unwrap_or(true);
            if start_new {
                let color = COLOR_CYCLE[series.len() % COLOR_CYCLE.len()];
                series.push(Series {
                    name: point.fuel_code.clone(),
                    color: color.to_string(),
                    points: Vec::new(),
                });
            }
            series.last_mut().unwrap().points.push(SeriesPoint {
                date: point.date.clone(),
                value: point.value,
            });
        }
        let title = match state {
            Some(name) => format!("{BASE_TITLE} for {name}"),
            None => BASE_TITLE.to_string(),
        };
        Figure {
            title,
            series,
            layout: Layout::default(),
        }
    }

    /// Serialize for the JS bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(code: &str, date: &str, value: f64) -> FuelDateValue {
        FuelDateValue {
            fuel_code: code.to_string(),
            date: date.to_string(),
            value,
        }
    }

    #[test]
    fn colors_follow_the_cycle() {
        let points = vec![
            point("1", "2021-01-01", 10.0),
            point("2", "2021-01-01", 20.0),
            point("3", "2021-01-01", 30.0),
            point("4", "2021-01-01", 40.0),
        ];
        let fig = Figure::from_points(&points, None);
        let colors: Vec<_> = fig.series.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["blue", "red", "#00CC96", "blue"]);
    }

    #[test]
    fn empty_points_make_an_empty_valid_figure() {
        let fig = Figure::from_points(&[], Some("Nowhere"));
        assert!(fig.series.is_empty());
        assert_eq!(fig.title, "Motor Fuels: Highway Consumption for Nowhere");
        assert!(!fig.to_json().is_empty());
    }

    #[test]
    fn sorted_input_groups_contiguously() {
        let points = vec![
            point("1", "2021-01-01", 10.0),
            point("1", "2021-02-01", 11.0),
            point("2", "2021-01-01", 20.0),
        ];
        let fig = Figure::from_points(&points, None);
        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].points.len(), 2);
        assert_eq!(fig.series[1].points.len(), 1);
    }

    #[test]
    fn figure_json_carries_layout() {
        let fig = Figure::from_points(&[point("1", "2021-01-01", 10.0)], None);
        let json = fig.to_json();
        assert!(json.contains("\"axisLineColor\":\"black\""));
        assert!(json.contains("\"legendTitle\":\"MF Codes\""));
    }
}
