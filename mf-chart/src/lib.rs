//! Line chart figure builder.
//!
//! One shared [`render`] function serves all three dashboard tabs. It
//! queries the requested dataset (with an optional state filter), groups
//! the points into one line per motor-fuel code and wraps them in a
//! serializable [`Figure`] carrying the fixed cosmetic styling. The D3.js
//! side consumes the figure as JSON and draws it; no chart state lives
//! in Rust beyond the figure itself.

pub mod figure;
pub mod style;

pub use figure::{Figure, Series, SeriesPoint};
pub use style::Layout;

use mf_db::{Database, Granularity};
use serde::{Deserialize, Serialize};

/// One of the three datasets the dashboard can plot.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Dataset {
    MonthlyByState,
    QuarterlyByState,
    QuarterlyNationwide,
}

impl Dataset {
    /// Tab label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::MonthlyByState => "Monthly by state",
            Dataset::QuarterlyByState => "Quarterly by state",
            Dataset::QuarterlyNationwide => "Quarterly nationwide",
        }
    }

    /// Stable identifier used for DOM element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Dataset::MonthlyByState => "monthly",
            Dataset::QuarterlyByState => "quarterly",
            Dataset::QuarterlyNationwide => "nationwide",
        }
    }

    fn granularity(&self) -> Option<Granularity> {
        match self {
            Dataset::MonthlyByState => Some(Granularity::Monthly),
            Dataset::QuarterlyByState => Some(Granularity::Quarterly),
            Dataset::QuarterlyNationwide => None,
        }
    }
}

/// Build the chart figure for one dataset and an optional state filter.
///
/// With a filter, only rows whose state equals it are plotted; without
/// one the table is plotted unfiltered. The nationwide dataset has no
/// state dimension, so any filter is ignored and the title carries no
/// state suffix. A filter matching zero rows produces a figure with zero
/// series, which is still valid and renderable.
pub fn render(db: &Database, dataset: Dataset, state: Option<&str>) -> anyhow::Result<Figure> {
    let points = match dataset.granularity() {
        Some(granularity) => match state {
            Some(name) => db.query_state_series(granularity, name)?,
            None => db.query_state_table(granularity)?,
        },
        None => db.query_national_series()?,
    };
    let title_state = match dataset {
        Dataset::QuarterlyNationwide => None,
        _ => state,
    };
    let fig = Figure::from_points(&points, title_state);
    log::info!(
        "render: {:?} / {:?} produced {} series",
        dataset,
        state,
        fig.series.len()
    );
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHLY_CSV: &str = "\
STATE,DATE,MF_num,HIGHWAY_GALLONS
Alabama,2021-01-01,1,221304000
Alabama,2021-02-01,1,209114000
Alabama,2021-01-01,2,14873000
Alabama,2021-01-01,3,88210000
Wyoming,2021-01-01,1,24210000
";

    const QUARTERLY_CSV: &str = "\
STATE,DATE,MF_num,HIGHWAY_GALLONS
Alabama,2021-01-01,1,650000000
Georgia,2021-01-01,1,1210000000
";

    const NATION_CSV: &str = "\
DATE,MF_num,HIGHWAY_GALLONS
2021-01-01,1,33100000000
2021-04-01,1,34600000000
2021-01-01,2,1020000000
";

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_monthly(MONTHLY_CSV).unwrap();
        db.load_quarterly(QUARTERLY_CSV).unwrap();
        db.load_national(NATION_CSV).unwrap();
        db
    }

    #[test]
    fn one_line_per_fuel_code() {
        let db = loaded_db();
        let fig = render(&db, Dataset::MonthlyByState, Some("Alabama")).unwrap();
        assert_eq!(fig.series.len(), 3);
        let names: Vec<_> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
        assert_eq!(fig.series[0].points.len(), 2);
    }

    #[test]
    fn line_count_matches_distinct_codes_for_every_state() {
        let db = loaded_db();
        for state in db.query_distinct_states(mf_db::Granularity::Monthly).unwrap() {
            let codes = db
                .query_fuel_codes(mf_db::Granularity::Monthly, &state)
                .unwrap();
            let fig = render(&db, Dataset::MonthlyByState, Some(&state)).unwrap();
            assert_eq!(fig.series.len(), codes.len());
        }
    }

    #[test]
    fn title_carries_selected_state() {
        let db = loaded_db();
        let fig = render(&db, Dataset::MonthlyByState, Some("Alabama")).unwrap();
        assert!(fig.title.contains("Alabama"));
    }

    #[test]
    fn state_absent_from_quarterly_renders_empty_figure() {
        let db = loaded_db();
        let fig = render(&db, Dataset::QuarterlyByState, Some("Wyoming")).unwrap();
        assert!(fig.series.is_empty());
        // Still a valid, serializable figure
        assert!(serde_json::to_string(&fig).is_ok());
        assert!(fig.title.contains("Wyoming"));
    }

    #[test]
    fn nationwide_ignores_state_filter() {
        let db = loaded_db();
        let with = render(&db, Dataset::QuarterlyNationwide, Some("Alabama")).unwrap();
        let without = render(&db, Dataset::QuarterlyNationwide, None).unwrap();
        assert_eq!(with, without);
        assert!(!with.title.contains("for"));
        assert_eq!(with.series.len(), 2);
    }

    #[test]
    fn unfiltered_render_uses_whole_table() {
        let db = loaded_db();
        let fig = render(&db, Dataset::QuarterlyByState, None).unwrap();
        let points: usize = fig.series.iter().map(|s| s.points.len()).sum();
        assert_eq!(points, 2);
    }
}
