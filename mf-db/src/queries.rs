//! Typed query methods for the chart renderer.
//!
//! All queries return structs from [`crate::models`] that serialize to
//! JSON for the D3.js chart layer. Filtering a state that has no rows is
//! not an error: it returns an empty vec, which the renderer turns into
//! an empty-but-valid chart.

use crate::models::{FuelDateValue, StateInfo};
use crate::schema::state_table;
use crate::Database;
use mf_data::Granularity;
use rusqlite::params;

impl Database {
    /// All lookup entries, ordered by state name (dropdown options).
    pub fn query_states(&self) -> anyhow::Result<Vec<StateInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name, code FROM state_codes ORDER BY name")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StateInfo {
                    name: row.get(0)?,
                    code: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_states returned {} entries", rows.len());
        Ok(rows)
    }

    /// Consumption series for one state, ordered by fuel code then date.
    ///
    /// One contiguous run of points per MF code, ready to split into chart
    /// lines. A state with no rows yields an empty vec.
    pub fn query_state_series(
        &self,
        granularity: Granularity,
        state: &str,
    ) -> anyhow::Result<Vec<FuelDateValue>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT fuel_code, date, gallons FROM {}
             WHERE state = ?1
             ORDER BY fuel_code, date",
            state_table(granularity)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![state], |row| {
                Ok(FuelDateValue {
                    fuel_code: row.get(0)?,
                    date: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_state_series({:?}, {}) returned {} points",
            granularity,
            state,
            rows.len()
        );
        Ok(rows)
    }

    /// One full by-state table with no state filter, ordered by fuel code
    /// then date. Used when the renderer is invoked without a filter.
    pub fn query_state_table(&self, granularity: Granularity) -> anyhow::Result<Vec<FuelDateValue>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT fuel_code, date, gallons FROM {}
             ORDER BY fuel_code, date",
            state_table(granularity)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(FuelDateValue {
                    fuel_code: row.get(0)?,
                    date: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// The full nationwide series, ordered by fuel code then date.
    pub fn query_national_series(&self) -> anyhow::Result<Vec<FuelDateValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT fuel_code, date, gallons FROM national_observations
             ORDER BY fuel_code, date",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(FuelDateValue {
                    fuel_code: row.get(0)?,
                    date: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_national_series returned {} points",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct MF codes present for a state in one table.
    pub fn query_fuel_codes(
        &self,
        granularity: Granularity,
        state: &str,
    ) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT DISTINCT fuel_code FROM {}
             WHERE state = ?1
             ORDER BY fuel_code",
            state_table(granularity)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![state], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct state values present in one by-state table.
    ///
    /// Not the lookup list: this is what the data actually contains, used
    /// to verify that per-state filtering partitions the table.
    pub fn query_distinct_states(&self, granularity: Granularity) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT DISTINCT state FROM {} ORDER BY state",
            state_table(granularity)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Total row count of one by-state table.
    pub fn count_state_rows(&self, granularity: Granularity) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let sql = format!("SELECT COUNT(*) FROM {}", state_table(granularity));
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, Granularity};

    const QUARTERLY_CSV: &str = "\
STATE,DATE,MF_num,HIGHWAY_GALLONS
Alabama,2021-01-01,1,650000000
Alabama,2021-04-01,1,671000000
Alabama,2021-01-01,2,43000000
Georgia,2021-01-01,1,1210000000
Georgia,2021-04-01,1,1254000000
";

    const NATION_CSV: &str = "\
DATE,MF_num,HIGHWAY_GALLONS
2021-01-01,1,33100000000
2021-04-01,1,34600000000
2021-01-01,2,1020000000
";

    const LOOKUP_CSV: &str = "\
StateName,code
Georgia,13
Alabama,1
Wyoming,56
";

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_quarterly(QUARTERLY_CSV).unwrap();
        db.load_national(NATION_CSV).unwrap();
        db.load_state_codes(LOOKUP_CSV).unwrap();
        db
    }

    #[test]
    fn states_are_ordered_by_name() {
        let db = loaded_db();
        let states = db.query_states().unwrap();
        let names: Vec<_> = states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alabama", "Georgia", "Wyoming"]);
    }

    #[test]
    fn state_series_filters_by_equality() {
        let db = loaded_db();
        let series = db
            .query_state_series(Granularity::Quarterly, "Alabama")
            .unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.date.starts_with("2021")));
        // Ordered by fuel code then date
        assert_eq!(series[0].fuel_code, "1");
        assert_eq!(series[2].fuel_code, "2");
    }

    #[test]
    fn unknown_state_yields_empty_series() {
        let db = loaded_db();
        let series = db
            .query_state_series(Granularity::Quarterly, "Atlantis")
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn fuel_codes_are_distinct_per_state() {
        let db = loaded_db();
        let codes = db
            .query_fuel_codes(Granularity::Quarterly, "Alabama")
            .unwrap();
        assert_eq!(codes, vec!["1", "2"]);
        let codes = db
            .query_fuel_codes(Granularity::Quarterly, "Georgia")
            .unwrap();
        assert_eq!(codes, vec!["1"]);
    }

    #[test]
    fn national_series_is_complete() {
        let db = loaded_db();
        let series = db.query_national_series().unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn per_state_filters_partition_the_table() {
        let db = loaded_db();
        let total = db.count_state_rows(Granularity::Quarterly).unwrap();
        let mut seen = 0usize;
        for state in db.query_distinct_states(Granularity::Quarterly).unwrap() {
            seen += db
                .query_state_series(Granularity::Quarterly, &state)
                .unwrap()
                .len();
        }
        // Every row appears in exactly one per-state filter
        assert_eq!(seen, total);
    }
}
