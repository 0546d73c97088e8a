//! CSV loaders populating the in-memory database.
//!
//! Each loader parses one input file (as a string slice, typically from
//! `include_str!`) through the typed row parsers in `mf-data` and inserts
//! the rows. A parse failure anywhere aborts the load with an error; the
//! dashboard treats that as fatal at startup and serves nothing.
//!
//! # CSV Formats (all with header rows)
//!
//! - **Monthly / quarterly by state**: `STATE,DATE,MF_num,HIGHWAY_GALLONS`
//! - **Quarterly nationwide**: `DATE,MF_num,HIGHWAY_GALLONS`
//! - **State lookup**: `StateName,code`

use crate::schema::state_table;
use crate::Database;
use mf_data::dates::format_date;
use mf_data::{Granularity, NationalObservation, StateCode, StateObservation};
use rusqlite::params;

impl Database {
    /// Load the monthly-by-state table.
    pub fn load_monthly(&self, csv_data: &str) -> anyhow::Result<()> {
        self.load_state_observations(Granularity::Monthly, csv_data)
    }

    /// Load the quarterly-by-state table.
    pub fn load_quarterly(&self, csv_data: &str) -> anyhow::Result<()> {
        self.load_state_observations(Granularity::Quarterly, csv_data)
    }

    fn load_state_observations(
        &self,
        granularity: Granularity,
        csv_data: &str,
    ) -> anyhow::Result<()> {
        let rows = StateObservation::from_csv(csv_data)?;
        let conn = self.conn.borrow();
        let table = state_table(granularity);
        let sql = format!(
            "INSERT OR REPLACE INTO {table} (state, date, fuel_code, gallons)
             VALUES (?1, ?2, ?3, ?4)"
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut count = 0u32;
        for row in &rows {
            stmt.execute(params![
                row.state,
                format_date(&row.date),
                row.fuel_code,
                row.highway_gallons
            ])?;
            count += 1;
        }
        log::info!("loader: loaded {} rows into {}", count, table);
        Ok(())
    }

    /// Load the quarterly nationwide table.
    pub fn load_national(&self, csv_data: &str) -> anyhow::Result<()> {
        let rows = NationalObservation::from_csv(csv_data)?;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "INSERT OR REPLACE INTO national_observations (date, fuel_code, gallons)
             VALUES (?1, ?2, ?3)",
        )?;
        let mut count = 0u32;
        for row in &rows {
            stmt.execute(params![
                format_date(&row.date),
                row.fuel_code,
                row.highway_gallons
            ])?;
            count += 1;
        }
        log::info!("loader: loaded {} national rows", count);
        Ok(())
    }

    /// Load the state-code lookup table.
    pub fn load_state_codes(&self, csv_data: &str) -> anyhow::Result<()> {
        let entries = StateCode::from_csv(csv_data)?;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "INSERT OR REPLACE INTO state_codes (name, code) VALUES (?1, ?2)",
        )?;
        let mut count = 0u32;
        for entry in &entries {
            stmt.execute(params![entry.name, entry.code])?;
            count += 1;
        }
        log::info!("loader: loaded {} state codes", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, Granularity};

    const MONTHLY_CSV: &str = "\
STATE,DATE,MF_num,HIGHWAY_GALLONS
Alabama,2021-01-01,1,221304000
Alabama,2021-01-01,2,14873000
Wyoming,2021-01-01,1,24210000
";

    #[test]
    fn loads_monthly_rows() {
        let db = Database::new().unwrap();
        db.load_monthly(MONTHLY_CSV).unwrap();
        let series = db.query_state_series(Granularity::Monthly, "Alabama").unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn load_is_fatal_on_malformed_input() {
        let db = Database::new().unwrap();
        let bad = "STATE,DATE,MF_num,HIGHWAY_GALLONS\nAlabama,not-a-date,1,5\n";
        assert!(db.load_monthly(bad).is_err());
    }

    #[test]
    fn reload_replaces_duplicate_keys() {
        let db = Database::new().unwrap();
        db.load_monthly(MONTHLY_CSV).unwrap();
        db.load_monthly(MONTHLY_CSV).unwrap();
        // Composite primary key keeps one row per (state, date, fuel code)
        let series = db.query_state_series(Granularity::Monthly, "Alabama").unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn national_loader_rejects_state_shaped_rows() {
        let db = Database::new().unwrap();
        assert!(db.load_national(MONTHLY_CSV).is_err());
    }
}
