use crate::dates::parse_date;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Expected number of columns in a by-state consumption row:
/// `STATE,DATE,MF_num,HIGHWAY_GALLONS`.
pub const STATE_ROW_LENGTH: usize = 4;

/// Expected number of columns in a national aggregate row:
/// `DATE,MF_num,HIGHWAY_GALLONS`.
pub const NATIONAL_ROW_LENGTH: usize = 3;

/// Reporting interval of a consumption table.
///
/// The by-state tables come in both granularities; the nationwide table
/// is quarterly only.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Monthly,
    Quarterly,
}

/// One pre-aggregated consumption reading for a single state.
///
/// Invariant in well-formed input: one row per (state, date, fuel code).
#[derive(Debug, Clone, Serialize)]
pub struct StateObservation {
    pub state: String,
    pub date: NaiveDate,
    /// Motor-fuel category code (the `MF_num` column), kept as text since
    /// the code set is open-ended across reporting years.
    pub fuel_code: String,
    pub highway_gallons: f64,
}

/// One nationwide aggregate reading. No state dimension.
#[derive(Debug, Clone, Serialize)]
pub struct NationalObservation {
    pub date: NaiveDate,
    pub fuel_code: String,
    pub highway_gallons: f64,
}

impl StateObservation {
    /// Parse a full CSV document (header row expected) into observations.
    pub fn from_csv(csv_text: &str) -> anyhow::Result<Vec<StateObservation>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(StateObservation::try_from(&record)?);
        }
        log::info!("parsed {} state observation rows", rows.len());
        Ok(rows)
    }

    /// Group observations by fuel code, preserving input order within
    /// each group.
    pub fn group_by_fuel_code(
        rows: Vec<StateObservation>,
    ) -> HashMap<String, Vec<StateObservation>> {
        let mut result: HashMap<String, Vec<StateObservation>> = HashMap::new();
        for row in rows {
            result.entry(row.fuel_code.clone()).or_default().push(row);
        }
        result
    }
}

impl TryFrom<&StringRecord> for StateObservation {
    type Error = anyhow::Error;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() != STATE_ROW_LENGTH {
            anyhow::bail!(
                "expected {} columns in state row, got {}",
                STATE_ROW_LENGTH,
                record.len()
            );
        }
        let state = record.get(0).unwrap_or("").trim();
        if state.is_empty() {
            anyhow::bail!("empty STATE column");
        }
        let date = parse_date(record.get(1).unwrap_or(""))?;
        let fuel_code = record.get(2).unwrap_or("").trim();
        if fuel_code.is_empty() {
            anyhow::bail!("empty MF_num column");
        }
        let highway_gallons: f64 = record.get(3).unwrap_or("").trim().parse()?;
        Ok(StateObservation {
            state: state.to_string(),
            date,
            fuel_code: fuel_code.to_string(),
            highway_gallons,
        })
    }
}

impl NationalObservation {
    /// Parse a full CSV document (header row expected) into national rows.
    pub fn from_csv(csv_text: &str) -> anyhow::Result<Vec<NationalObservation>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(NationalObservation::try_from(&record)?);
        }
        log::info!("parsed {} national observation rows", rows.len());
        Ok(rows)
    }
}

impl TryFrom<&StringRecord> for NationalObservation {
    type Error = anyhow::Error;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() != NATIONAL_ROW_LENGTH {
            anyhow::bail!(
                "expected {} columns in national row, got {}",
                NATIONAL_ROW_LENGTH,
                record.len()
            );
        }
        let date = parse_date(record.get(0).unwrap_or(""))?;
        let fuel_code = record.get(1).unwrap_or("").trim();
        if fuel_code.is_empty() {
            anyhow::bail!("empty MF_num column");
        }
        let highway_gallons: f64 = record.get(2).unwrap_or("").trim().parse()?;
        Ok(NationalObservation {
            date,
            fuel_code: fuel_code.to_string(),
            highway_gallons,
        })
    }
}

impl PartialEq for StateObservation {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.date == other.date && self.fuel_code == other.fuel_code
    }
}

impl Eq for StateObservation {}

impl Ord for StateObservation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.fuel_code.cmp(&other.fuel_code))
    }
}

impl PartialOrd for StateObservation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MONTHLY_CSV: &str = "\
STATE,DATE,MF_num,HIGHWAY_GALLONS
Alabama,2021-01-01,1,221304000
Alabama,2021-01-01,2,14873000
Alabama,2021-02-01,1,209114000
Wyoming,2021-01-01,1,24210000
";

    const NATION_CSV: &str = "\
DATE,MF_num,HIGHWAY_GALLONS
2021-01-01,1,ten-billion
";

    #[test]
    fn parses_state_rows() {
        let rows = StateObservation::from_csv(MONTHLY_CSV).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].state, "Alabama");
        assert_eq!(rows[0].fuel_code, "1");
        assert_eq!(rows[0].highway_gallons, 221304000.0);
    }

    #[test]
    fn groups_by_fuel_code() {
        let rows = StateObservation::from_csv(MONTHLY_CSV).unwrap();
        let groups = StateObservation::group_by_fuel_code(rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("1").map(Vec::len), Some(3));
        assert_eq!(groups.get("2").map(Vec::len), Some(1));
    }

    #[test]
    fn rejects_non_numeric_gallons() {
        assert!(NationalObservation::from_csv(NATION_CSV).is_err());
    }

    #[test]
    fn rejects_short_rows() {
        let short = "STATE,DATE,MF_num,HIGHWAY_GALLONS\nAlabama,2021-01-01,1\n";
        assert!(StateObservation::from_csv(short).is_err());
    }

    #[test]
    fn orders_by_date_then_code() {
        let mut rows = StateObservation::from_csv(MONTHLY_CSV).unwrap();
        rows.sort();
        assert_eq!(rows[0].date, crate::dates::parse_date("2021-01-01").unwrap());
        assert_eq!(rows.last().unwrap().fuel_code, "1");
    }
}
