use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

/// One entry from the state lookup table: `StateName,code`.
///
/// The code is the FHWA numeric state identifier, kept as text to preserve
/// any leading zeros in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCode {
    pub name: String,
    pub code: String,
}

impl StateCode {
    /// Parse the lookup CSV (header row expected) into entries.
    pub fn from_csv(csv_text: &str) -> anyhow::Result<Vec<StateCode>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            entries.push(StateCode::try_from(&record)?);
        }
        log::info!("parsed {} state code entries", entries.len());
        Ok(entries)
    }

    /// Distinct state names in file order, for populating selectors.
    pub fn distinct_names(entries: &[StateCode]) -> Vec<String> {
        let mut names = Vec::new();
        for entry in entries {
            if !names.contains(&entry.name) {
                names.push(entry.name.clone());
            }
        }
        names
    }
}

impl TryFrom<&StringRecord> for StateCode {
    type Error = anyhow::Error;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        let name = record.get(0).unwrap_or("").trim();
        let code = record.get(1).unwrap_or("").trim();
        if name.is_empty() || code.is_empty() {
            anyhow::bail!("state lookup row missing StateName or code");
        }
        Ok(StateCode {
            name: name.to_string(),
            code: code.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LOOKUP_CSV: &str = "\
StateName,code
Alabama,1
Alaska,2
Arizona,4
Alabama,1
";

    #[test]
    fn parses_lookup() {
        let entries = StateCode::from_csv(LOOKUP_CSV).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].name, "Alabama");
        assert_eq!(entries[2].code, "4");
    }

    #[test]
    fn distinct_names_deduplicates_in_order() {
        let entries = StateCode::from_csv(LOOKUP_CSV).unwrap();
        let names = StateCode::distinct_names(&entries);
        assert_eq!(names, vec!["Alabama", "Alaska", "Arizona"]);
    }

    #[test]
    fn rejects_missing_code() {
        let bad = "StateName,code\nAlabama,\n";
        assert!(StateCode::from_csv(bad).is_err());
    }
}
