//! Date helpers shared across the mf crates.

use chrono::NaiveDate;

/// Date format used throughout the consumption tables: "YYYY-MM-DD".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD".
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let d = parse_date("2021-07-01").unwrap();
        assert_eq!(format_date(&d), "2021-07-01");
    }

    #[test]
    fn parse_rejects_compact_format() {
        assert!(parse_date("20210701").is_err());
    }
}
