//! SQL schema for the in-memory consumption database.

/// Full DDL applied by [`crate::Database::new`].
///
/// Three observation tables (monthly by state, quarterly by state,
/// quarterly nationwide) plus the state-code lookup. The composite
/// primary keys enforce the one-row-per-(state, date, fuel code)
/// invariant of the source tables.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS monthly_observations (
        state        TEXT NOT NULL,
        date         TEXT NOT NULL,
        fuel_code    TEXT NOT NULL,
        gallons      REAL NOT NULL,
        PRIMARY KEY (state, date, fuel_code)
    );

    CREATE TABLE IF NOT EXISTS quarterly_observations (
        state        TEXT NOT NULL,
        date         TEXT NOT NULL,
        fuel_code    TEXT NOT NULL,
        gallons      REAL NOT NULL,
        PRIMARY KEY (state, date, fuel_code)
    );

    CREATE TABLE IF NOT EXISTS national_observations (
        date         TEXT NOT NULL,
        fuel_code    TEXT NOT NULL,
        gallons      REAL NOT NULL,
        PRIMARY KEY (date, fuel_code)
    );

    CREATE TABLE IF NOT EXISTS state_codes (
        name         TEXT NOT NULL PRIMARY KEY,
        code         TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_monthly_state ON monthly_observations(state);
    CREATE INDEX IF NOT EXISTS idx_quarterly_state ON quarterly_observations(state);
    "#
}

/// Table name for a by-state granularity.
pub fn state_table(granularity: mf_data::Granularity) -> &'static str {
    match granularity {
        mf_data::Granularity::Monthly => "monthly_observations",
        mf_data::Granularity::Quarterly => "quarterly_observations",
    }
}
