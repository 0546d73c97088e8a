//! In-memory SQLite layer for the motor-fuel consumption dashboard.
//!
//! Loads the three pre-aggregated consumption tables and the state-code
//! lookup from CSV strings into an in-memory SQLite database and exposes
//! typed query methods for the chart renderer.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - CSV data embedded via `include_str!` in the consuming app crate
//! - Typed query methods returning serializable structs for JSON export
//!   to the D3.js chart layer
//!
//! All tables are write-once: the loaders run at startup and nothing
//! mutates the data afterwards.
//!
//! # Usage
//!
//! ```rust
//! use mf_db::{Database, Granularity};
//!
//! let db = Database::new().unwrap();
//! db.load_monthly("STATE,DATE,MF_num,HIGHWAY_GALLONS\nAlabama,2021-01-01,1,221304000\n").unwrap();
//! db.load_state_codes("StateName,code\nAlabama,1\n").unwrap();
//!
//! let states = db.query_states().unwrap();
//! let series = db.query_state_series(Granularity::Monthly, "Alabama").unwrap();
//! assert_eq!(series.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use mf_data::Granularity;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the consumption tables.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it from CSV text.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
