//! Core types for FHWA motor-fuel highway consumption data.
//!
//! The source tables are pre-aggregated by the upstream reporting pipeline;
//! this crate only parses the delimited rows into typed structs and offers
//! small grouping/date helpers. No aggregation happens here.

pub mod dates;
pub mod observation;
pub mod state_code;

pub use observation::{Granularity, NationalObservation, StateObservation};
pub use state_code::StateCode;
