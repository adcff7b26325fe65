//! rail timetable ingestion for the SDG 11.2.1 public transport access indicator.
//!
//! reads the fixed-width national rail timetable pair of files (the `.msn`
//! station master file and the `.mca` schedule file), counts departures per
//! station per hour for a chosen day and writes out the stations that have at
//! least one departure in every hour of a configured range.
pub mod app;
pub mod timetable;
