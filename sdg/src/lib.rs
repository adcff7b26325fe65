//! SDG 11.2.1 indicator for Scotland: the proportion of the population that
//! lives within walking distance of public transport, by local authority,
//! sex, age, disability status and urban/rural class.
//!
//! stops are buffered into catchments, population weighted centroids of
//! census output areas are tested against the union of those catchments and
//! the population of served areas is summed per authority.
pub mod aggregation;
pub mod app;
pub mod config;
pub mod geometry;
pub mod join;
pub mod loader;
pub mod model;
pub mod output;
