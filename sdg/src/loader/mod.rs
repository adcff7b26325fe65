//! readers for the reference datasets. each CSV reader has a `read_*`
//! function taking a path and a `parse_*` function taking any reader.
mod attribute_ops;
pub mod csv_ops;
mod lookup_ops;
mod population_ops;
mod rail_ops;
mod shapefile_ops;
mod stops_ops;

pub use attribute_ops::{
    parse_age, parse_age_column, parse_disability, parse_urban_rural, read_age, read_disability,
    read_urban_rural, DisabilityRecord,
};
pub use lookup_ops::{parse_oa_lookup, read_oa_lookup};
pub use population_ops::{parse_population, read_population};
pub use rail_ops::read_rail_stops;
pub use shapefile_ops::{read_boundaries, read_centroids, read_prj_crs};
pub use stops_ops::{parse_stops, read_stops};
