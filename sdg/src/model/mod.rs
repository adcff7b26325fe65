mod category;
mod crs;
mod local_authority;
mod output_area;
mod result_row;
mod sdg_error;
mod stop;

pub use category::{AgeBands, Category, UrbanRural};
pub use crs::{Crs, BRITISH_NATIONAL_GRID, WGS84};
pub use local_authority::{BoundaryRecord, LocalAuthority};
pub use output_area::{DisabilityCounts, OutputArea, PopulationCounts};
pub use result_row::{percentage, ResultRow};
pub use sdg_error::SdgError;
pub use stop::{filter_active, Stop, StopCapacity, HIGH_CAPACITY_STOP_TYPES};
