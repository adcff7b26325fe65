mod catchment;
mod containment_ops;
mod crs_ops;
mod dissolve_ops;
mod service_area;

pub use catchment::{Catchment, CatchmentRadii};
pub use containment_ops::{find_points_in_poly, Located, ReferenceArea};
pub use crs_ops::ensure_same_crs;
pub use dissolve_ops::dissolve_by_name;
pub use service_area::ServiceArea;
