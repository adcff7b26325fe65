use geo::Point;
use serde::{Deserialize, Serialize};

/// NaPTAN stop types served by rail, metro or tram
pub const HIGH_CAPACITY_STOP_TYPES: [&str; 6] = ["RSE", "RLY", "RPL", "TMU", "MET", "PLT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopCapacity {
    High,
    Low,
}

impl StopCapacity {
    pub fn from_stop_type(stop_type: &str) -> StopCapacity {
        if HIGH_CAPACITY_STOP_TYPES.contains(&stop_type.trim()) {
            StopCapacity::High
        } else {
            StopCapacity::Low
        }
    }
}

/// a public transport stop in planar coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// ATCO code for registry stops, CRS code for rail stations
    pub id: String,
    pub point: Point<f64>,
    pub active: bool,
    pub capacity: StopCapacity,
}

impl Stop {
    pub fn new(id: String, easting: f64, northing: f64, active: bool, capacity: StopCapacity) -> Stop {
        Stop {
            id,
            point: Point::new(easting, northing),
            active,
            capacity,
        }
    }
}

/// drops inactive stops
pub fn filter_active(stops: Vec<Stop>) -> Vec<Stop> {
    let n_stops = stops.len();
    let active = stops.into_iter().filter(|s| s.active).collect::<Vec<_>>();
    log::info!("{} of {} stops are active", active.len(), n_stops);
    active
}
