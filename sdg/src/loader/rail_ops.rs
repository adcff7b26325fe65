use crate::model::{SdgError, Stop, StopCapacity};
use sdg_rail::timetable;
use std::path::Path;

/// reads the highly serviced stations file written by sdg_rail. each station
/// becomes an active high capacity stop identified by its crs code.
pub fn read_rail_stops(path: &Path) -> Result<Vec<Stop>, SdgError> {
    let stations = timetable::read_highly_serviced(path)?;
    let stops = stations
        .into_iter()
        .map(|s| Stop::new(s.station_code, s.easting, s.northing, true, StopCapacity::High))
        .collect::<Vec<_>>();
    log::info!(
        "read {} highly serviced rail stations from {}",
        stops.len(),
        path.to_string_lossy()
    );
    Ok(stops)
}
