use serde::{Deserialize, Serialize};

/// a station from the station master file. the tiploc code is unique per
/// row, the crs (computer reservation system) code is shared by tiplocs that
/// make up a single passenger station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub station_name: String,
    pub tiploc_code: String,
    pub crs_code: String,
}
