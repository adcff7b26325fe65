use super::{HourRange, StationFrequency, TimetableError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// a row of the station locations file. only the code and the british
/// national grid coordinates are read, other columns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationLocation {
    pub station_code: String,
    pub easting: Option<f64>,
    pub northing: Option<f64>,
}

/// a highly serviced station with coordinates, as written to the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlyServicedStation {
    pub station_code: String,
    pub station_name: String,
    pub easting: f64,
    pub northing: f64,
    pub departures: BTreeMap<u32, usize>,
}

/// the leading columns of the highly serviced stations file, used by
/// downstream readers that treat these stations as transit stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlyServicedStationRow {
    pub station_code: String,
    pub station_name: String,
    pub easting: f64,
    pub northing: f64,
}

pub fn read_station_locations(path: &Path) -> Result<Vec<StationLocation>, TimetableError> {
    let filepath = path.to_string_lossy().to_string();
    let reader = csv::Reader::from_path(path).map_err(|source| TimetableError::CsvReadError {
        filepath: filepath.clone(),
        source,
    })?;
    reader
        .into_deserialize::<StationLocation>()
        .map(|r| {
            r.map_err(|source| TimetableError::CsvReadError {
                filepath: filepath.clone(),
                source,
            })
        })
        .collect()
}

/// attaches coordinates to the highly serviced stations by crs code. stations
/// without a location row, or whose row has no coordinates, are dropped.
pub fn locate_stations(
    stations: Vec<StationFrequency>,
    locations: &[StationLocation],
) -> Vec<HighlyServicedStation> {
    let lookup: HashMap<&str, &StationLocation> = locations
        .iter()
        .map(|l| (l.station_code.as_str(), l))
        .collect();
    let n_stations = stations.len();
    let located: Vec<HighlyServicedStation> = stations
        .into_iter()
        .filter_map(|station| {
            let location = lookup.get(station.crs_code.as_str())?;
            let (easting, northing) = (location.easting?, location.northing?);
            Some(HighlyServicedStation {
                station_code: station.crs_code,
                station_name: station.station_name,
                easting,
                northing,
                departures: station.departures,
            })
        })
        .collect();
    if located.len() < n_stations {
        log::warn!(
            "{} highly serviced stations have no coordinates and were dropped",
            n_stations - located.len()
        );
    }
    located
}

fn departure_column(hour: u32) -> String {
    format!("departures_{hour:02}")
}

pub fn write_highly_serviced(
    path: &Path,
    stations: &[HighlyServicedStation],
    hours: &HourRange,
) -> Result<(), TimetableError> {
    let filepath = path.to_string_lossy().to_string();
    let write_err = |source: csv::Error| TimetableError::CsvWriteError {
        filepath: filepath.clone(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    let mut header = vec![
        String::from("station_code"),
        String::from("station_name"),
        String::from("easting"),
        String::from("northing"),
    ];
    header.extend(hours.hours().map(departure_column));
    writer.write_record(&header).map_err(write_err)?;

    for station in stations {
        let mut record = vec![
            station.station_code.clone(),
            station.station_name.clone(),
            station.easting.to_string(),
            station.northing.to_string(),
        ];
        record.extend(
            hours
                .hours()
                .map(|h| station.departures.get(&h).copied().unwrap_or(0).to_string()),
        );
        writer.write_record(&record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;
    Ok(())
}

pub fn read_highly_serviced(path: &Path) -> Result<Vec<HighlyServicedStationRow>, TimetableError> {
    let filepath = path.to_string_lossy().to_string();
    let reader = csv::Reader::from_path(path).map_err(|source| TimetableError::CsvReadError {
        filepath: filepath.clone(),
        source,
    })?;
    reader
        .into_deserialize::<HighlyServicedStationRow>()
        .map(|r| {
            r.map_err(|source| TimetableError::CsvReadError {
                filepath: filepath.clone(),
                source,
            })
        })
        .collect()
}
