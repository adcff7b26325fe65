use super::field_spec::{self, STATION_LAYOUT};
use super::{record_type, Station, TimetableError};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// reads the station master (.msn) file at the given path.
pub fn read_msn(path: &Path) -> Result<Vec<Station>, TimetableError> {
    let file = File::open(path).map_err(|source| TimetableError::ReadError {
        filepath: path.to_string_lossy().to_string(),
        source,
    })?;
    let stations = parse_msn(BufReader::new(file), &path.to_string_lossy())?;
    log::info!(
        "read {} stations from {}",
        stations.len(),
        path.to_string_lossy()
    );
    Ok(stations)
}

/// parses `A` station records from a station master file. the first line is
/// the file header. the result is deduplicated by crs code, keeping the
/// first station seen for each code.
pub fn parse_msn<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Station>, TimetableError> {
    let mut stations = vec![];
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_number = idx + 1;
        let line = line.map_err(|source| TimetableError::ReadError {
            filepath: source_name.to_string(),
            source,
        })?;
        let line = line.trim_end_matches('\r');
        if !record_type::is_station_record(line) {
            continue;
        }
        let station_name = STATION_LAYOUT.field(line, field_spec::STATION_NAME, line_number)?;
        let tiploc_code = STATION_LAYOUT.field(line, field_spec::TIPLOC_CODE, line_number)?;
        let crs_code = STATION_LAYOUT.field(line, field_spec::CRS_CODE, line_number)?;
        stations.push(Station {
            station_name: station_name.to_string(),
            tiploc_code: tiploc_code.to_string(),
            crs_code: crs_code.to_string(),
        });
    }
    let n_read = stations.len();
    let deduped = stations
        .into_iter()
        .unique_by(|s| s.crs_code.clone())
        .collect_vec();
    if deduped.len() < n_read {
        log::debug!(
            "dropped {} station rows sharing a crs code",
            n_read - deduped.len()
        );
    }
    Ok(deduped)
}
