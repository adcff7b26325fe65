use super::csv_ops::{self, column_index, field, header_lookup, parse_coordinate};
use crate::config::StopsInput;
use crate::model::{SdgError, Stop, StopCapacity};
use std::io::Read;
use std::path::Path;

/// reads the stop registry. stops without coordinates are skipped with a
/// warning; inactive stops are kept and flagged.
pub fn read_stops(path: &Path, input: &StopsInput) -> Result<Vec<Stop>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_stops(file, &path.to_string_lossy(), input)
}

pub fn parse_stops<R: Read>(
    reader: R,
    source_name: &str,
    input: &StopsInput,
) -> Result<Vec<Stop>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let lookup = header_lookup(&headers);
    let id_idx = column_index(&lookup, &input.id_column, source_name)?;
    let easting_idx = column_index(&lookup, &input.easting_column, source_name)?;
    let northing_idx = column_index(&lookup, &input.northing_column, source_name)?;
    let stop_type_idx = column_index(&lookup, &input.stop_type_column, source_name)?;
    let status_idx = column_index(&lookup, &input.status_column, source_name)?;

    let mut stops = vec![];
    let mut missing_coordinates = 0;
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        let easting = parse_coordinate(field(&row, easting_idx), &input.easting_column, source_name, idx)?;
        let northing =
            parse_coordinate(field(&row, northing_idx), &input.northing_column, source_name, idx)?;
        let (easting, northing) = match (easting, northing) {
            (Some(e), Some(n)) => (e, n),
            _ => {
                missing_coordinates += 1;
                continue;
            }
        };
        let stop = Stop::new(
            field(&row, id_idx).to_string(),
            easting,
            northing,
            is_active(field(&row, status_idx)),
            StopCapacity::from_stop_type(field(&row, stop_type_idx)),
        );
        stops.push(stop);
    }
    if missing_coordinates > 0 {
        log::warn!("{missing_coordinates} stops in {source_name} have no coordinates and were skipped");
    }
    log::info!("read {} stops from {}", stops.len(), source_name);
    Ok(stops)
}

/// NaPTAN marks live stops "active", older extracts use "act"
fn is_active(status: &str) -> bool {
    status.eq_ignore_ascii_case("active") || status.eq_ignore_ascii_case("act")
}
