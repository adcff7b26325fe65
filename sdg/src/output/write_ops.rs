use super::reshape_ops::{reshape_long, reshape_wide, LONG_COLUMNS, WIDE_COLUMNS};
use crate::aggregation::AuthorityResult;
use crate::config::OutputLayout;
use crate::geometry::{find_points_in_poly, CatchmentRadii};
use crate::model::{LocalAuthority, SdgError, Stop, StopCapacity};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use wkt::ToWkt;

/// vertices of the exported catchment polygons
pub const CATCHMENT_VERTICES: usize = 64;

/// writes the results in the chosen layout. the header is written even when
/// there are no results.
pub fn write_results(
    path: &Path,
    results: &IndexMap<String, AuthorityResult>,
    layout: OutputLayout,
    year: &str,
) -> Result<usize, SdgError> {
    match layout {
        OutputLayout::Long => write_csv(path, &LONG_COLUMNS, &reshape_long(results, year)),
        OutputLayout::Wide => write_csv(path, &WIDE_COLUMNS, &reshape_wide(results, year)),
    }
}

#[derive(Debug, Serialize)]
struct CatchmentRow<'a> {
    local_authority: &'a str,
    stop_id: &'a str,
    capacity: StopCapacity,
    radius: f64,
    geometry: String,
}

/// writes the catchment of every stop inside each authority as a WKT polygon
pub fn write_catchments(
    path: &Path,
    authorities: &[LocalAuthority],
    stops: &[Stop],
    radii: &CatchmentRadii,
) -> Result<usize, SdgError> {
    let mut rows = vec![];
    for authority in authorities {
        for stop in find_points_in_poly(stops.iter(), authority) {
            let catchment = radii.catchment(stop);
            rows.push(CatchmentRow {
                local_authority: &authority.name,
                stop_id: &stop.id,
                capacity: stop.capacity,
                radius: catchment.radius,
                geometry: catchment.to_polygon(CATCHMENT_VERTICES).wkt_string(),
            });
        }
    }
    write_csv(
        path,
        &["local_authority", "stop_id", "capacity", "radius", "geometry"],
        &rows,
    )
}

fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<usize, SdgError> {
    let filepath = path.to_string_lossy().to_string();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SdgError::WriteError {
            filepath: parent.to_string_lossy().to_string(),
            source,
        })?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| SdgError::CsvWriteError {
            filepath: filepath.clone(),
            source,
        })?;
    writer
        .write_record(header)
        .map_err(|source| SdgError::CsvWriteError {
            filepath: filepath.clone(),
            source,
        })?;
    for row in rows {
        writer.serialize(row).map_err(|source| SdgError::CsvWriteError {
            filepath: filepath.clone(),
            source,
        })?;
    }
    writer.flush().map_err(|source| SdgError::WriteError {
        filepath: filepath.clone(),
        source,
    })?;
    log::info!("wrote {} rows to {}", rows.len(), filepath);
    Ok(rows.len())
}
