use crate::config::{BoundaryInput, CentroidInput};
use crate::model::{BoundaryRecord, Crs, LocalAuthority, SdgError};
use geo::Point;
use shapefile::dbase::{FieldValue, Record};
use shapefile::Shape;
use std::collections::HashMap;
use std::path::Path;

/// infers the crs of a shapefile from its .prj sidecar
pub fn read_prj_crs(shp_path: &Path) -> Crs {
    let prj_path = shp_path.with_extension("prj");
    match std::fs::read_to_string(&prj_path) {
        Ok(wkt) => {
            let crs = Crs::from_prj(&wkt);
            if crs == Crs::Unknown {
                log::warn!(
                    "unrecognized coordinate system in {}, assuming it matches the other inputs",
                    prj_path.to_string_lossy()
                );
            }
            crs
        }
        Err(e) => {
            log::warn!(
                "cannot read {} ({e}), the crs of {} is unknown",
                prj_path.to_string_lossy(),
                shp_path.to_string_lossy()
            );
            Crs::Unknown
        }
    }
}

/// reads the boundary polygons of the authorities whose code starts with
/// the country prefix
pub fn read_boundaries(
    path: &Path,
    input: &BoundaryInput,
    country_code_prefix: &str,
) -> Result<(Vec<BoundaryRecord>, Crs), SdgError> {
    let filepath = path.to_string_lossy().to_string();
    let rows = shapefile::read(path).map_err(|source| SdgError::ShapefileReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let n_rows = rows.len();
    let mut boundaries = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let code = character_field(&record, &input.code_field, &filepath, idx)?;
        if !LocalAuthority::has_country_prefix(&code, country_code_prefix) {
            continue;
        }
        let name = character_field(&record, &input.name_field, &filepath, idx)?;
        let area: geo::MultiPolygon<f64> = match shape {
            Shape::Polygon(polygon) => polygon.try_into(),
            Shape::PolygonM(polygon) => polygon.try_into(),
            Shape::PolygonZ(polygon) => polygon.try_into(),
            _ => {
                return Err(SdgError::InvalidValue {
                    filepath,
                    row: idx,
                    message: format!(
                        "unexpected shape type {}, must be polygonal",
                        shape.shapetype()
                    ),
                })
            }
        }
        .map_err(|e| SdgError::InvalidValue {
            filepath: filepath.clone(),
            row: idx,
            message: format!("failed to convert shapefile polygon: {e}"),
        })?;
        boundaries.push(BoundaryRecord { code, name, area });
    }
    log::info!(
        "kept {} of {} boundary records with code prefix '{}' from {}",
        boundaries.len(),
        n_rows,
        country_code_prefix,
        filepath
    );
    Ok((boundaries, read_prj_crs(path)))
}

/// reads population weighted centroids keyed by output area code. a
/// repeated code keeps its first point.
pub fn read_centroids(
    path: &Path,
    input: &CentroidInput,
) -> Result<(HashMap<String, Point<f64>>, Crs), SdgError> {
    let filepath = path.to_string_lossy().to_string();
    let rows = shapefile::read(path).map_err(|source| SdgError::ShapefileReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let mut centroids = HashMap::with_capacity(rows.len());
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let point = match shape {
            Shape::Point(p) => Point::new(p.x, p.y),
            Shape::PointM(p) => Point::new(p.x, p.y),
            Shape::PointZ(p) => Point::new(p.x, p.y),
            _ => {
                return Err(SdgError::InvalidValue {
                    filepath,
                    row: idx,
                    message: format!("unexpected shape type {}, must be a point", shape.shapetype()),
                })
            }
        };
        let code = character_field(&record, &input.code_field, &filepath, idx)?;
        centroids.entry(code).or_insert(point);
    }
    log::info!("read {} centroids from {}", centroids.len(), filepath);
    Ok((centroids, read_prj_crs(path)))
}

fn character_field(record: &Record, field: &str, filepath: &str, row: usize) -> Result<String, SdgError> {
    let value = record.get(field).ok_or_else(|| SdgError::MissingColumn {
        filepath: filepath.to_string(),
        column: field.to_string(),
    })?;
    match value {
        FieldValue::Character(Some(s)) => Ok(s.trim().to_string()),
        _ => Err(SdgError::InvalidValue {
            filepath: filepath.to_string(),
            row,
            message: format!(
                "field '{}' has unexpected field type '{}'",
                field,
                value.field_type()
            ),
        }),
    }
}
