use super::csv_ops::{self, column_index, field, header_lookup, parse_count};
use crate::config::{AgeInput, DisabilityInput, UrbanRuralInput};
use crate::model::{AgeBands, SdgError, UrbanRural};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// raw counts of the disability table for one output area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabilityRecord {
    pub total: u64,
    /// people whose day-to-day activities are limited a lot or a little
    pub limited: u64,
}

pub fn read_urban_rural(
    path: &Path,
    input: &UrbanRuralInput,
) -> Result<HashMap<String, UrbanRural>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_urban_rural(file, &path.to_string_lossy(), input)
}

pub fn parse_urban_rural<R: Read>(
    reader: R,
    source_name: &str,
    input: &UrbanRuralInput,
) -> Result<HashMap<String, UrbanRural>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let lookup = header_lookup(&headers);
    let code_idx = column_index(&lookup, &input.code_column, source_name)?;
    let class_idx = column_index(&lookup, &input.class_column, source_name)?;

    let mut classes = HashMap::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        let code = field(&row, code_idx);
        if code.is_empty() {
            continue;
        }
        let class = UrbanRural::try_from(field(&row, class_idx)).map_err(|message| {
            SdgError::InvalidValue {
                filepath: source_name.to_string(),
                row: idx,
                message,
            }
        })?;
        classes.entry(code.to_string()).or_insert(class);
    }
    log::info!("read urban/rural class of {} areas from {}", classes.len(), source_name);
    Ok(classes)
}

pub fn read_disability(
    path: &Path,
    input: &DisabilityInput,
) -> Result<HashMap<String, DisabilityRecord>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_disability(file, &path.to_string_lossy(), input)
}

pub fn parse_disability<R: Read>(
    reader: R,
    source_name: &str,
    input: &DisabilityInput,
) -> Result<HashMap<String, DisabilityRecord>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let lookup = header_lookup(&headers);
    let code_idx = column_index(&lookup, &input.code_column, source_name)?;
    let total_idx = column_index(&lookup, &input.total_column, source_name)?;
    let lot_idx = column_index(&lookup, &input.limited_a_lot_column, source_name)?;
    let little_idx = column_index(&lookup, &input.limited_a_little_column, source_name)?;

    let mut records = HashMap::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        let code = field(&row, code_idx);
        if code.is_empty() {
            continue;
        }
        let total = parse_count(field(&row, total_idx), &input.total_column, source_name, idx)?;
        let lot = parse_count(field(&row, lot_idx), &input.limited_a_lot_column, source_name, idx)?;
        let little = parse_count(
            field(&row, little_idx),
            &input.limited_a_little_column,
            source_name,
            idx,
        )?;
        if lot + little > total {
            return Err(SdgError::InvalidValue {
                filepath: source_name.to_string(),
                row: idx,
                message: format!(
                    "{code} has {} people with limited activities out of {total}",
                    lot + little
                ),
            });
        }
        records.entry(code.to_string()).or_insert(DisabilityRecord {
            total,
            limited: lot + little,
        });
    }
    log::info!("read disability status of {} areas from {}", records.len(), source_name);
    Ok(records)
}

pub fn read_age(
    path: &Path,
    input: &AgeInput,
    bands: &AgeBands,
) -> Result<HashMap<String, Vec<u64>>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_age(file, &path.to_string_lossy(), input, bands)
}

/// reads a single year of age table and sums the years into the configured
/// bands. columns that are not an age, like "All people", are ignored.
pub fn parse_age<R: Read>(
    reader: R,
    source_name: &str,
    input: &AgeInput,
    bands: &AgeBands,
) -> Result<HashMap<String, Vec<u64>>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let lookup = header_lookup(&headers);
    let code_idx = column_index(&lookup, &input.code_column, source_name)?;
    let age_columns = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != code_idx)
        .filter_map(|(idx, h)| parse_age_column(h).map(|age| (idx, h.trim().to_string(), bands.band_of(age))))
        .collect::<Vec<_>>();
    if age_columns.is_empty() {
        return Err(SdgError::MissingColumn {
            filepath: source_name.to_string(),
            column: String::from("single year of age"),
        });
    }

    let mut ages = HashMap::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        let code = field(&row, code_idx);
        if code.is_empty() || ages.contains_key(code) {
            continue;
        }
        let mut counts = vec![0u64; bands.len()];
        for (col_idx, column, band) in age_columns.iter() {
            counts[*band] += parse_count(field(&row, *col_idx), column, source_name, idx)?;
        }
        ages.insert(code.to_string(), counts);
    }
    log::info!("read age profile of {} areas from {}", ages.len(), source_name);
    Ok(ages)
}

/// "Under 1" is age 0, "N" is age N and "N and over" is age N
pub fn parse_age_column(header: &str) -> Option<u32> {
    let header = header.trim();
    if header.eq_ignore_ascii_case("under 1") {
        return Some(0);
    }
    let number = header.strip_suffix(" and over").unwrap_or(header);
    number.trim().parse::<u32>().ok()
}
