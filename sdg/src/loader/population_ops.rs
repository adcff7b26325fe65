use super::csv_ops::{self, column_index, field, header_lookup, parse_count};
use crate::config::PopulationInput;
use crate::model::{PopulationCounts, SdgError};
use indexmap::IndexMap;
use std::io::Read;
use std::path::Path;

/// reads usual resident counts keyed by output area code, in file order.
/// repeated codes keep their first row.
pub fn read_population(
    path: &Path,
    input: &PopulationInput,
) -> Result<IndexMap<String, PopulationCounts>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_population(file, &path.to_string_lossy(), input)
}

pub fn parse_population<R: Read>(
    reader: R,
    source_name: &str,
    input: &PopulationInput,
) -> Result<IndexMap<String, PopulationCounts>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let lookup = header_lookup(&headers);
    let code_idx = column_index(&lookup, &input.code_column, source_name)?;
    let all_idx = column_index(&lookup, &input.all_people_column, source_name)?;
    let males_idx = column_index(&lookup, &input.males_column, source_name)?;
    let females_idx = column_index(&lookup, &input.females_column, source_name)?;

    let mut population: IndexMap<String, PopulationCounts> = IndexMap::new();
    let mut duplicates = 0;
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        let code = field(&row, code_idx);
        // blank rows separate the table from its footnotes
        if code.is_empty() {
            continue;
        }
        if population.contains_key(code) {
            duplicates += 1;
            continue;
        }
        let counts = PopulationCounts {
            all_people: parse_count(field(&row, all_idx), &input.all_people_column, source_name, idx)?,
            males: parse_count(field(&row, males_idx), &input.males_column, source_name, idx)?,
            females: parse_count(field(&row, females_idx), &input.females_column, source_name, idx)?,
        };
        population.insert(code.to_string(), counts);
    }
    if duplicates > 0 {
        log::warn!("{duplicates} repeated area codes in {source_name} were ignored");
    }
    log::info!("read population for {} areas from {}", population.len(), source_name);
    Ok(population)
}
