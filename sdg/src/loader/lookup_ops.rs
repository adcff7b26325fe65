use super::csv_ops::{self, column_index};
use crate::config::LookupInput;
use crate::model::SdgError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// reads the output area to local authority lookup. the file lists every
/// postcode, so output areas repeat; the first row of each area is kept.
pub fn read_oa_lookup(path: &Path, input: &LookupInput) -> Result<HashMap<String, String>, SdgError> {
    let file = csv_ops::open(path)?;
    parse_oa_lookup(file, &path.to_string_lossy(), input)
}

/// the lookup is ISO-8859-1 encoded, every byte maps to the unicode code
/// point of the same value. 0x80..=0x9f stay C1 controls, they are not read
/// as windows-1252.
pub fn parse_oa_lookup<R: Read>(
    reader: R,
    source_name: &str,
    input: &LookupInput,
) -> Result<HashMap<String, String>, SdgError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let header_bytes = csv_reader
        .byte_headers()
        .map_err(|e| csv_ops::csv_error(source_name, e))?
        .clone();
    let header_record = header_bytes.iter().map(latin1).collect::<csv::StringRecord>();
    let headers = csv_ops::header_lookup(&header_record);
    let code_idx = column_index(&headers, &input.code_column, source_name)?;
    let authority_idx = column_index(&headers, &input.authority_column, source_name)?;

    let mut lookup: HashMap<String, String> = HashMap::new();
    let mut n_rows = 0;
    for row in csv_reader.byte_records() {
        let row = row.map_err(|e| csv_ops::csv_error(source_name, e))?;
        n_rows += 1;
        let code = row.get(code_idx).map(latin1).unwrap_or_default();
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        if !lookup.contains_key(code) {
            let authority = row.get(authority_idx).map(latin1).unwrap_or_default();
            lookup.insert(code.to_string(), authority.trim().to_string());
        }
    }
    log::info!(
        "read {} output area assignments from {} rows of {}",
        lookup.len(),
        n_rows,
        source_name
    );
    Ok(lookup)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|b| char::from(*b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_lookup_first_wins() {
        let mut data: Vec<u8> = b"pcds,oa11cd,ladnm\n".to_vec();
        data.extend_from_slice(b"AB1 0AA,S00090001,Aberdeen City\n");
        data.extend_from_slice(b"AB1 0AB,S00090001,Aberdeenshire\n");
        // 0xe9 is an e acute in latin-1 and invalid utf-8 on its own
        data.extend_from_slice(b"HS1 2AA,S00090002,Eil\xe9an Siar\n");
        data.extend_from_slice(b"XX1 1XX,,\n");

        let lookup = parse_oa_lookup(data.as_slice(), "lookup.csv", &LookupInput::default())
            .expect("lookup should parse");
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("S00090001").map(String::as_str), Some("Aberdeen City"));
        assert_eq!(lookup.get("S00090002").map(String::as_str), Some("Eiléan Siar"));
    }

    #[test]
    fn test_latin1_high_control_bytes_keep_their_code_point() {
        let mut data: Vec<u8> = b"oa11cd,ladnm\n".to_vec();
        data.extend_from_slice(b"S00090003,Fife\x80\xff\n");
        let lookup = parse_oa_lookup(data.as_slice(), "lookup.csv", &LookupInput::default())
            .expect("lookup should parse");
        assert_eq!(lookup.get("S00090003").map(String::as_str), Some("Fife\u{80}\u{ff}"));
    }
}
