#[derive(thiserror::Error, Debug)]
pub enum TimetableError {
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("line {line}: record '{record}' has no field '{field}'")]
    UnknownField {
        line: usize,
        record: &'static str,
        field: &'static str,
    },
    #[error("line {line}: field '{field}' is not valid: {message}")]
    InvalidField {
        line: usize,
        field: &'static str,
        message: String,
    },
    #[error("invalid hour range [{early}, {late}): early hour must be less than late hour and both within 0..=24")]
    InvalidHourRange { early: u32, late: u32 },
    #[error("failure reading CSV '{filepath}': {source}")]
    CsvReadError { filepath: String, source: csv::Error },
    #[error("failure writing CSV '{filepath}': {source}")]
    CsvWriteError { filepath: String, source: csv::Error },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
}
