use super::Crs;
use sdg_rail::timetable::TimetableError;

#[derive(thiserror::Error, Debug)]
pub enum SdgError {
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure reading CSV '{filepath}': {source}")]
    CsvReadError { filepath: String, source: csv::Error },
    #[error("failure writing CSV '{filepath}': {source}")]
    CsvWriteError { filepath: String, source: csv::Error },
    #[error("failure reading shapefile '{filepath}': {source}")]
    ShapefileReadError {
        filepath: String,
        source: shapefile::Error,
    },
    #[error("file '{filepath}' missing {column} column")]
    MissingColumn { filepath: String, column: String },
    #[error("'{filepath}' row {row}: {message}")]
    InvalidValue {
        filepath: String,
        row: usize,
        message: String,
    },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{left_name} are in {left} but {right_name} are in {right}, reproject one of them before running")]
    CrsMismatch {
        left_name: String,
        left: Crs,
        right_name: String,
        right: Crs,
    },
    #[error("local authority '{0}' has no population")]
    EmptyAuthority(String),
    #[error("failure reading rail stations: {source}")]
    RailStationsError {
        #[from]
        source: TimetableError,
    },
    #[error("{0}")]
    InternalError(String),
}
