use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema mismatch in {table} table ({path}): missing columns {missing:?}")]
    SchemaMismatch {
        table: &'static str,
        path: PathBuf,
        missing: Vec<String>,
    },

    #[error("{table} table ({path}) has {found} columns, expected at least {expected}")]
    ColumnCount {
        table: &'static str,
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Invalid value '{value}' for column {column} in {table} table (row {row})")]
    InvalidValue {
        table: &'static str,
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("Township {pcode} appears more than once in {table} table")]
    DuplicateKey { table: &'static str, pcode: String },

    #[error("Missing required data: {0}")]
    MissingData(String),
}
