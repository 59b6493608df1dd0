/// Readers and writers for the game's data files
///
/// Excel tables are tab-separated text, localized strings are JSON arrays of
/// records. Both are parsed fully, mutated in memory and written back whole.
pub mod json;
pub mod tsv;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
