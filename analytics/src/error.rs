use thiserror::Error;

/// Errors raised while ingesting quotes or running the analyses over them
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Maximum gain scan requires at least one value, got an empty sequence")]
    EmptyInput,

    #[error("Malformed record at data row {row}: field '{field}' has value '{value}' ({reason})")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
