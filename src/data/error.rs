use thiserror::Error;

/// Failures while acquiring or decoding the dataset. None of these are
/// recovered from; the run aborts with the diagnostic.
#[derive(Debug, Error)]
pub enum DataError {
    /// The remote source could not be reached or answered non-success.
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    /// The CSV header lacks one of the expected columns.
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// A row failed to decode. `row` is 1-based, counting data rows.
    #[error("malformed CSV row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}
