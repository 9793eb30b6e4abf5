use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// The table lacks at least one required column. Carries the columns that were found.
    #[error("Missing required columns. Found: {found:?}")]
    MissingColumns { found: Vec<String> },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sample configuration: {0}")]
    InvalidSampleConfig(String),
}
