use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No dataset loaded. Upload a CSV file or use the sample data first.")]
    NoDataset,

    #[error("The current dataset has not been analyzed yet.")]
    NotAnalyzed,

    #[error(transparent)]
    Ingest(#[from] ingest::IngestError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
