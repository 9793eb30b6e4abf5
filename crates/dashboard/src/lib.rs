//! # Canopy Dashboard
//!
//! The session layer between the presentation front end and the library
//! crates. A `Session` holds the dataset and analysis for one user
//! interaction; the `view` and `export` modules turn that state into the
//! metric cards, summaries and download documents the front end shows.

pub mod error;
pub mod export;
pub mod session;
pub mod view;

pub use error::DashboardError;
pub use export::{
    AGENT_REPORT_FILE, ANALYSIS_FILE, AgentReport, AnalysisDocument, CoralProtocolInfo,
    DATASET_FILE, export_all, write_json,
};
pub use session::Session;
pub use view::{CollaborationSummary, MetricCard};
