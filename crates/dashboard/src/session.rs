use crate::error::DashboardError;
use analytics::{AnalysisResult, MetricsEngine};
use chrono::{DateTime, Utc};
use core_types::Dataset;
use ingest::SampleConfig;
use std::io::Read;

/// State of one dashboard interaction.
///
/// A new dataset always replaces the old one and drops the analysis computed
/// from it. A rejected upload leaves both untouched.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    created_at: DateTime<Utc>,
    dataset: Option<Dataset>,
    analysis: Option<AnalysisResult>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        let id = format!("canopy_{}", now.format("%Y%m%d_%H%M%S"));
        tracing::info!(session = %id, "Session started.");
        Self {
            id,
            created_at: now,
            dataset: None,
            analysis: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Parses and validates uploaded CSV content, then makes it current.
    pub fn upload_csv<R: Read>(&mut self, reader: R) -> Result<&Dataset, DashboardError> {
        match ingest::read_dataset(reader) {
            Ok(dataset) => Ok(self.load_dataset(dataset)),
            Err(e) => {
                tracing::error!(session = %self.id, error = %e, "Upload rejected.");
                Err(e.into())
            }
        }
    }

    /// Generates the synthetic sample and makes it current.
    pub fn use_sample(&mut self, config: &SampleConfig) -> Result<&Dataset, DashboardError> {
        let dataset = ingest::generate_sample(config)?;
        Ok(self.load_dataset(dataset))
    }

    /// Replaces the current dataset and clears any previous analysis.
    pub fn load_dataset(&mut self, dataset: Dataset) -> &Dataset {
        tracing::info!(session = %self.id, records = dataset.len(), "Dataset loaded.");
        self.analysis = None;
        self.dataset.insert(dataset)
    }

    /// Runs the analysis on the current dataset and stores the result,
    /// replacing any earlier one.
    pub fn analyze(
        &mut self,
        engine: &MetricsEngine,
        rich_analysis_available: bool,
    ) -> Result<&AnalysisResult, DashboardError> {
        let dataset = self.dataset.as_ref().ok_or(DashboardError::NoDataset)?;
        let analysis = engine.build_analysis(dataset, rich_analysis_available);
        tracing::info!(
            session = %self.id,
            agents_engaged = analysis.agents_engaged,
            "Analysis complete."
        );
        Ok(self.analysis.insert(analysis))
    }

    pub(crate) fn require_dataset(&self) -> Result<&Dataset, DashboardError> {
        self.dataset.as_ref().ok_or(DashboardError::NoDataset)
    }

    pub(crate) fn require_analysis(&self) -> Result<(&Dataset, &AnalysisResult), DashboardError> {
        let dataset = self.require_dataset()?;
        let analysis = self.analysis.as_ref().ok_or(DashboardError::NotAnalyzed)?;
        Ok((dataset, analysis))
    }
}
