//! Download documents: the enhanced analysis JSON, the dataset CSV and the
//! agent collaboration report.

use crate::error::DashboardError;
use crate::session::Session;
use agents::AgentNetwork;
use analytics::AnalysisResult;
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const ANALYSIS_FILE: &str = "carbon_analysis_coral_enhanced.json";
pub const DATASET_FILE: &str = "carbon_emissions_data.csv";
pub const AGENT_REPORT_FILE: &str = "coral_agent_collaboration_report.json";

/// Recommendations produced across the four specialists in one consultation.
const RECOMMENDATIONS_PER_CONSULTATION: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoralProtocolInfo {
    pub agents_used: Vec<String>,
    pub collaboration_session: String,
    pub server_url: String,
    pub mcp_protocol: String,
}

/// The analysis result with the agent network details appended.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDocument<'a> {
    #[serde(flatten)]
    pub analysis: &'a AnalysisResult,
    pub coral_protocol: CoralProtocolInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReport {
    pub session_id: String,
    pub agents_consulted: usize,
    pub total_recommendations: usize,
    /// RFC 3339.
    pub collaboration_timestamp: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub coral_tokens_used: Decimal,
}

impl Session {
    pub fn analysis_document(
        &self,
        network: &AgentNetwork,
    ) -> Result<AnalysisDocument<'_>, DashboardError> {
        let (_, analysis) = self.require_analysis()?;
        Ok(AnalysisDocument {
            analysis,
            coral_protocol: CoralProtocolInfo {
                agents_used: network.specialist_ids(),
                collaboration_session: network.session_id().to_string(),
                server_url: network.server_url().to_string(),
                mcp_protocol: "enabled".to_string(),
            },
        })
    }

    /// The current dataset as CSV text with the canonical header.
    pub fn dataset_csv(&self) -> Result<String, DashboardError> {
        let dataset = self.require_dataset()?;
        let mut buf = Vec::new();
        ingest::write_csv(dataset, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn agent_report(&self, network: &AgentNetwork, now: DateTime<Utc>) -> AgentReport {
        AgentReport {
            session_id: network.session_id().to_string(),
            agents_consulted: network.discover().len(),
            total_recommendations: RECOMMENDATIONS_PER_CONSULTATION,
            collaboration_timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            coral_tokens_used: network.tokens_per_full_consultation(),
        }
    }
}

/// Writes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DashboardError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Writes all three download documents into `dir` and returns their paths.
pub fn export_all(
    session: &Session,
    network: &AgentNetwork,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<Vec<PathBuf>, DashboardError> {
    std::fs::create_dir_all(dir)?;

    let analysis_path = dir.join(ANALYSIS_FILE);
    write_json(&analysis_path, &session.analysis_document(network)?)?;

    let dataset_path = dir.join(DATASET_FILE);
    std::fs::write(&dataset_path, session.dataset_csv()?)?;

    let report_path = dir.join(AGENT_REPORT_FILE);
    write_json(&report_path, &session.agent_report(network, now))?;

    tracing::info!(dir = %dir.display(), "Exported analysis documents.");
    Ok(vec![analysis_path, dataset_path, report_path])
}
