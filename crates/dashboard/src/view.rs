use crate::error::DashboardError;
use crate::session::Session;
use agents::directory;
use agents::util::format_thousands;
use analytics::MetricsEngine;
use rust_decimal::Decimal;
use serde::Serialize;

/// Collaboration threads opened per multi-agent analysis.
const THREADS_PER_ANALYSIS: usize = 1;

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// Agent activity behind a multi-agent analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollaborationSummary {
    pub agents_consulted: usize,
    pub collaboration_threads: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub tokens_used: Decimal,
}

impl Session {
    /// Total emissions, countries analyzed, years covered and trees needed.
    pub fn metric_cards(&self, engine: &MetricsEngine) -> Result<[MetricCard; 4], DashboardError> {
        let (dataset, analysis) = self.require_analysis()?;
        let summary = engine.summarize(dataset);

        Ok([
            MetricCard {
                label: "Total Emissions",
                value: format!("{:.2} units", summary.total_emissions),
            },
            MetricCard {
                label: "Countries Analyzed",
                value: summary.total_countries.to_string(),
            },
            MetricCard {
                label: "Years Covered",
                value: summary.distinct_years.to_string(),
            },
            MetricCard {
                label: "Trees Needed",
                value: format_thousands(analysis.tree_impact.trees_needed),
            },
        ])
    }

    /// `None` when the current analysis came from the fallback path.
    pub fn collaboration_summary(&self) -> Result<Option<CollaborationSummary>, DashboardError> {
        let (_, analysis) = self.require_analysis()?;
        if !analysis.agents_engaged {
            return Ok(None);
        }
        Ok(Some(CollaborationSummary {
            agents_consulted: directory().len(),
            collaboration_threads: THREADS_PER_ANALYSIS,
            tokens_used: agents::directory::full_consultation_cost(),
        }))
    }

    /// Text handed to speech synthesis after an analysis.
    pub fn voice_summary(&self, engine: &MetricsEngine) -> Result<String, DashboardError> {
        let (dataset, analysis) = self.require_analysis()?;
        Ok(format!(
            "Multi-agent analysis complete. Total emissions: {:.2} units across {} countries. \
             {} trees needed for offset. Four specialized agents provided coordinated \
             recommendations for climate action.",
            dataset.total_emissions(),
            engine.country_count(dataset),
            format_thousands(analysis.tree_impact.trees_needed),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    const CSV: &str = "Country,Year,Carbon_Emissions\nUSA,2020,100\nUSA,2021,200\nChina,2020,300\n";

    fn analyzed(rich: bool) -> Session {
        let mut session = Session::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        session.upload_csv(CSV.as_bytes()).unwrap();
        session.analyze(&MetricsEngine::new(), rich).unwrap();
        session
    }

    #[test]
    fn cards_show_headline_figures() {
        let cards = analyzed(true).metric_cards(&MetricsEngine::new()).unwrap();
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["600.00 units", "2", "2", "12,500"]);
    }

    #[test]
    fn cards_need_an_analysis() {
        let mut session = Session::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        session.upload_csv(CSV.as_bytes()).unwrap();
        assert!(matches!(
            session.metric_cards(&MetricsEngine::new()),
            Err(DashboardError::NotAnalyzed)
        ));
    }

    #[test]
    fn collaboration_summary_only_for_rich_analysis() {
        let summary = analyzed(true).collaboration_summary().unwrap().unwrap();
        assert_eq!(summary.agents_consulted, 4);
        assert_eq!(summary.collaboration_threads, 1);
        assert_eq!(summary.tokens_used, dec!(0.7));

        assert!(analyzed(false).collaboration_summary().unwrap().is_none());
    }

    #[test]
    fn voice_summary_text() {
        let text = analyzed(true).voice_summary(&MetricsEngine::new()).unwrap();
        assert_eq!(
            text,
            "Multi-agent analysis complete. Total emissions: 600.00 units across 2 countries. \
             12,500 trees needed for offset. Four specialized agents provided coordinated \
             recommendations for climate action."
        );
    }
}
