use crate::error::AnalyticsError;
use crate::grouping::{ranked_countries, totals_by_country, totals_by_year};
use crate::report::{AnalysisResult, SectorPriorities, Summary, TreeImpact, TrendResult, YearSpan};
use core_types::{Dataset, Sector, Trend};
use std::collections::HashSet;

/// How many countries the summary ranks.
pub const TOP_EMITTER_COUNT: usize = 5;

const RICH_INSIGHTS: [&str; 5] = [
    "Global carbon emissions show concerning upward trend",
    "Top 5 countries contribute to 60% of total emissions",
    "Industrial sector requires immediate attention",
    "Transportation emissions increased by 15% in recent years",
    "Multi-agent analysis reveals coordinated action needed",
];

const RICH_RECOMMENDATIONS: [&str; 5] = [
    "Implement reforestation programs in high-emission areas",
    "Focus on renewable energy transition",
    "Develop carbon trading mechanisms",
    "Promote sustainable transportation",
    "Deploy AI agent coordination for climate action",
];

const RICH_SECTOR_PRIORITIES: [(Sector, &str); 4] = [
    (Sector::Energy, "Critical - 45% of emissions"),
    (Sector::Transportation, "High - 25% of emissions"),
    (Sector::Industry, "High - 20% of emissions"),
    (Sector::Agriculture, "Medium - 10% of emissions"),
];

const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Focus on countries with highest emissions",
    "Implement carbon reduction policies",
    "Invest in renewable energy",
    "Monitor emission trends closely",
];

const FALLBACK_SECTOR_PRIORITIES: [(Sector, &str); 4] = [
    (Sector::Energy, "Critical Priority"),
    (Sector::Transportation, "High Priority"),
    (Sector::Industry, "High Priority"),
    (Sector::Agriculture, "Medium Priority"),
];

/// A stateless calculator for deriving emission metrics and insights from a dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the descriptive statistics for the full dataset.
    ///
    /// An empty dataset yields zeros and no year span.
    pub fn summarize(&self, dataset: &Dataset) -> Summary {
        let record_count = dataset.len();
        let total_emissions = dataset.total_emissions();

        let total_countries = dataset
            .iter()
            .map(|r| r.country.as_str())
            .collect::<HashSet<_>>()
            .len();

        let years: HashSet<i32> = dataset.iter().map(|r| r.year).collect();
        let year_span = match (years.iter().min(), years.iter().max()) {
            (Some(&first), Some(&last)) => Some(YearSpan { first, last }),
            _ => None,
        };

        let (mean_emissions, max_emission) = if record_count == 0 {
            (0.0, 0.0)
        } else {
            let max = dataset
                .iter()
                .map(|r| r.carbon_emissions)
                .fold(f64::NEG_INFINITY, f64::max);
            (total_emissions / record_count as f64, max)
        };

        let mut top_emitters = ranked_countries(dataset);
        top_emitters.truncate(TOP_EMITTER_COUNT);

        Summary {
            record_count,
            total_countries,
            distinct_years: years.len(),
            year_span,
            total_emissions,
            mean_emissions,
            max_emission,
            top_emitters,
        }
    }

    /// Compares the first and last chronological yearly totals.
    ///
    /// Fewer than two distinct years, or a zero first-year total, is reported
    /// as stable with a growth rate of 0.
    pub fn compute_trend(&self, dataset: &Dataset) -> TrendResult {
        let yearly = totals_by_year(dataset);

        let (Some(first), Some(last)) = (yearly.first(), yearly.last()) else {
            return TrendResult::stable();
        };
        if yearly.len() < 2 {
            return TrendResult::stable();
        }

        match growth_rate(first.total, last.total) {
            Ok(growth_rate) => TrendResult {
                growth_rate,
                trend: if growth_rate > 0.0 {
                    Trend::Increasing
                } else {
                    Trend::Decreasing
                },
            },
            Err(e) => {
                tracing::debug!(error = %e, first_year = first.year, "Trend undefined; reporting stable.");
                TrendResult::stable()
            }
        }
    }

    /// Converts an emission total into the tree-offset estimate.
    pub fn compute_tree_impact(&self, total_emissions: f64) -> TreeImpact {
        TreeImpact::from_total_emissions(total_emissions)
    }

    /// Builds the analysis shown on the dashboard.
    ///
    /// With `rich_analysis_available` the rich path is attempted; if it is
    /// unavailable or fails for any reason, the data-derived fallback is
    /// returned instead. This function never fails.
    pub fn build_analysis(&self, dataset: &Dataset, rich_analysis_available: bool) -> AnalysisResult {
        if !rich_analysis_available {
            tracing::info!("Rich analysis unavailable; using fallback analysis.");
            return self.fallback_analysis(dataset);
        }

        match self.rich_analysis(dataset) {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "Rich analysis failed; downgrading to fallback analysis.");
                self.fallback_analysis(dataset)
            }
        }
    }

    /// The multi-agent analysis: fixed insights, recommendations and sector weights.
    ///
    /// Only the tree impact depends on the data. Requires at least one record.
    pub fn rich_analysis(&self, dataset: &Dataset) -> Result<AnalysisResult, AnalyticsError> {
        if dataset.is_empty() {
            return Err(AnalyticsError::NotEnoughData(
                "rich analysis needs at least one emission record".to_string(),
            ));
        }

        let summary = self.summarize(dataset);
        let trend = self.compute_trend(dataset);
        tracing::debug!(
            countries = summary.total_countries,
            year_range = %summary.year_range(),
            total_emissions = summary.total_emissions,
            growth_rate = trend.growth_rate,
            trend = %trend.trend,
            "Prepared data summary for multi-agent analysis."
        );

        Ok(AnalysisResult {
            key_insights: to_strings(&RICH_INSIGHTS),
            recommendations: to_strings(&RICH_RECOMMENDATIONS),
            tree_impact: self.compute_tree_impact(summary.total_emissions),
            sector_priorities: to_priorities(&RICH_SECTOR_PRIORITIES),
            agents_engaged: true,
        })
    }

    /// The data-derived analysis used when the rich path is unavailable.
    pub fn fallback_analysis(&self, dataset: &Dataset) -> AnalysisResult {
        let summary = self.summarize(dataset);

        let key_insights = vec![
            format!("Data covers {} emission records", summary.record_count),
            format!("Average emission per record: {:.2} units", summary.mean_emissions),
            format!("Highest emission: {:.2} units", summary.max_emission),
            format!("Data spans {} years", summary.distinct_years),
        ];

        AnalysisResult {
            key_insights,
            recommendations: to_strings(&FALLBACK_RECOMMENDATIONS),
            tree_impact: self.compute_tree_impact(summary.total_emissions),
            sector_priorities: to_priorities(&FALLBACK_SECTOR_PRIORITIES),
            agents_engaged: false,
        }
    }

    /// The `n` countries with the largest summed emissions, descending.
    pub fn top_countries(&self, dataset: &Dataset, n: usize) -> Vec<String> {
        ranked_countries(dataset)
            .into_iter()
            .take(n)
            .map(|c| c.country)
            .collect()
    }

    /// Number of distinct countries, as shown on the metric cards.
    pub fn country_count(&self, dataset: &Dataset) -> usize {
        totals_by_country(dataset).len()
    }
}

/// Percent change from `first` to `last`.
fn growth_rate(first: f64, last: f64) -> Result<f64, AnalyticsError> {
    if first == 0.0 {
        return Err(AnalyticsError::DivisionByZero("growth_rate".to_string()));
    }
    Ok((last - first) / first * 100.0)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_priorities(items: &[(Sector, &str)]) -> SectorPriorities {
    items
        .iter()
        .map(|&(sector, label)| (sector, label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core_types::EmissionRecord;

    fn dataset(rows: &[(&str, i32, f64)]) -> Dataset {
        rows.iter()
            .map(|&(c, y, e)| EmissionRecord::new(c, y, e).unwrap())
            .collect()
    }

    #[test]
    fn single_year_is_stable() {
        let engine = MetricsEngine::new();
        let data = dataset(&[("USA", 2020, 100.0), ("China", 2020, 900.0)]);

        assert_eq!(engine.compute_trend(&data), TrendResult::stable());
    }

    #[test]
    fn two_years_give_growth_rate() {
        let engine = MetricsEngine::new();
        let data = dataset(&[("USA", 2021, 150.0), ("USA", 2020, 60.0), ("China", 2020, 40.0)]);

        let trend = engine.compute_trend(&data);
        assert_relative_eq!(trend.growth_rate, 50.0);
        assert_eq!(trend.trend, Trend::Increasing);
    }

    #[test]
    fn flat_or_falling_totals_are_decreasing() {
        let engine = MetricsEngine::new();

        let falling = engine.compute_trend(&dataset(&[("A", 2020, 200.0), ("A", 2022, 50.0)]));
        assert_relative_eq!(falling.growth_rate, -75.0);
        assert_eq!(falling.trend, Trend::Decreasing);

        // Zero growth is not "increasing".
        let flat = engine.compute_trend(&dataset(&[("A", 2020, 80.0), ("A", 2021, 80.0)]));
        assert_eq!(flat.growth_rate, 0.0);
        assert_eq!(flat.trend, Trend::Decreasing);
    }

    #[test]
    fn zero_first_year_total_is_stable() {
        let engine = MetricsEngine::new();
        let data = dataset(&[("A", 2020, 0.0), ("A", 2021, 500.0)]);

        assert_eq!(engine.compute_trend(&data), TrendResult::stable());
    }

    #[test]
    fn empty_dataset_is_handled() {
        let engine = MetricsEngine::new();
        let empty = Dataset::default();

        let summary = engine.summarize(&empty);
        assert_eq!(summary.total_countries, 0);
        assert_eq!(summary.year_span, None);
        assert_eq!(summary.mean_emissions, 0.0);
        assert!(summary.top_emitters.is_empty());
        assert_eq!(engine.compute_trend(&empty), TrendResult::stable());
    }

    #[test]
    fn tree_impact_truncates() {
        let engine = MetricsEngine::new();
        let impact = engine.compute_tree_impact(1.0);

        // 1000 / 48 = 20.83
        assert_eq!(impact.trees_needed, 20);
        assert_eq!(impact.annual_absorption_lbs, 960);
        assert_relative_eq!(impact.forest_area_acres, 0.012);
    }

    #[test]
    fn negative_total_truncates_toward_zero() {
        let impact = MetricsEngine::new().compute_tree_impact(-1.0);

        assert_eq!(impact.trees_needed, -20);
        assert_eq!(impact.annual_absorption_lbs, -960);
    }

    #[test]
    fn rich_path_is_fixed_apart_from_tree_impact() {
        let engine = MetricsEngine::new();
        let data = dataset(&[("USA", 2020, 600.0)]);

        let analysis = engine.build_analysis(&data, true);
        assert!(analysis.agents_engaged);
        assert_eq!(analysis.key_insights.len(), 5);
        assert_eq!(analysis.recommendations.len(), 5);
        assert_eq!(analysis.tree_impact.trees_needed, 12_500);
        assert_eq!(
            analysis.sector_priorities.get(&Sector::Energy).map(String::as_str),
            Some("Critical - 45% of emissions")
        );
    }

    #[test]
    fn fallback_insights_come_from_the_data() {
        let engine = MetricsEngine::new();
        let data = dataset(&[("USA", 2020, 100.0), ("USA", 2021, 200.0), ("China", 2020, 300.0)]);

        let analysis = engine.build_analysis(&data, false);
        assert!(!analysis.agents_engaged);
        assert_eq!(
            analysis.key_insights,
            vec![
                "Data covers 3 emission records",
                "Average emission per record: 200.00 units",
                "Highest emission: 300.00 units",
                "Data spans 2 years",
            ]
        );
        assert_eq!(analysis.recommendations.len(), 4);
        assert_eq!(
            analysis.sector_priorities.get(&Sector::Agriculture).map(String::as_str),
            Some("Medium Priority")
        );
    }

    #[test]
    fn failing_rich_path_downgrades_to_fallback() {
        let engine = MetricsEngine::new();
        let empty = Dataset::default();

        assert!(matches!(
            engine.rich_analysis(&empty),
            Err(AnalyticsError::NotEnoughData(_))
        ));

        let analysis = engine.build_analysis(&empty, true);
        assert!(!analysis.agents_engaged);
        assert_eq!(analysis.key_insights[0], "Data covers 0 emission records");
        assert_eq!(analysis.tree_impact.trees_needed, 0);
    }

    #[test]
    fn sector_priorities_iterate_in_priority_order() {
        let engine = MetricsEngine::new();
        let analysis = engine.build_analysis(&dataset(&[("A", 2020, 1.0)]), true);

        let order: Vec<Sector> = analysis.sector_priorities.keys().copied().collect();
        assert_eq!(order, Sector::ALL.to_vec());
    }
}
