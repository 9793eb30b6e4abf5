//! Chart series derived from the grouping primitives.
//!
//! Each series is an ordered list of (label, value) points; rendering is left
//! to the presentation layer.

use crate::grouping::{ranked_countries, totals_by_year};
use core_types::Dataset;
use serde::{Deserialize, Serialize};

/// How many countries the bar chart shows.
pub const TOP_COUNTRY_BARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    fn new(title: &str, points: Vec<SeriesPoint>) -> Self {
        Self {
            title: title.to_string(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, used to scale bars.
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

/// The `n` largest country totals, descending.
pub fn top_countries(dataset: &Dataset, n: usize) -> ChartSeries {
    let points = ranked_countries(dataset)
        .into_iter()
        .take(n)
        .map(|c| SeriesPoint {
            label: c.country,
            value: c.total,
        })
        .collect();
    ChartSeries::new(&format!("Top {} Countries by Carbon Emissions", n), points)
}

/// Every country's share of total emissions in percent, descending.
///
/// All shares are 0 when the total is 0.
pub fn country_shares(dataset: &Dataset) -> ChartSeries {
    let ranked = ranked_countries(dataset);
    let total: f64 = ranked.iter().map(|c| c.total).sum();

    let points = ranked
        .into_iter()
        .map(|c| SeriesPoint {
            value: if total == 0.0 { 0.0 } else { c.total / total * 100.0 },
            label: c.country,
        })
        .collect();
    ChartSeries::new("Carbon Emission Distribution by Country", points)
}

/// Summed emissions per year, ascending by year.
pub fn yearly_totals(dataset: &Dataset) -> ChartSeries {
    let points = totals_by_year(dataset)
        .into_iter()
        .map(|y| SeriesPoint {
            label: y.year.to_string(),
            value: y.total,
        })
        .collect();
    ChartSeries::new("Carbon Emissions Trend Over Time", points)
}

/// Running sum of the yearly totals.
pub fn cumulative_totals(dataset: &Dataset) -> ChartSeries {
    let mut running = 0.0;
    let points = totals_by_year(dataset)
        .into_iter()
        .map(|y| {
            running += y.total;
            SeriesPoint {
                label: y.year.to_string(),
                value: running,
            }
        })
        .collect();
    ChartSeries::new("Cumulative Carbon Emissions Over Time", points)
}

/// The four dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub top_countries: ChartSeries,
    pub country_shares: ChartSeries,
    pub yearly_totals: ChartSeries,
    pub cumulative_totals: ChartSeries,
}

impl ChartSet {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            top_countries: top_countries(dataset, TOP_COUNTRY_BARS),
            country_shares: country_shares(dataset),
            yearly_totals: yearly_totals(dataset),
            cumulative_totals: cumulative_totals(dataset),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        [
            &self.top_countries,
            &self.country_shares,
            &self.yearly_totals,
            &self.cumulative_totals,
        ]
        .into_iter()
    }
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
    fn top_countries_caps_at_n() {
        let rows: Vec<(String, i32, f64)> = (0..12)
            .map(|i| (format!("C{i}"), 2020, i as f64))
            .collect();
        let data: Dataset = rows
            .iter()
            .map(|(c, y, e)| EmissionRecord::new(c.as_str(), *y, *e).unwrap())
            .collect();

        let series = top_countries(&data, TOP_COUNTRY_BARS);
        assert_eq!(series.points.len(), 10);
        assert_eq!(series.points[0].label, "C11");
        assert_eq!(series.points[9].label, "C2");
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let data = dataset(&[("A", 2020, 25.0), ("B", 2020, 75.0), ("A", 2021, 0.0)]);
        let series = country_shares(&data);

        assert_eq!(series.points[0].label, "B");
        assert_relative_eq!(series.points[0].value, 75.0);
        let sum: f64 = series.points.iter().map(|p| p.value).sum();
        assert_relative_eq!(sum, 100.0);
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        let series = country_shares(&dataset(&[("A", 2020, 0.0)]));
        assert_eq!(series.points[0].value, 0.0);
    }

    #[test]
    fn cumulative_follows_yearly() {
        let data = dataset(&[("A", 2022, 3.0), ("A", 2020, 1.0), ("B", 2021, 2.0), ("B", 2020, 4.0)]);

        let yearly: Vec<f64> = yearly_totals(&data).points.iter().map(|p| p.value).collect();
        let cumulative = cumulative_totals(&data);

        assert_eq!(yearly, vec![5.0, 2.0, 3.0]);
        assert_eq!(
            cumulative.points.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            vec!["2020", "2021", "2022"]
        );
        assert_eq!(
            cumulative.points.iter().map(|p| p.value).collect::<Vec<_>>(),
            vec![5.0, 7.0, 10.0]
        );
    }

    #[test]
    fn chart_set_holds_four_series() {
        let set = ChartSet::from_dataset(&dataset(&[("A", 2020, 1.0)]));
        assert_eq!(set.iter().count(), 4);
        assert_eq!(set.top_countries.max_value(), Some(1.0));
    }
}
