use core_types::{Sector, Trend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pounds of CO₂ one tree is assumed to absorb per year.
pub const CO2_LBS_PER_TREE_PER_YEAR: i64 = 48;

/// Conversion from emission units to pounds.
pub const LBS_PER_EMISSION_UNIT: f64 = 1000.0;

/// Forest acreage occupied by one tree.
pub const ACRES_PER_TREE: f64 = 0.0006;

/// Summed emissions for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    pub total: f64,
}

/// Summed emissions for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: f64,
}

/// Inclusive range of years present in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    pub first: i32,
    pub last: i32,
}

/// Descriptive statistics over a full dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub record_count: usize,
    /// Number of distinct country labels.
    pub total_countries: usize,
    pub distinct_years: usize,
    /// `None` for an empty dataset.
    pub year_span: Option<YearSpan>,
    pub total_emissions: f64,
    /// Mean emissions per record, 0 for an empty dataset.
    pub mean_emissions: f64,
    /// Largest single-record emission, 0 for an empty dataset.
    pub max_emission: f64,
    /// Up to five countries by summed emissions, descending.
    ///
    /// Tied sums keep first-encountered order; compare tied entries as a set.
    pub top_emitters: Vec<CountryTotal>,
}

impl Summary {
    /// Display form of the year span, e.g. `"2020 - 2022"`.
    pub fn year_range(&self) -> String {
        match self.year_span {
            Some(span) => format!("{} - {}", span.first, span.last),
            None => "n/a".to_string(),
        }
    }
}

/// Direction and percentage change between the first and last yearly totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Percent change, e.g. 50.0 for +50%.
    pub growth_rate: f64,
    pub trend: Trend,
}

impl TrendResult {
    pub fn stable() -> Self {
        Self {
            growth_rate: 0.0,
            trend: Trend::Stable,
        }
    }
}

/// How many trees would offset a given emission total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeImpact {
    pub trees_needed: i64,
    pub forest_area_acres: f64,
    #[serde(rename = "annual_absorption")]
    pub annual_absorption_lbs: i64,
}

impl TreeImpact {
    /// Largest tree count whose annual absorption still fits in an `i64`.
    pub const MAX_TREES: i64 = i64::MAX / CO2_LBS_PER_TREE_PER_YEAR;

    /// `trees_needed = trunc(total * 1000 / 48)`; acreage and absorption follow from it.
    ///
    /// The count is clamped to `±MAX_TREES`, so `annual_absorption_lbs` is
    /// always exactly `trees_needed * 48`.
    pub fn from_total_emissions(total_emissions: f64) -> Self {
        let raw = (total_emissions * LBS_PER_EMISSION_UNIT / CO2_LBS_PER_TREE_PER_YEAR as f64).trunc();
        let trees_needed = if raw.is_nan() {
            0
        } else if raw >= Self::MAX_TREES as f64 {
            Self::MAX_TREES
        } else if raw <= -(Self::MAX_TREES as f64) {
            -Self::MAX_TREES
        } else {
            raw as i64
        };
        Self {
            trees_needed,
            forest_area_acres: trees_needed as f64 * ACRES_PER_TREE,
            annual_absorption_lbs: trees_needed * CO2_LBS_PER_TREE_PER_YEAR,
        }
    }
}

/// Sector → priority label, iterated from most to least critical.
pub type SectorPriorities = BTreeMap<Sector, String>;

/// The analysis shown on the dashboard and offered as a JSON download.
///
/// Serialized field names are part of the download format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub tree_impact: TreeImpact,
    pub sector_priorities: SectorPriorities,
    /// True only when the rich, multi-agent path produced the result.
    #[serde(rename = "coral_agents_engaged")]
    pub agents_engaged: bool,
}
