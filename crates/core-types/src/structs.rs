use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const COLUMN_COUNTRY: &str = "Country";
pub const COLUMN_YEAR: &str = "Year";
pub const COLUMN_CARBON_EMISSIONS: &str = "Carbon_Emissions";

/// The columns every emissions table must carry, in canonical output order.
pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_COUNTRY, COLUMN_YEAR, COLUMN_CARBON_EMISSIONS];

/// A single (country, year, emissions) observation.
///
/// Serde names match the tabular column headers so a record can be written
/// straight to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Emission units. Expected to be non-negative, but not enforced.
    #[serde(rename = "Carbon_Emissions")]
    pub carbon_emissions: f64,
}

impl EmissionRecord {
    /// Creates a record, rejecting an empty country label.
    pub fn new(
        country: impl Into<String>,
        year: i32,
        carbon_emissions: f64,
    ) -> Result<Self, CoreError> {
        let country = country.into();
        if country.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                COLUMN_COUNTRY.to_string(),
                "country label must not be empty".to_string(),
            ));
        }
        Ok(Self {
            country,
            year,
            carbon_emissions,
        })
    }
}

/// An ordered collection of emission records.
///
/// No uniqueness is enforced on (country, year); duplicate pairs are summed
/// by the aggregations rather than deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<EmissionRecord>,
}

impl Dataset {
    pub fn new(records: Vec<EmissionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmissionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `carbon_emissions` over every record.
    pub fn total_emissions(&self) -> f64 {
        self.records.iter().map(|r| r.carbon_emissions).sum()
    }

    pub fn into_records(self) -> Vec<EmissionRecord> {
        self.records
    }
}

impl FromIterator<EmissionRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = EmissionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a EmissionRecord;
    type IntoIter = std::slice::Iter<'a, EmissionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
