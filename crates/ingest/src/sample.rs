//! Synthetic emissions data for demos.

use crate::error::IngestError;
use core_types::{Dataset, EmissionRecord};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Country labels, repeated in order across the generated rows.
pub const SAMPLE_COUNTRIES: [&str; 5] = ["USA", "China", "India", "Russia", "Japan"];

/// Year values, repeated in order across the generated rows.
pub const SAMPLE_YEARS: [i32; 5] = [2020, 2021, 2022, 2020, 2021];

/// Sample generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// Number of rows to generate.
    pub rows: usize,
    /// Inclusive lower bound of the uniform emission draw.
    pub min_emission: f64,
    /// Exclusive upper bound of the uniform emission draw.
    pub max_emission: f64,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            min_emission: 100.0,
            max_emission: 1000.0,
            seed: None,
        }
    }
}

impl SampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_range(mut self, min_emission: f64, max_emission: f64) -> Self {
        self.min_emission = min_emission;
        self.max_emission = max_emission;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn check(&self) -> Result<(), IngestError> {
        if !(self.min_emission.is_finite() && self.max_emission.is_finite()) {
            return Err(IngestError::InvalidSampleConfig(
                "emission bounds must be finite".to_string(),
            ));
        }
        if self.min_emission >= self.max_emission {
            return Err(IngestError::InvalidSampleConfig(format!(
                "min_emission ({}) must be below max_emission ({})",
                self.min_emission, self.max_emission
            )));
        }
        Ok(())
    }
}

/// Generates a synthetic dataset.
///
/// Row `i` gets country `SAMPLE_COUNTRIES[i % 5]`, year `SAMPLE_YEARS[i % 5]`
/// and an independent uniform draw in `[min_emission, max_emission)`.
pub fn generate_sample(config: &SampleConfig) -> Result<Dataset, IngestError> {
    config.check()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = (0..config.rows)
        .map(|i| EmissionRecord {
            country: SAMPLE_COUNTRIES[i % SAMPLE_COUNTRIES.len()].to_string(),
            year: SAMPLE_YEARS[i % SAMPLE_YEARS.len()],
            carbon_emissions: rng.gen_range(config.min_emission..config.max_emission),
        })
        .collect::<Dataset>();

    tracing::info!(rows = dataset.len(), seeded = config.seed.is_some(), "Generated sample dataset.");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_sample_has_expected_shape() {
        let dataset = generate_sample(&SampleConfig::default()).unwrap();

        assert_eq!(dataset.len(), 50);
        let countries: HashSet<_> = dataset.iter().map(|r| r.country.as_str()).collect();
        let years: HashSet<_> = dataset.iter().map(|r| r.year).collect();
        assert_eq!(countries.len(), 5);
        assert_eq!(years, HashSet::from([2020, 2021, 2022]));
        assert!(dataset
            .iter()
            .all(|r| (100.0..1000.0).contains(&r.carbon_emissions)));
    }

    #[test]
    fn labels_repeat_in_order() {
        let dataset = generate_sample(&SampleConfig::new().with_rows(7).with_seed(1)).unwrap();
        let records = dataset.records();

        assert_eq!(records[0].country, "USA");
        assert_eq!(records[3].country, "Russia");
        assert_eq!(records[3].year, 2020);
        assert_eq!(records[5].country, "USA");
        assert_eq!(records[6].year, 2021);
    }

    #[test]
    fn same_seed_gives_same_values() {
        let config = SampleConfig::new().with_seed(42);
        assert_eq!(
            generate_sample(&config).unwrap(),
            generate_sample(&config).unwrap()
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = SampleConfig::new().with_range(10.0, 10.0);
        assert!(matches!(
            generate_sample(&config),
            Err(IngestError::InvalidSampleConfig(_))
        ));
    }
}
