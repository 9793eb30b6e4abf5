//! Grouping primitives shared by the engine and the chart series.

use crate::report::{CountryTotal, YearTotal};
use core_types::Dataset;
use std::collections::{BTreeMap, HashMap};

/// Sums emissions per country, in the order each country first appears.
pub fn totals_by_country(dataset: &Dataset) -> Vec<CountryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CountryTotal> = Vec::new();

    for record in dataset {
        match index.get(record.country.as_str()).copied() {
            Some(i) => totals[i].total += record.carbon_emissions,
            None => {
                index.insert(record.country.as_str(), totals.len());
                totals.push(CountryTotal {
                    country: record.country.clone(),
                    total: record.carbon_emissions,
                });
            }
        }
    }

    totals
}

/// Sums emissions per year, ascending by year.
pub fn totals_by_year(dataset: &Dataset) -> Vec<YearTotal> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for record in dataset {
        *by_year.entry(record.year).or_insert(0.0) += record.carbon_emissions;
    }

    by_year
        .into_iter()
        .map(|(year, total)| YearTotal { year, total })
        .collect()
}

/// Country totals sorted descending by sum.
///
/// The sort is stable, so tied sums stay in first-encountered order.
pub fn ranked_countries(dataset: &Dataset) -> Vec<CountryTotal> {
    let mut totals = totals_by_country(dataset);
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::EmissionRecord;

    fn dataset(rows: &[(&str, i32, f64)]) -> Dataset {
        rows.iter()
            .map(|&(c, y, e)| EmissionRecord::new(c, y, e).unwrap())
            .collect()
    }

    #[test]
    fn country_totals_keep_first_seen_order() {
        let data = dataset(&[("India", 2020, 1.0), ("USA", 2020, 5.0), ("India", 2021, 2.0)]);
        let totals = totals_by_country(&data);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].country, "India");
        assert_eq!(totals[0].total, 3.0);
        assert_eq!(totals[1].country, "USA");
    }

    #[test]
    fn year_totals_are_ascending_and_summed() {
        let data = dataset(&[("A", 2022, 1.0), ("B", 2020, 2.0), ("C", 2022, 4.0)]);
        let totals = totals_by_year(&data);

        assert_eq!(
            totals,
            vec![
                YearTotal { year: 2020, total: 2.0 },
                YearTotal { year: 2022, total: 5.0 },
            ]
        );
    }

    #[test]
    fn ranking_is_descending_and_stable_on_ties() {
        let data = dataset(&[("A", 2020, 10.0), ("B", 2020, 30.0), ("C", 2020, 10.0)]);
        let ranked: Vec<_> = ranked_countries(&data)
            .into_iter()
            .map(|c| c.country)
            .collect();

        assert_eq!(ranked, vec!["B", "A", "C"]);
    }
}
