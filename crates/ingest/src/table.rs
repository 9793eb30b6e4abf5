use crate::error::IngestError;
use core_types::{
    COLUMN_CARBON_EMISSIONS, COLUMN_COUNTRY, COLUMN_YEAR, Dataset, EmissionRecord,
    REQUIRED_COLUMNS,
};

/// Untyped tabular data: a header row plus string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Validates a raw table into a typed `Dataset`.
///
/// The three required columns may appear in any order; extra columns are
/// ignored. A missing column yields `MissingColumns` listing the headers that
/// were present. A cell that cannot be converted yields `MalformedInput`
/// naming its line and column.
pub fn validate(raw: &RawTable) -> Result<Dataset, IngestError> {
    let (Some(country_idx), Some(year_idx), Some(emissions_idx)) = (
        raw.column_index(COLUMN_COUNTRY),
        raw.column_index(COLUMN_YEAR),
        raw.column_index(COLUMN_CARBON_EMISSIONS),
    ) else {
        tracing::warn!(found = ?raw.headers(), required = ?REQUIRED_COLUMNS, "Rejected table with missing columns.");
        return Err(IngestError::MissingColumns {
            found: raw.headers().to_vec(),
        });
    };

    let mut records = Vec::with_capacity(raw.len());
    for (i, row) in raw.rows().iter().enumerate() {
        // Line 1 is the header row.
        let line = i + 2;
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").trim();

        let year = parse_year(cell(year_idx)).ok_or_else(|| {
            malformed_cell(line, COLUMN_YEAR, cell(year_idx), "expected an integer year")
        })?;

        let emissions = parse_emissions(cell(emissions_idx)).ok_or_else(|| {
            malformed_cell(
                line,
                COLUMN_CARBON_EMISSIONS,
                cell(emissions_idx),
                "expected a finite number",
            )
        })?;

        let record = EmissionRecord::new(cell(country_idx), year, emissions).map_err(|_| {
            malformed_cell(line, COLUMN_COUNTRY, cell(country_idx), "country must not be empty")
        })?;
        records.push(record);
    }

    tracing::debug!(records = records.len(), "Validated emissions table.");
    Ok(Dataset::new(records))
}

/// Accepts plain integers and float literals with no fractional part (`2020.0`).
fn parse_year(cell: &str) -> Option<i32> {
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn parse_emissions(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn malformed_cell(line: usize, column: &str, value: &str, reason: &str) -> IngestError {
    IngestError::MalformedInput(format!(
        "line {}: column '{}' has invalid value '{}' ({})",
        line, column, value, reason
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn missing_year_reports_found_columns() {
        let raw = table(&["Country", "Carbon_Emissions"], &[&["USA", "10"]]);

        let mut found = match validate(&raw) {
            Err(IngestError::MissingColumns { found }) => found,
            other => panic!("expected MissingColumns, got {other:?}"),
        };
        found.sort();
        assert_eq!(found, vec!["Carbon_Emissions".to_string(), "Country".to_string()]);
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let raw = table(&["country", "Year", "Carbon_Emissions"], &[]);
        assert!(matches!(validate(&raw), Err(IngestError::MissingColumns { .. })));
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let raw = table(
            &["Region", "Carbon_Emissions", "Year", "Country"],
            &[&["NA", "120.5", "2020", "USA"], &["AS", "80", "2021.0", "Japan"]],
        );

        let dataset = validate(&raw).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].country, "USA");
        assert_eq!(dataset.records()[0].carbon_emissions, 120.5);
        assert_eq!(dataset.records()[1].year, 2021);
    }

    #[test]
    fn unparseable_cells_are_malformed() {
        let raw = table(&["Country", "Year", "Carbon_Emissions"], &[&["USA", "twenty", "1"]]);
        assert!(matches!(
            validate(&raw),
            Err(IngestError::MalformedInput(msg)) if msg.contains("line 2") && msg.contains("Year")
        ));

        let raw = table(&["Country", "Year", "Carbon_Emissions"], &[&["", "2020", "1"]]);
        assert!(matches!(validate(&raw), Err(IngestError::MalformedInput(_))));

        let raw = table(&["Country", "Year", "Carbon_Emissions"], &[&["USA", "2020", "NaN"]]);
        assert!(matches!(validate(&raw), Err(IngestError::MalformedInput(_))));
    }

    #[test]
    fn header_only_table_is_an_empty_dataset() {
        let raw = table(&["Country", "Year", "Carbon_Emissions"], &[]);
        assert!(validate(&raw).unwrap().is_empty());
    }
}
