use crate::error::IngestError;
use crate::table::{RawTable, validate};
use core_types::{Dataset, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Parses delimited text into a `RawTable`.
///
/// Any decoding problem (invalid UTF-8, ragged rows, no header row) is reported
/// as `MalformedInput`; column requirements are left to `validate`.
pub fn parse_csv<R: Read>(reader: R) -> Result<RawTable, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| IngestError::MalformedInput(e.to_string()))?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MalformedInput(
            "input has no header row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| IngestError::MalformedInput(e.to_string()))?;
        rows.push(record.iter().map(String::from).collect());
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "Parsed delimited input.");
    Ok(RawTable::new(headers, rows))
}

/// Parses and validates delimited text in one step.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let raw = parse_csv(reader)?;
    validate(&raw)
}

/// Reads and validates a CSV file from disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = read_dataset(file)?;
    tracing::info!(path = %path.display(), records = dataset.len(), "Loaded emissions dataset.");
    Ok(dataset)
}

/// Writes a dataset as CSV with the canonical `Country,Year,Carbon_Emissions` header.
///
/// The header is written even when the dataset is empty.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<(), IngestError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REQUIRED_COLUMNS)?;
    for record in dataset {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
