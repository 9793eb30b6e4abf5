//! # Canopy Ingest
//!
//! Turns delimited text into a validated `Dataset`, writes datasets back out,
//! and generates the synthetic sample used for demos.
//!
//! Parsing and validation are separate steps: `parse_csv` only checks that the
//! input is well-formed delimited text, while `validate` enforces the required
//! `Country`, `Year` and `Carbon_Emissions` columns and converts cells to
//! typed records.

pub mod csv_io;
pub mod error;
pub mod sample;
pub mod table;

pub use csv_io::{load_csv, parse_csv, read_dataset, write_csv};
pub use error::IngestError;
pub use sample::{SAMPLE_COUNTRIES, SAMPLE_YEARS, SampleConfig, generate_sample};
pub use table::{RawTable, validate};
