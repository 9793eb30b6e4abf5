pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{AgentId, Sector, Trend};
pub use error::CoreError;
pub use structs::{
    COLUMN_CARBON_EMISSIONS, COLUMN_COUNTRY, COLUMN_YEAR, Dataset, EmissionRecord,
    REQUIRED_COLUMNS,
};
