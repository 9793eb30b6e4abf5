use thiserror::Error;

/// Failures inside the rich analysis path.
///
/// These never reach callers of `MetricsEngine::build_analysis`; they select
/// the fallback path instead.
#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),
}
