use crate::metric::Metric;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: Division by zero encountered in metric '{metric}' for fiscal year {year}")]
    DivisionByZero { metric: Metric, year: u16 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
