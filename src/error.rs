//! Error types for the planning engine

use thiserror::Error;

/// Failures raised by degenerate calculation input or by batch I/O
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("time horizon must not be negative (got {years} years)")]
    NegativeHorizon { years: f64 },

    #[error("schedule horizon of {years} years exceeds the {max_years}-year limit")]
    HorizonTooLong { years: f64, max_years: f64 },

    #[error("goal time horizon must be greater than zero years")]
    ZeroHorizon,

    #[error("monthly rate {monthly_rate} is at or below -100%")]
    RateOutOfRange { monthly_rate: f64 },

    #[error("price at period {index} must be positive (got {price})")]
    InvalidPrice { index: usize, price: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Reject negative horizons before any exponentiation happens
pub(crate) fn check_horizon(years: f64) -> Result<(), PlanningError> {
    if years < 0.0 {
        return Err(PlanningError::NegativeHorizon { years });
    }
    Ok(())
}
