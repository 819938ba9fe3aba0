use chrono::NaiveDate;
use thiserror::Error;

/// Failure taxonomy for one consultation.
///
/// Contract violations inside the interval merger are assertions, not
/// variants: unsorted merger input is a bug in the caller, and re-sorting
/// or reporting it as a runtime error would hide that bug.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The upstream forecast request failed (transport error or non-2xx).
    #[error("forecast request failed: {0}")]
    Fetch(String),

    /// A timestamp or payload field is missing or malformed.
    #[error("malformed forecast payload: {0}")]
    Parse(String),

    /// No daily record matches the requested date.
    #[error("no forecast data for {0}")]
    NotFound(NaiveDate),
}

impl OracleError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
