use thiserror::Error;

use crate::models::{SeatLocation, SeatRange};

/// Ошибки рассадки. Фатальна только `Config`, остальные гасятся
/// оркестратором на границе отдельного запроса или токена.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot parse seat token `{0}`")]
    Parse(String),

    #[error("invalid seat `{token}`: {reason}")]
    Validation { token: String, reason: String },

    #[error("seat {location} is outside the {rows}x{columns} grid")]
    OutOfBounds {
        location: SeatLocation,
        rows: usize,
        columns: usize,
    },

    #[error("seat {0} is already reserved")]
    AlreadyReserved(SeatLocation),

    #[error("invalid seat range {0}")]
    InvalidRange(SeatRange),

    #[error("no block of {0} adjacent seats is available")]
    NoCandidate(usize),

    #[error("invalid seat request `{0}`")]
    InvalidRequest(String),

    #[error("operation `{operation}` is not allowed in phase {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("cannot render output: {0}")]
    Render(String),
}

impl SeatingError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SeatingError::Config(_))
    }

    pub fn validation(token: &str, reason: impl Into<String>) -> Self {
        SeatingError::Validation {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;
