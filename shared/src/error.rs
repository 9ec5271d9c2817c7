//! Errors raised by the premium and claim calculations

use thiserror::Error;

/// Calculation failures. Every variant is a user-correctable input problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid crop type: {0}")]
    InvalidCropType(String),

    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: &'static str,
    },

    #[error("Actual yield not set")]
    ActualYieldNotSet,

    #[error("Actual yield has already been recorded for this policy")]
    ActualYieldAlreadyRecorded,
}

impl PolicyError {
    pub(crate) fn invalid(field: &'static str, message: &'static str) -> Self {
        PolicyError::InvalidInput { field, message }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::InvalidCropType(_) => "INVALID_CROP_TYPE",
            PolicyError::InvalidInput { .. } => "INVALID_INPUT",
            PolicyError::ActualYieldNotSet => "ACTUAL_YIELD_NOT_SET",
            PolicyError::ActualYieldAlreadyRecorded => "ACTUAL_YIELD_ALREADY_RECORDED",
        }
    }
}

pub type PolicyResult<T> = Result<T, PolicyError>;
