//! Error handling for the Crop Insurance Calculator
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::PolicyError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Calculation errors
    #[error("Invalid crop type: {0}")]
    InvalidCropType(String),

    #[error("Actual yield not set")]
    ActualYieldNotSet,

    #[error("Actual yield already recorded")]
    ActualYieldAlreadyRecorded,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::InvalidCropType(crop) => AppError::InvalidCropType(crop),
            PolicyError::InvalidInput { field, message } => AppError::Validation {
                field: field.to_string(),
                message: message.to_string(),
                message_hi: format!("{} का मान अमान्य है", field),
            },
            PolicyError::ActualYieldNotSet => AppError::ActualYieldNotSet,
            PolicyError::ActualYieldAlreadyRecorded => AppError::ActualYieldAlreadyRecorded,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        match errors.field_errors().keys().next() {
            Some(field) => AppError::Validation {
                field: field.to_string(),
                message: format!("Invalid value for {}", field),
                message_hi: format!("{} का मान अमान्य है", field),
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCropType(crop) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INVALID_CROP_TYPE".to_string(),
                    message_en: format!("Invalid crop type: {}", crop),
                    message_hi: format!("अमान्य फसल प्रकार: {}", crop),
                    field: Some("crop_type".to_string()),
                },
            ),
            AppError::ActualYieldNotSet => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "ACTUAL_YIELD_NOT_SET".to_string(),
                    message_en: "Actual yield has not been recorded for this policy".to_string(),
                    message_hi: "इस पॉलिसी के लिए वास्तविक उपज दर्ज नहीं की गई है".to_string(),
                    field: Some("actual_yield_quintals".to_string()),
                },
            ),
            AppError::ActualYieldAlreadyRecorded => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "ACTUAL_YIELD_ALREADY_RECORDED".to_string(),
                    message_en: "A different actual yield is already recorded for this policy"
                        .to_string(),
                    message_hi: "इस पॉलिसी के लिए वास्तविक उपज पहले ही दर्ज की जा चुकी है"
                        .to_string(),
                    field: Some("actual_yield_quintals".to_string()),
                },
            ),
            AppError::Validation { field, message, message_hi } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य इनपुट: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: format!("कॉन्फ़िगरेशन त्रुटि: {}", msg),
                    field: None,
                },
            ),
        };

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!(code = %error_detail.code, "Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_error_mapping() {
        let err: AppError = PolicyError::InvalidCropType("banana".into()).into();
        assert!(matches!(err, AppError::InvalidCropType(ref c) if c == "banana"));

        let err: AppError = PolicyError::InvalidInput {
            field: "area_hectares",
            message: "Area must be greater than zero",
        }
        .into();
        match err {
            AppError::Validation { field, message, .. } => {
                assert_eq!(field, "area_hectares");
                assert_eq!(message, "Area must be greater than zero");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidCropType("x".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::ValidationError("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ActualYieldAlreadyRecorded.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Configuration("missing currency".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
