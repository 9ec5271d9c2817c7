//! Request extractors that report failures through `AppError`

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor. Malformed or mistyped bodies become a 400
/// `VALIDATION_ERROR` response instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
