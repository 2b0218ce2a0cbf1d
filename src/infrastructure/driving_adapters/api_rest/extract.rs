//! Request extractors

use axum::extract::FromRequest;

use crate::shared::errors::ApiError;

/// `axum::Json` whose rejections render as the standard error body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
