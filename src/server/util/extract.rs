//! Extractors whose rejections use the standard error envelope.
//!
//! Axum's built-in `Json`, `Path` and `Query` reject with plain text bodies. These
//! wrappers route the rejection through `AppError` so malformed input answers with
//! `{"status": "Error", "error": "..."}` like every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
