use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `"Error"`.
    pub status: String,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            error: error.into(),
        }
    }
}

/// Body returned by operations that have nothing else to report, such as deletes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Always `"OK"`.
    pub status: String,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            message: message.into(),
        }
    }
}
