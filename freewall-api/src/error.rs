use anyhow::Context;

use crate::MAX_MESSAGE_CHARS;

/// Rejections raised before anything is sent to the store
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is {0} characters long, the limit is {}", MAX_MESSAGE_CHARS)]
    MessageTooLong(usize),

    #[error("Invalid image type {0:?}, only image/jpeg and image/png are accepted")]
    InvalidImageType(String),
}

/// Error body returned by the store on non-success responses
///
/// Record endpoints answer with `message`, `code`, `details` and `hint`, the
/// object storage with `statusCode`, `error` and `message`. Only `message` is
/// common to both.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreError {
    pub fn parse(body: &[u8]) -> anyhow::Result<StoreError> {
        serde_json::from_slice(body).context("parsing store error contents")
    }
}
