use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid access key")]
    InvalidAccessKey,

    #[error("Failed to construct request URL")]
    InvalidRequest,

    #[error("Failed to send request")]
    Network,

    #[error("HTTP error {0}")]
    Status(StatusCode),

    #[error("Failed to parse response")]
    Decode,
}
