use cuturl_core::ShortenResult;
use thiserror::Error;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ShortenCompleted {
        request_id: RequestId,
        result: Result<ShortenResult, ShortenError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("API token is not configured")]
    Configuration,
    /// Non-success status; carries the provider's message when it sent one.
    #[error("{0}")]
    RemoteService(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response from shortening service: {0}")]
    InvalidResponse(String),
}
