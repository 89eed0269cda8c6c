use thiserror::Error;

/// Transport-level failure talking to the products API.
///
/// The UI does not distinguish between variants; every one of them ends up as
/// the generic service error notification. They exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}
