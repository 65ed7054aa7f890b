use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API discovery failed: {0}")]
    ApiDiscovery(String),

    #[error("API not found in catalog: {0}")]
    ApiNotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
