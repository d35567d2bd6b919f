use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure taxonomy shared by the engine, the wire protocol and the client.
///
/// Every engine-side failure is returned as one of these variants; nothing
/// panics across the remote boundary and error text never carries internal
/// state.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("no price recorded for '{0}'")]
    NotFound(String),
    #[error("insufficient payment: given {given}, required {required}")]
    InsufficientPayment {
        given: rust_decimal::Decimal,
        required: rust_decimal::Decimal,
    },
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
