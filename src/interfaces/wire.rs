//! Wire types for the newline-delimited JSON protocol.
//!
//! Requests carry plain data only; the server-side dispatcher decides what
//! runs. Field names follow the form parameters the legacy bridges send
//! (`amountGiven`, `totalCost`, ...).

use crate::domain::command::Command;
use crate::domain::receipt::Receipt;
use crate::error::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One inbound request line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "parameters", rename_all = "camelCase")]
pub enum Request {
    /// Generic envelope entry point.
    Execute(Command),
    #[serde(rename_all = "camelCase")]
    GenerateReceipt {
        cashier: String,
        total_cost: Decimal,
        amount_given: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    Checkout {
        name: String,
        quantity: u32,
        cashier: String,
        amount_given: Decimal,
    },
}

/// One outbound response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Response {
    /// A mutation was applied.
    Ok,
    Cost(Decimal),
    Receipt(Receipt),
    Error(WireError),
}

/// Typed failure crossing the wire, mirroring [`EngineError`] without the
/// transport-only variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum WireError {
    Validation { message: String },
    NotFound { name: String },
    #[serde(rename_all = "camelCase")]
    InsufficientPayment { given: Decimal, required: Decimal },
    Unavailable { message: String },
    Protocol { message: String },
}

impl From<&EngineError> for WireError {
    fn from(error: &EngineError) -> Self {
        match error {
            EngineError::Validation(message) => WireError::Validation {
                message: message.clone(),
            },
            EngineError::NotFound(name) => WireError::NotFound { name: name.clone() },
            EngineError::InsufficientPayment { given, required } => {
                WireError::InsufficientPayment {
                    given: *given,
                    required: *required,
                }
            }
            EngineError::ServiceUnavailable(message) => WireError::Unavailable {
                message: message.clone(),
            },
            EngineError::Protocol(message) => WireError::Protocol {
                message: message.clone(),
            },
            // Never leak internal failure detail to remote callers.
            EngineError::Io(_) | EngineError::Json(_) => WireError::Protocol {
                message: "internal error".to_string(),
            },
        }
    }
}

impl From<WireError> for EngineError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::Validation { message } => EngineError::Validation(message),
            WireError::NotFound { name } => EngineError::NotFound(name),
            WireError::InsufficientPayment { given, required } => {
                EngineError::InsufficientPayment { given, required }
            }
            WireError::Unavailable { message } => EngineError::ServiceUnavailable(message),
            WireError::Protocol { message } => EngineError::Protocol(message),
        }
    }
}
