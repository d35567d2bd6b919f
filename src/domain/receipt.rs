use crate::error::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable record of one completed checkout computation.
///
/// `change_due` is always `amount_given - total_cost`; construction rejects
/// underpayment, so a receipt never carries negative change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub total_cost: Decimal,
    pub amount_given: Decimal,
    pub change_due: Decimal,
    pub cashier: String,
}

impl Receipt {
    pub fn new(
        cashier: impl Into<String>,
        total_cost: Decimal,
        amount_given: Decimal,
    ) -> Result<Self, EngineError> {
        let cashier = cashier.into();
        if cashier.trim().is_empty() {
            return Err(EngineError::Validation(
                "cashier name must not be empty".to_string(),
            ));
        }
        if total_cost < Decimal::ZERO || amount_given < Decimal::ZERO {
            return Err(EngineError::Validation(
                "monetary amounts must not be negative".to_string(),
            ));
        }
        if amount_given < total_cost {
            return Err(EngineError::InsufficientPayment {
                given: amount_given,
                required: total_cost,
            });
        }
        Ok(Self {
            change_due: amount_given - total_cost,
            total_cost,
            amount_given,
            cashier,
        })
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Cost: ${:.2}", self.total_cost.round_dp(2))?;
        writeln!(f, "Amount Given: ${:.2}", self.amount_given.round_dp(2))?;
        writeln!(f, "Change Due: ${:.2}", self.change_due.round_dp(2))?;
        write!(f, "Cashier: {}", self.cashier)
    }
}
