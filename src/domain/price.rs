use crate::error::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary price per unit.
///
/// Wrapper around `rust_decimal::Decimal` so that a negative price can never
/// reach the catalog. A price of zero is legitimate (a free item).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, EngineError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(EngineError::Validation(
                "price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// A positive unit count for a cost calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, EngineError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(EngineError::Validation(
                "quantity must be positive".to_string(),
            ))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One catalog entry: a case-sensitive item name and its unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub name: String,
    pub price: Price,
}

impl PriceEntry {
    /// Validates both fields; invalid input is rejected before any store
    /// mutation can happen.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, EngineError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::Validation(
                "item name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            price: Price::new(price)?,
        })
    }
}
