use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested catalog operation as plain data.
///
/// The envelope serializes as `{"kind": ..., "parameters": {...}}`; this is
/// the closed set of operation kinds the dispatcher accepts. Only data
/// crosses the remote boundary, never behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "parameters", rename_all = "camelCase")]
pub enum Command {
    AddPrice { name: String, price: Decimal },
    UpdatePrice { name: String, price: Decimal },
    DeletePrice { name: String },
    CalculateCost { name: String, quantity: u32 },
}

/// Successful result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CommandOutput {
    /// A mutation was applied.
    Applied,
    /// Total cost computed by `CalculateCost`.
    Cost(Decimal),
}

/// Outcome of a cost calculation.
///
/// An explicit sum type instead of the legacy non-positive numeric sentinel,
/// which could not distinguish a missing item from a legitimately free one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostOutcome {
    Found(Decimal),
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_envelope_shape() {
        let cmd = Command::AddPrice {
            name: "apple".to_string(),
            price: dec!(50.0),
        };
        let json: serde_json::Value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["kind"], "addPrice");
        assert_eq!(json["parameters"]["name"], "apple");
    }

    #[test]
    fn test_envelope_round_trip() {
        let cmd = Command::CalculateCost {
            name: "banana".to_string(),
            quantity: 3,
        };
        let text = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let text = r#"{"kind":"dropCatalog","parameters":{}}"#;
        assert!(serde_json::from_str::<Command>(text).is_err());
    }
}
