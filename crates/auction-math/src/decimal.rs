//! # Decimal String Codec
//!
//! Serde codec serializing `U256` values as exact decimal digit strings,
//! used via `#[serde(with = "decimal")]` on every monetary field. Amounts
//! cross the interface as strings so full precision survives transport
//! through formats (e.g. JSON) whose native numeric type cannot hold 256
//! bits without loss.

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let digits = String::deserialize(deserializer)?;
    digits.parse::<U256>().map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::decimal")]
        amount: U256,
    }

    #[test]
    fn test_decimal_round_trip() {
        // Larger than u128, still exact
        let wrapper = Wrapper {
            amount: U256::from(u128::MAX) * U256::from(1_000_000u64),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(
            json,
            "{\"amount\":\"340282366920938463463374607431768211455000000\"}"
        );
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Wrapper>("{\"amount\":\"12a4\"}").is_err());
    }
}
