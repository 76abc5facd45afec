//! # Bid Validation Errors
//!
//! Advisory violated-rule tags carried inside the settlement record. The
//! computation never aborts on any of these: callers decide whether to
//! reject the bid, log it, or surface it while keeping the computed figures.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Rules a proposed bid can violate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidError {
    /// Quantity not positive
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    /// Minimal auction bps not strictly greater than bonus refund bps
    #[error("Minimal auction bps must be greater than bonus refund bps")]
    InvalidBpsConfiguration,

    /// Proposed per-token price below the computed minimum
    #[error("New bid price must be greater than or equal to the minimal price")]
    BidBelowMinimum,

    /// Refund owed to the outgoing bidder meets or exceeds the new total bid
    #[error("Refund exceeds new bid amount")]
    RefundExceedsBid,

    /// Outgoing bonus per token exceeds the new bid per token; the net price
    /// is clamped to zero instead of wrapping
    #[error("Refund bonus exceeds new bid price")]
    BonusExceedsBid,
}

const MESSAGES: &[&str] = &[
    "Quantity must be greater than 0",
    "Minimal auction bps must be greater than bonus refund bps",
    "New bid price must be greater than or equal to the minimal price",
    "Refund exceeds new bid amount",
    "Refund bonus exceeds new bid price",
];

// Errors cross the interface as their message strings, matching the
// interchange format consumed by callers.
impl Serialize for BidError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BidError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let message = String::deserialize(deserializer)?;
        match message.as_str() {
            "Quantity must be greater than 0" => Ok(BidError::InvalidQuantity),
            "Minimal auction bps must be greater than bonus refund bps" => {
                Ok(BidError::InvalidBpsConfiguration)
            }
            "New bid price must be greater than or equal to the minimal price" => {
                Ok(BidError::BidBelowMinimum)
            }
            "Refund exceeds new bid amount" => Ok(BidError::RefundExceedsBid),
            "Refund bonus exceeds new bid price" => Ok(BidError::BonusExceedsBid),
            other => Err(de::Error::unknown_variant(other, MESSAGES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BidError::InvalidQuantity.to_string(),
            "Quantity must be greater than 0"
        );
        assert_eq!(
            BidError::InvalidBpsConfiguration.to_string(),
            "Minimal auction bps must be greater than bonus refund bps"
        );
        assert_eq!(
            BidError::BidBelowMinimum.to_string(),
            "New bid price must be greater than or equal to the minimal price"
        );
        assert_eq!(
            BidError::RefundExceedsBid.to_string(),
            "Refund exceeds new bid amount"
        );
    }

    #[test]
    fn test_serde_as_message_string() {
        let json = serde_json::to_string(&BidError::RefundExceedsBid).unwrap();
        assert_eq!(json, "\"Refund exceeds new bid amount\"");

        let back: BidError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BidError::RefundExceedsBid);

        assert!(serde_json::from_str::<BidError>("\"not a rule\"").is_err());
    }
}
