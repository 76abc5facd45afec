//! # Auction Terms and Bids
//!
//! Value structs fed into the settlement computation. Constructed fresh per
//! call, passed by reference, never mutated.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::decimal;

/// Configuration of a single auction listing.
///
/// Callers should uphold `minimal_auction_bps > bonus_refund_bps`; a
/// violation is reported in the settlement record, not blocked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionTerms {
    /// Minimum opening price per token when there is no previous bid
    #[serde(with = "decimal")]
    pub reserve_price_per_token: U256,
    /// Price per token that ends the auction immediately
    #[serde(with = "decimal")]
    pub buyout_price_per_token: U256,
    /// Minimum raise over the previous bid, in basis points
    #[serde(with = "decimal")]
    pub minimal_auction_bps: U256,
    /// Share of the outgoing price paid back as an outbid bonus, in basis points
    #[serde(with = "decimal")]
    pub bonus_refund_bps: U256,
    /// Creator cut of the winning amount, in basis points
    #[serde(with = "decimal")]
    pub royalty_bps: U256,
    /// Platform cut of the winning amount, in basis points
    #[serde(with = "decimal")]
    pub protocol_fee_bps: U256,
}

/// A proposed bid on a listing.
///
/// `quantity > 0` is a caller-upheld invariant; a zero quantity is reported
/// in the settlement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedBid {
    /// Offered price per token
    #[serde(with = "decimal")]
    pub price_per_token: U256,
    /// Number of tokens bid on
    #[serde(with = "decimal")]
    pub quantity: U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_serde_camel_case_strings() {
        let terms = AuctionTerms {
            reserve_price_per_token: U256::from(100u64),
            buyout_price_per_token: U256::from(1000u64),
            minimal_auction_bps: U256::from(500u64),
            bonus_refund_bps: U256::from(100u64),
            royalty_bps: U256::from(250u64),
            protocol_fee_bps: U256::from(50u64),
        };

        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["reservePricePerToken"], "100");
        assert_eq!(json["minimalAuctionBps"], "500");

        let back: AuctionTerms = serde_json::from_value(json).unwrap();
        assert_eq!(back, terms);
    }
}
