//! # Bid Settlement
//!
//! The orchestrator of the bid pipeline: validates a proposed bid against
//! the rules, then computes the full monetary breakdown of the step. The
//! computation always runs to completion; violated rules are accumulated
//! into the result as data rather than raised, so callers have every figure
//! available even for an invalid bid.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::decimal;
use crate::errors::BidError;
use crate::rules::{bps_share, minimal_bid_per_token, minimal_buyout_per_token};
use crate::types::{AuctionTerms, ProposedBid};

/// Full monetary breakdown of one bid step.
///
/// Immutable once constructed. `errors` lists the violated rules in check
/// order; an empty list means the bid is valid. Every amount serializes as
/// an exact decimal digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidSettlement {
    /// Violated rules in check order; empty means valid
    pub errors: Vec<BidError>,

    /// Minimum per-token price this bid had to meet
    #[serde(with = "decimal")]
    pub minimal_bid_per_token: U256,
    /// Minimum per-token price qualifying as an immediate buyout
    #[serde(with = "decimal")]
    pub minimal_buyout_per_token: U256,

    /// The proposed per-token price, echoed back
    #[serde(with = "decimal")]
    pub new_bid_per_token: U256,
    /// How much the bidder pays: `refund_bonus_amount + new_amount`
    #[serde(with = "decimal")]
    pub total_bid_amount: U256,

    /// Per-token bonus owed to the bidder being outbid
    #[serde(with = "decimal")]
    pub refund_bonus_per_token: U256,
    /// Bonus the previous bidder receives
    #[serde(with = "decimal")]
    pub refund_bonus_amount: U256,
    /// Principal plus bonus returned to the bidder being outbid
    #[serde(with = "decimal")]
    pub refund_amount_to_previous_bidder: U256,

    /// Per-token price retained after funding the outgoing bonus
    #[serde(with = "decimal")]
    pub new_price_per_token: U256,
    /// Amount at stake for the new bidder
    #[serde(with = "decimal")]
    pub new_amount: U256,

    /// Per-token bonus this bidder would receive if later outbid
    #[serde(with = "decimal")]
    pub new_refund_bonus_per_token: U256,
    #[serde(with = "decimal")]
    pub new_refund_bonus_amount: U256,
    /// What this bidder receives back if later outbid
    #[serde(with = "decimal")]
    pub new_refund_amount: U256,
    /// Net gain if outbid immediately after
    #[serde(with = "decimal")]
    pub new_profit_amount: U256,

    /// Platform cut if the bid wins outright
    #[serde(with = "decimal")]
    pub protocol_fee_amount: U256,
    /// Creator cut if the bid wins outright
    #[serde(with = "decimal")]
    pub royalty_amount: U256,
    /// Seller proceeds if the bid wins outright; keeps the truncation
    /// remainder of the two bps cuts
    #[serde(with = "decimal")]
    pub lister_amount: U256,
}

impl BidSettlement {
    /// True when no validation rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compute the full settlement of one bid step.
///
/// `previous_price_per_token` is `None` on a fresh auction; it is
/// normalized to zero before entering the shared formulas.
pub fn compute_bid_amounts(
    bid: &ProposedBid,
    terms: &AuctionTerms,
    previous_price_per_token: Option<U256>,
) -> BidSettlement {
    let previous = previous_price_per_token.unwrap_or(U256::ZERO);

    let total_bid_amount = bid.price_per_token.saturating_mul(bid.quantity);

    let mut errors = Vec::new();

    if bid.quantity == U256::ZERO {
        errors.push(BidError::InvalidQuantity);
    }
    if terms.minimal_auction_bps <= terms.bonus_refund_bps {
        errors.push(BidError::InvalidBpsConfiguration);
    }

    let minimal_bid = minimal_bid_per_token(
        previous,
        terms.reserve_price_per_token,
        terms.minimal_auction_bps,
    );
    let minimal_buyout = minimal_buyout_per_token(
        previous,
        terms.buyout_price_per_token,
        terms.minimal_auction_bps,
        terms.bonus_refund_bps,
    );

    if bid.price_per_token < minimal_bid {
        errors.push(BidError::BidBelowMinimum);
    }

    let refund_bonus_per_token = bps_share(previous, terms.bonus_refund_bps);
    let refund_bonus_amount = bid.quantity.saturating_mul(refund_bonus_per_token);
    let refund_amount_to_previous_bidder = bid
        .quantity
        .saturating_mul(previous)
        .saturating_add(refund_bonus_amount);

    if refund_amount_to_previous_bidder >= total_bid_amount {
        errors.push(BidError::RefundExceedsBid);
    }

    // Clamp instead of wrapping when the outgoing bonus exceeds the bid per
    // token. Unreachable while the bps invariant holds and the bid meets
    // the minimum.
    let new_price_per_token = match bid.price_per_token.checked_sub(refund_bonus_per_token) {
        Some(price) => price,
        None => {
            errors.push(BidError::BonusExceedsBid);
            U256::ZERO
        }
    };
    let new_amount = new_price_per_token.saturating_mul(bid.quantity);

    let new_refund_bonus_per_token = bps_share(new_price_per_token, terms.bonus_refund_bps);
    let new_refund_bonus_amount = bid.quantity.saturating_mul(new_refund_bonus_per_token);

    let new_refund_amount = new_amount.saturating_add(new_refund_bonus_amount);
    // A bid that would lose money on an immediate outbid is only reachable
    // through a bps misconfiguration reported above; the unsigned record
    // floors the loss at zero.
    let new_profit_amount = new_refund_amount.saturating_sub(total_bid_amount);

    let protocol_fee_amount = bps_share(new_amount, terms.protocol_fee_bps);
    let royalty_amount = bps_share(new_amount, terms.royalty_bps);
    let lister_amount = new_amount
        .saturating_sub(protocol_fee_amount)
        .saturating_sub(royalty_amount);

    BidSettlement {
        errors,

        minimal_bid_per_token: minimal_bid,
        minimal_buyout_per_token: minimal_buyout,

        new_bid_per_token: bid.price_per_token,
        total_bid_amount,

        refund_bonus_per_token,
        refund_bonus_amount,
        refund_amount_to_previous_bidder,

        new_price_per_token,
        new_amount,

        new_refund_bonus_per_token,
        new_refund_bonus_amount,
        new_refund_amount,
        new_profit_amount,

        protocol_fee_amount,
        royalty_amount,
        lister_amount,
    }
}
