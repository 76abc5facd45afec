//! # Bid Rules
//!
//! Per-token price thresholds for an incremental auction: the minimum a new
//! bid must meet, and the minimum that qualifies as an immediate buyout.
//! Both rules are pure and total, with no error path. "No previous bid" is
//! represented by a zero previous price; callers normalize an absent value
//! to zero before entering these formulas.

use alloy_primitives::U256;

use crate::constants::BPS_DENOMINATOR;

/// Basis-point share of an amount: `amount * bps / 10_000`, truncating
/// toward zero.
pub(crate) fn bps_share(amount: U256, bps: U256) -> U256 {
    amount.saturating_mul(bps) / BPS_DENOMINATOR
}

/// Minimum per-token price a new bid must meet.
///
/// With a standing bid this is the previous price raised by
/// `minimal_auction_bps`; on a fresh auction it is the reserve price
/// verbatim.
pub fn minimal_bid_per_token(
    previous_price_per_token: U256,
    reserve_price_per_token: U256,
    minimal_auction_bps: U256,
) -> U256 {
    if previous_price_per_token > U256::ZERO {
        previous_price_per_token
            .saturating_add(bps_share(previous_price_per_token, minimal_auction_bps))
    } else {
        reserve_price_per_token
    }
}

/// Minimum per-token price that qualifies as an immediate buyout.
///
/// With a standing bid the buyout must cover the listed buyout price plus
/// the outgoing bidder's bonus, and never undercut what an ordinary minimal
/// raise would already demand; the larger of the two wins. On a fresh
/// auction it is the buyout price verbatim.
pub fn minimal_buyout_per_token(
    previous_price_per_token: U256,
    buyout_price_per_token: U256,
    minimal_auction_bps: U256,
    bonus_refund_bps: U256,
) -> U256 {
    if previous_price_per_token > U256::ZERO {
        let from_buyout_price = buyout_price_per_token
            .saturating_add(bps_share(previous_price_per_token, bonus_refund_bps));
        let from_minimal_raise = previous_price_per_token
            .saturating_add(bps_share(previous_price_per_token, minimal_auction_bps));
        from_buyout_price.max(from_minimal_raise)
    } else {
        buyout_price_per_token
    }
}
