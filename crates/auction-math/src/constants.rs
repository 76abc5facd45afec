//! # Auction Constants
//!
//! Basis-point constants shared by the bid rules and the settlement.

use alloy_primitives::U256;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: U256 = U256::from_limbs([10_000, 0, 0, 0]);

/// Maximum percentage in basis points (100%)
pub const MAX_BPS: U256 = BPS_DENOMINATOR;
