//! # Auction Math
//!
//! Monetary mechanics of a single incremental ("English") auction bid step.
//!
//! Given the previous winning bid (if any), the auction terms and a proposed
//! new bid, [`compute_bid_amounts`] derives every downstream amount: the
//! minimum acceptable bid, the minimum buyout price, the refund owed to the
//! outbid party (principal + bonus), the net price retained by the new
//! bidder, the amounts the new bidder would receive if later outbid, and the
//! fee/royalty/seller split if the bid wins outright.
//!
//! All arithmetic is unsigned 256-bit integer math over basis-point ratios;
//! no floating point is involved anywhere. Every function is pure and
//! stateless: validation failures are accumulated into the result record
//! rather than raised, so callers always get the full figures back.

pub mod constants;
pub mod decimal;
pub mod errors;
pub mod rules;
pub mod settlement;
pub mod types;

// Re-export the public surface
pub use errors::BidError;
pub use rules::{minimal_bid_per_token, minimal_buyout_per_token};
pub use settlement::{compute_bid_amounts, BidSettlement};
pub use types::{AuctionTerms, ProposedBid};

// The integer type every monetary and quantity value flows through
pub use alloy_primitives::U256;
