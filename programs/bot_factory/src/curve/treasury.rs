//! # Treasury Fee Split
//!
//! Every ticket sale is decomposed into three parts:
//!
//! ```text
//! protocol = price * PROTOCOL_FEE_BPS / 10000      (-> factory)
//! creator  = price * CREATOR_FEE_BPS  / 10000      (-> bot creator)
//! pool     = price - protocol - creator            (stays with the bot)
//! ```
//!
//! Integer division truncates toward zero and the pool absorbs all of the
//! truncation dust, so the three parts always sum to `price` exactly.
//! No lamport is created or lost by the split.

use anchor_lang::prelude::*;

/// Errors specific to the fee split
#[error_code]
pub enum TreasuryError {
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Combined fee exceeds the full price")]
    FeeExceedsPrice,
}

/// Protocol share of every sale, in basis points (15%)
pub const PROTOCOL_FEE_BPS: u64 = 1500;

/// Creator share of every sale, in basis points (15%)
pub const CREATOR_FEE_BPS: u64 = 1500;

/// Basis-point denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Exact decomposition of a sale price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Share owed to the factory treasury
    pub protocol: u64,
    /// Share owed to the bot's creator
    pub creator: u64,
    /// Remainder retained by the bot itself
    pub pool: u64,
}

/// Split `price` into protocol, creator, and pool shares.
///
/// Invariant: `protocol + creator + pool == price`.
pub fn split_fee(price: u64, protocol_bps: u64, creator_bps: u64) -> Result<FeeSplit> {
    require!(
        protocol_bps.checked_add(creator_bps).ok_or(TreasuryError::Overflow)?
            <= BPS_DENOMINATOR,
        TreasuryError::FeeExceedsPrice
    );

    let protocol = price
        .checked_mul(protocol_bps)
        .ok_or(TreasuryError::Overflow)?
        / BPS_DENOMINATOR;
    let creator = price
        .checked_mul(creator_bps)
        .ok_or(TreasuryError::Overflow)?
        / BPS_DENOMINATOR;

    // Both shares truncate, so the subtraction cannot underflow
    let pool = price - protocol - creator;

    Ok(FeeSplit {
        protocol,
        creator,
        pool,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_split() {
        // 0.0001 SOL ticket: 15% / 15% / 70%
        let split = split_fee(100_000, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS).unwrap();
        assert_eq!(split.protocol, 15_000);
        assert_eq!(split.creator, 15_000);
        assert_eq!(split.pool, 70_000);
    }

    #[test]
    fn test_exactness() {
        // Truncating prices must still sum back exactly
        for price in [0u64, 1, 2, 3, 7, 99, 101, 9_999, 10_001, 123_457, u64::MAX / 2_000] {
            let split = split_fee(price, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS).unwrap();
            assert_eq!(split.protocol + split.creator + split.pool, price);
        }
    }

    #[test]
    fn test_truncation_dust_lands_in_pool() {
        // price = 101: each 15% share is 15.15 -> 15, pool picks up the dust
        let split = split_fee(101, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS).unwrap();
        assert_eq!(split.protocol, 15);
        assert_eq!(split.creator, 15);
        assert_eq!(split.pool, 71);
    }

    #[test]
    fn test_tiny_prices_flow_to_pool() {
        let split = split_fee(3, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS).unwrap();
        assert_eq!(split.protocol, 0);
        assert_eq!(split.creator, 0);
        assert_eq!(split.pool, 3);
    }

    #[test]
    fn test_combined_fee_cap() {
        assert!(split_fee(100_000, 6_000, 5_000).is_err());
        assert!(split_fee(100_000, 10_000, 0).is_ok());
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(split_fee(u64::MAX, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS).is_err());
    }
}
