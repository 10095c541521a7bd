//! Global Factory Configuration
//!
//! This account stores factory-wide settings that apply to every bot it
//! creates, plus the running bot counter. Its lamport balance doubles as
//! the protocol treasury: creation fees and the protocol share of every
//! ticket sale accumulate here.

use anchor_lang::prelude::*;

/// Global factory account (singleton PDA)
///
/// Seeds: ["factory"]
#[account]
#[derive(InitSpace)]
pub struct Factory {
    /// Factory owner with administrative privileges
    pub owner: Pubkey,

    /// Template reference for newly created bots.
    ///
    /// Data-only: consulted when a bot is created, never delegated to at
    /// call time. Re-pointing it changes future creations only.
    pub implementation: Pubkey,

    /// Flat fee (lamports) required to create a bot
    pub bot_creation_fee: u64,

    /// Starting ticket price (lamports) assigned to newly created bots
    pub init_price: u64,

    /// Total bots created (used as the incrementing bot id)
    pub total_bots: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Factory {
    pub const SEED: &'static [u8] = b"factory";

    /// Lowest allowed `init_price`. Integer `1 * 3 / 2 == 1`, so prices
    /// below 2 would stall the curve instead of strictly increasing.
    pub const MIN_INIT_PRICE: u64 = 2;
}
