//! # Bot Factory: Escalating-Price Ticket Sales
//!
//! A factory that mints independent bots, each selling tickets on a
//! deterministic escalating price curve with an automatic three-way fee
//! split on every sale.
//!
//! ## Overview
//!
//! - The **factory** is a singleton account holding global configuration
//!   (implementation reference, creation fee, initial price), the owner
//!   identity, and the bot counter. Its balance is the protocol treasury.
//! - Each **bot** is its own account, bound at creation to the factory and
//!   to a creator. It sells tickets at a price that rises 1.5x per sale;
//!   every sale pays 15% to the factory, 15% to the creator, and retains
//!   70% in the bot's own pool.
//! - The factory keeps supervisory rights: only its owner may pause or
//!   unpause a bot or change the global configuration.

use anchor_lang::prelude::*;

pub mod curve;
pub mod instructions;
pub mod state;

pub use curve::*;
pub use instructions::*;

// Replace with your deployed program ID
declare_id!("FadhACxudWeJMP6YseuSwoaVcAcdDwQqFyCUekoia8RH");

/// Main bot factory program
#[program]
pub mod bot_factory {
    use super::*;

    /// Initialize the factory with its global configuration (once)
    pub fn initialize(
        ctx: Context<Initialize>,
        implementation: Pubkey,
        bot_creation_fee: u64,
        init_price: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize(implementation, bot_creation_fee, init_price, ctx.bumps)
    }

    /// Create a new bot for `creator` (fee-gated, permissionless)
    pub fn create_bot(
        ctx: Context<CreateBot>,
        creator: Pubkey,
        instruction_fee: u64,
        payment: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_bot(creator, instruction_fee, payment, ctx.bumps)
    }

    /// Buy one ticket from a bot at its current price
    pub fn buy_ticket(ctx: Context<BuyTicket>, payment: u64) -> Result<()> {
        ctx.accounts.buy_ticket(payment)
    }

    /// Pause a bot (owner only)
    pub fn pause_bot(ctx: Context<PauseBot>) -> Result<()> {
        ctx.accounts.pause()
    }

    /// Unpause a bot (owner only)
    pub fn unpause_bot(ctx: Context<PauseBot>) -> Result<()> {
        ctx.accounts.unpause()
    }

    /// Re-point the bot template used for future creations (owner only)
    pub fn update_implementation(
        ctx: Context<UpdateConfig>,
        new_implementation: Pubkey,
    ) -> Result<()> {
        ctx.accounts.update_implementation(new_implementation)
    }

    /// Change the bot creation fee (owner only)
    pub fn update_bot_creation_fee(ctx: Context<UpdateConfig>, new_fee: u64) -> Result<()> {
        ctx.accounts.update_bot_creation_fee(new_fee)
    }

    /// Change the starting ticket price for future bots (owner only)
    pub fn update_init_price(ctx: Context<UpdateConfig>, new_price: u64) -> Result<()> {
        ctx.accounts.update_init_price(new_price)
    }

    /// Hand the factory to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }

    /// Withdraw accumulated fees from the factory treasury (owner only)
    pub fn withdraw_fees(ctx: Context<UpdateConfig>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_fees(amount)
    }
}
