//! Ticket Purchase
//!
//! Buys one ticket from a bot at its current price. The price is split
//! three ways in the same instruction: protocol share to the factory
//! treasury, creator share to the bot's creator, pool share to the bot
//! itself. Only the price leaves the buyer; any excess in `payment` stays
//! untouched in the buyer's account.
//!
//! The Solana runtime applies the instruction atomically: if any of the
//! three transfers fails, no lamport moves and the bot's counters are
//! unchanged.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::curve::{split_fee, CREATOR_FEE_BPS, PROTOCOL_FEE_BPS};
use crate::state::{Bot, Factory};

/// Event emitted when a ticket is sold
#[event]
pub struct TicketPurchased {
    pub bot: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    pub order: u64,
}

/// Accounts for buying a ticket
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// Ticket buyer
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Factory treasury (receives the protocol share)
    #[account(
        mut,
        seeds = [Factory::SEED],
        bump = factory.bump,
    )]
    pub factory: Account<'info, Factory>,

    /// Bot selling the ticket
    #[account(
        mut,
        constraint = bot.factory == factory.key() @ BuyTicketError::BotNotFound,
    )]
    pub bot: Account<'info, Bot>,

    /// CHECK: receives the creator share; validated against the bot's
    /// stored creator identity.
    #[account(
        mut,
        address = bot.creator @ BuyTicketError::CreatorMismatch,
    )]
    pub creator: UncheckedAccount<'info>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> BuyTicket<'info> {
    pub fn buy_ticket(&mut self, payment: u64) -> Result<()> {
        require!(!self.bot.paused, BuyTicketError::BotPaused);

        let price = self.bot.current_price;
        require!(payment >= price, BuyTicketError::InsufficientPayment);

        let split = split_fee(price, PROTOCOL_FEE_BPS, CREATOR_FEE_BPS)?;

        // Protocol share -> factory treasury
        self.pay(&self.factory.to_account_info(), split.protocol)?;

        // Creator share -> bot creator
        self.pay(&self.creator.to_account_info(), split.creator)?;

        // Pool share stays with the bot
        self.pay(&self.bot.to_account_info(), split.pool)?;

        self.bot.record_sale()?;

        msg!(
            "Ticket sold: bot={}, order={}, price={} lamports",
            self.bot.key(),
            self.bot.order,
            price
        );

        emit!(TicketPurchased {
            bot: self.bot.key(),
            buyer: self.buyer.key(),
            price,
            order: self.bot.order,
        });

        Ok(())
    }

    /// One leg of the split, paid from the buyer. Zero-lamport legs are
    /// skipped so dust-sized prices do not pay for no-op CPIs.
    fn pay(&self, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.buyer.to_account_info(),
                    to: to.clone(),
                },
            ),
            amount,
        )
        .map_err(|_| error!(BuyTicketError::TransferFailed))
    }
}

#[error_code]
pub enum BuyTicketError {
    #[msg("Bot is paused")]
    BotPaused,
    #[msg("Payment below the current ticket price")]
    InsufficientPayment,
    #[msg("Bot does not belong to this factory")]
    BotNotFound,
    #[msg("Creator account does not match the bot's creator")]
    CreatorMismatch,
    #[msg("Fee transfer failed")]
    TransferFailed,
}
