//! Bot Creation
//!
//! Anyone can register a new bot by paying the factory's creation fee
//! (plus an optional instruction-length supplement the caller bundles in).
//! The new bot is bound to the named creator and to the factory's current
//! configuration: it starts selling tickets at the factory's `init_price`
//! against the factory's current implementation reference.
//!
//! The whole `payment` is retained by the factory treasury; callers should
//! size it precisely.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::{Bot, Factory};

/// Event emitted when a new bot is created
#[event]
pub struct BotCreated {
    pub bot: Pubkey,
    pub bot_id: u64,
    pub creator: Pubkey,
    pub init_price: u64,
}

/// Accounts for creating a new bot
#[derive(Accounts)]
pub struct CreateBot<'info> {
    /// Caller paying the creation fee and the bot account rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Global factory configuration (receives the fee)
    #[account(
        mut,
        seeds = [Factory::SEED],
        bump = factory.bump,
    )]
    pub factory: Account<'info, Factory>,

    /// The new bot account
    #[account(
        init,
        payer = payer,
        space = 8 + Bot::INIT_SPACE,
        seeds = [Bot::SEED, factory.total_bots.to_le_bytes().as_ref()],
        bump,
    )]
    pub bot: Account<'info, Bot>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> CreateBot<'info> {
    pub fn create_bot(
        &mut self,
        creator: Pubkey,
        instruction_fee: u64,
        payment: u64,
        bumps: CreateBotBumps,
    ) -> Result<()> {
        require_keys_neq!(creator, Pubkey::default(), CreateBotError::InvalidCreator);

        let required = self
            .factory
            .bot_creation_fee
            .checked_add(instruction_fee)
            .ok_or(CreateBotError::Overflow)?;
        require!(payment >= required, CreateBotError::InvalidFee);

        // Move the full payment into the factory treasury
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.payer.to_account_info(),
                    to: self.factory.to_account_info(),
                },
            ),
            payment,
        )
        .map_err(|_| CreateBotError::TransferFailed)?;

        let bot_id = self.factory.total_bots;

        self.bot.set_inner(Bot {
            factory: self.factory.key(),
            creator,
            bot_id,
            current_price: self.factory.init_price,
            order: 0,
            is_active: true,
            paused: false,
            bump: bumps.bot,
        });

        self.factory.total_bots = self
            .factory
            .total_bots
            .checked_add(1)
            .ok_or(CreateBotError::Overflow)?;

        msg!(
            "Bot created: id={}, address={}, creator={}",
            bot_id,
            self.bot.key(),
            creator
        );

        emit!(BotCreated {
            bot: self.bot.key(),
            bot_id,
            creator,
            init_price: self.factory.init_price,
        });

        Ok(())
    }
}

#[error_code]
pub enum CreateBotError {
    #[msg("Payment below the required creation fee")]
    InvalidFee,
    #[msg("Creator cannot be the zero identity")]
    InvalidCreator,
    #[msg("Fee transfer failed")]
    TransferFailed,
    #[msg("Arithmetic overflow")]
    Overflow,
}
