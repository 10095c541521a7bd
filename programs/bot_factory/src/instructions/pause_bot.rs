//! Bot Pause Controls
//!
//! The factory retains supervisory rights over every bot it created. Only
//! the factory owner may pause or unpause a bot; while paused, the bot
//! rejects ticket purchases but keeps all of its state.

use anchor_lang::prelude::*;

use crate::state::{Bot, Factory};

/// Event emitted when a bot is paused
#[event]
pub struct BotPaused {
    pub bot: Pubkey,
}

/// Event emitted when a bot is unpaused
#[event]
pub struct BotUnpaused {
    pub bot: Pubkey,
}

/// Accounts for pause/unpause operations
#[derive(Accounts)]
pub struct PauseBot<'info> {
    /// Factory owner
    pub owner: Signer<'info>,

    /// Global factory configuration
    #[account(
        seeds = [Factory::SEED],
        bump = factory.bump,
        has_one = owner @ PauseBotError::Unauthorized,
    )]
    pub factory: Account<'info, Factory>,

    /// Bot being paused or unpaused
    #[account(
        mut,
        constraint = bot.factory == factory.key() @ PauseBotError::BotNotFound,
    )]
    pub bot: Account<'info, Bot>,
}

impl<'info> PauseBot<'info> {
    /// Pause the bot (flag flip; always succeeds for the owner)
    pub fn pause(&mut self) -> Result<()> {
        self.bot.set_paused(true);

        msg!("Bot paused: {}", self.bot.key());
        emit!(BotPaused {
            bot: self.bot.key()
        });

        Ok(())
    }

    /// Unpause the bot
    pub fn unpause(&mut self) -> Result<()> {
        self.bot.set_paused(false);

        msg!("Bot unpaused: {}", self.bot.key());
        emit!(BotUnpaused {
            bot: self.bot.key()
        });

        Ok(())
    }
}

#[error_code]
pub enum PauseBotError {
    #[msg("Only the factory owner may pause or unpause bots")]
    Unauthorized,
    #[msg("Bot does not belong to this factory")]
    BotNotFound,
}
