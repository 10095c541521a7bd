//! Factory Initialization
//!
//! Sets up the global factory configuration. This is called once during
//! deployment; a second call is rejected explicitly.

use anchor_lang::prelude::*;

use crate::state::Factory;

/// Accounts required for factory initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer (becomes the factory owner)
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global factory account (created on first call)
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Factory::INIT_SPACE,
        seeds = [Factory::SEED],
        bump,
    )]
    pub factory: Account<'info, Factory>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the factory configuration
    pub fn initialize(
        &mut self,
        implementation: Pubkey,
        bot_creation_fee: u64,
        init_price: u64,
        bumps: InitializeBumps,
    ) -> Result<()> {
        // A freshly created factory account has a zeroed owner field;
        // anything else means initialize already ran.
        require_keys_eq!(
            self.factory.owner,
            Pubkey::default(),
            InitializeError::AlreadyInitialized
        );
        require!(
            init_price >= Factory::MIN_INIT_PRICE,
            InitializeError::PriceTooLow
        );

        self.factory.set_inner(Factory {
            owner: self.owner.key(),
            implementation,
            bot_creation_fee,
            init_price,
            total_bots: 0,
            bump: bumps.factory,
        });

        msg!("Factory initialized!");
        msg!("Owner: {}", self.owner.key());
        msg!("Implementation: {}", implementation);
        msg!("Creation fee: {} lamports", bot_creation_fee);
        msg!("Init price: {} lamports", init_price);

        Ok(())
    }
}

#[error_code]
pub enum InitializeError {
    #[msg("Factory is already initialized")]
    AlreadyInitialized,
    #[msg("Initial price must be at least 2 lamports")]
    PriceTooLow,
}
