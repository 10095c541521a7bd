//! Factory Administration
//!
//! Owner-only configuration updates. Each setter emits an event carrying
//! the old and new values. Updates never reach back into existing bots:
//! the implementation reference and the initial price only shape bots
//! created afterwards, and the creation fee only gates future creations.

use anchor_lang::prelude::*;

use crate::state::Factory;

/// Event emitted when the bot implementation reference changes
#[event]
pub struct ImplementationUpdated {
    pub old: Pubkey,
    pub new: Pubkey,
}

/// Event emitted when the bot creation fee changes
#[event]
pub struct BotCreationFeeUpdated {
    pub old: u64,
    pub new: u64,
}

/// Event emitted when the initial ticket price changes
#[event]
pub struct InitPriceUpdated {
    pub old: u64,
    pub new: u64,
}

/// Event emitted when factory ownership moves
#[event]
pub struct OwnershipTransferred {
    pub old: Pubkey,
    pub new: Pubkey,
}

/// Event emitted when the owner withdraws accumulated fees
#[event]
pub struct FeesWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
}

/// Accounts for owner-only configuration changes
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Factory owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global factory configuration
    #[account(
        mut,
        seeds = [Factory::SEED],
        bump = factory.bump,
        has_one = owner @ UpdateConfigError::Unauthorized,
    )]
    pub factory: Account<'info, Factory>,
}

impl<'info> UpdateConfig<'info> {
    /// Re-point the template used for future bot creations
    pub fn update_implementation(&mut self, new_implementation: Pubkey) -> Result<()> {
        let old = self.factory.implementation;
        self.factory.implementation = new_implementation;

        msg!("Implementation updated: {} -> {}", old, new_implementation);
        emit!(ImplementationUpdated {
            old,
            new: new_implementation,
        });

        Ok(())
    }

    /// Change the flat fee charged for future bot creations
    pub fn update_bot_creation_fee(&mut self, new_fee: u64) -> Result<()> {
        let old = self.factory.bot_creation_fee;
        self.factory.bot_creation_fee = new_fee;

        msg!("Bot creation fee updated: {} -> {}", old, new_fee);
        emit!(BotCreationFeeUpdated { old, new: new_fee });

        Ok(())
    }

    /// Change the starting ticket price assigned to future bots
    pub fn update_init_price(&mut self, new_price: u64) -> Result<()> {
        require!(
            new_price >= Factory::MIN_INIT_PRICE,
            UpdateConfigError::PriceTooLow
        );

        let old = self.factory.init_price;
        self.factory.init_price = new_price;

        msg!("Init price updated: {} -> {}", old, new_price);
        emit!(InitPriceUpdated {
            old,
            new: new_price,
        });

        Ok(())
    }

    /// Hand the factory to a new owner
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        require_keys_neq!(new_owner, Pubkey::default(), UpdateConfigError::InvalidOwner);

        let old = self.factory.owner;
        self.factory.owner = new_owner;

        msg!("Ownership transferred: {} -> {}", old, new_owner);
        emit!(OwnershipTransferred {
            old,
            new: new_owner,
        });

        Ok(())
    }

    /// Withdraw accumulated fees from the factory treasury.
    ///
    /// The factory PDA is program-owned, so the outflow is a direct
    /// lamport adjustment rather than a system-program CPI. The balance
    /// never drops below the account's rent-exempt minimum.
    pub fn withdraw_fees(&mut self, amount: u64) -> Result<()> {
        let factory_info = self.factory.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(factory_info.data_len());
        let available = factory_info
            .lamports()
            .saturating_sub(rent_floor);
        require!(amount <= available, UpdateConfigError::InsufficientTreasury);

        **factory_info.try_borrow_mut_lamports()? -= amount;
        **self.owner.to_account_info().try_borrow_mut_lamports()? += amount;

        msg!("Fees withdrawn: {} lamports -> {}", amount, self.owner.key());
        emit!(FeesWithdrawn {
            to: self.owner.key(),
            amount,
        });

        Ok(())
    }
}

#[error_code]
pub enum UpdateConfigError {
    #[msg("Only the factory owner may update configuration")]
    Unauthorized,
    #[msg("Initial price must be at least 2 lamports")]
    PriceTooLow,
    #[msg("New owner cannot be the zero identity")]
    InvalidOwner,
    #[msg("Withdrawal exceeds the available treasury balance")]
    InsufficientTreasury,
}
