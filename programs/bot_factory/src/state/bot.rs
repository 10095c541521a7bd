//! Bot State
//!
//! Each bot is an independent ticket-sale instance created by the factory.
//! The account itself is the factory's registry record for the bot
//! (creator + activity flag), and its lamport balance is the pool: the
//! share of every sale the bot retains after fees.

use anchor_lang::prelude::*;

use crate::curve::next_price;

/// Individual bot account
///
/// Seeds: ["bot", bot_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct Bot {
    /// The factory that created this bot (immutable)
    pub factory: Pubkey,

    /// Identity entitled to the creator share of every sale (immutable)
    pub creator: Pubkey,

    /// Creation index under the factory
    pub bot_id: u64,

    /// Price of the next ticket, advanced one curve step per sale
    pub current_price: u64,

    /// Tickets sold so far; increases by exactly 1 per sale, never resets
    pub order: u64,

    /// Registry-record activity flag; mirrors `!paused`
    pub is_active: bool,

    /// When true, ticket purchases are rejected
    pub paused: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Bot {
    pub const SEED: &'static [u8] = b"bot";

    /// Record one ticket sale: bump `order` and advance the price one
    /// curve step from the stored current price.
    pub fn record_sale(&mut self) -> Result<()> {
        self.order = self.order.checked_add(1).ok_or(BotError::OrderOverflow)?;
        self.current_price = next_price(self.current_price)?;
        Ok(())
    }

    /// Flip the pause flag. Only the owning factory's pause/unpause
    /// instructions call this; `is_active` tracks it.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.is_active = !paused;
    }
}

#[error_code]
pub enum BotError {
    #[msg("Order counter overflow")]
    OrderOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bot(init_price: u64) -> Bot {
        Bot {
            factory: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            bot_id: 0,
            current_price: init_price,
            order: 0,
            is_active: true,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn record_sale_bumps_order_by_one() {
        let mut bot = test_bot(100_000);
        for expected in 1..=10u64 {
            bot.record_sale().unwrap();
            assert_eq!(bot.order, expected);
        }
    }

    #[test]
    fn record_sale_steps_price_iteratively() {
        // 0.0001 SOL in lamports, the reference scenario price
        let mut bot = test_bot(100_000);

        bot.record_sale().unwrap();
        assert_eq!(bot.current_price, 150_000);

        bot.record_sale().unwrap();
        assert_eq!(bot.current_price, 225_000);

        bot.record_sale().unwrap();
        assert_eq!(bot.current_price, 337_500);
    }

    #[test]
    fn price_is_strictly_increasing() {
        let mut bot = test_bot(2);
        for _ in 0..50 {
            let before = bot.current_price;
            bot.record_sale().unwrap();
            assert!(bot.current_price > before);
        }
    }

    #[test]
    fn pause_mirrors_activity_flag() {
        let mut bot = test_bot(100_000);
        assert!(bot.is_active && !bot.paused);

        bot.set_paused(true);
        assert!(bot.paused);
        assert!(!bot.is_active);

        bot.set_paused(false);
        assert!(!bot.paused);
        assert!(bot.is_active);
    }
}
