//! Instruction handlers for the bot factory
//!
//! Each instruction represents an action users can take:
//! - `initialize` - Set up the factory (deployer only, once)
//! - `create_bot` - Register a new bot for a creator (fee-gated)
//! - `buy_ticket` - Buy one ticket from a bot at its current price
//! - `pause_bot` - Pause/unpause a bot (owner only)
//! - `update_config` - Owner-only configuration changes and withdrawals

pub mod initialize;
pub mod create_bot;
pub mod buy_ticket;
pub mod pause_bot;
pub mod update_config;

pub use initialize::*;
pub use create_bot::*;
pub use buy_ticket::*;
pub use pause_bot::*;
pub use update_config::*;
