//! State structures for the bot factory

pub mod bot;
pub mod factory;

pub use bot::*;
pub use factory::*;
