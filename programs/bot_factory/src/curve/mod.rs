//! # Pricing and Fee Math
//!
//! Pure arithmetic for the ticket-sale engine, kept apart from the
//! instruction layer so every lamport-level rule is testable in isolation:
//!
//! - [`ticket_curve`] — the escalating price step applied after each sale
//! - [`treasury`] — the exact three-way fee split applied to each sale
//!
//! Nothing in this module moves value or touches accounts.

pub mod ticket_curve;
pub mod treasury;

pub use ticket_curve::*;
pub use treasury::*;
