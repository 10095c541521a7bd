//! # Escalating Ticket Curve
//!
//! Each bot sells tickets at a price that rises by a fixed multiplicative
//! step of 1.5x per ticket sold:
//!
//! ```text
//! price(0) = init_price
//! price(n + 1) = price(n) * 3 / 2        (integer division truncates)
//! ```
//!
//! The step is applied **iteratively** to the stored current price, one
//! step per sale. It is never recomputed in closed form as
//! `init_price * (3/2)^n`: with integer division the two disagree once
//! truncation kicks in, and every derived price downstream depends on the
//! iterative sequence. Keep it this way.

use anchor_lang::prelude::*;

/// Errors specific to the ticket curve
#[error_code]
pub enum CurveError {
    #[msg("Arithmetic overflow")]
    Overflow,
}

/// Price step numerator (3/2 per sale)
pub const STEP_NUMERATOR: u64 = 3;

/// Price step denominator
pub const STEP_DENOMINATOR: u64 = 2;

/// Advance the ticket price one curve step.
///
/// Multiplies before dividing so a single step loses at most one unit to
/// truncation; the multiply is checked because prices grow geometrically
/// and will reach `u64::MAX / 3` after a few hundred sales.
pub fn next_price(current: u64) -> Result<u64> {
    let stepped = current
        .checked_mul(STEP_NUMERATOR)
        .ok_or(CurveError::Overflow)?
        / STEP_DENOMINATOR;
    Ok(stepped)
}

// ============================================================================
// TESTS
// ============================================================================
