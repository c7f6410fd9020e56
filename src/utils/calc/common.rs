//! Shared fixed-point helpers for fee and slippage scaling.
//!
//! Fees are quoted in basis points (1/10_000); slippage arrives as a float
//! fraction and is converted once, at the boundary, to parts-per-million.
//! Everything downstream is integer math with floor division.

use crate::error::QuoteError;

/// Fee denominator: one basis point is 1/10_000.
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Slippage denominator after conversion to parts-per-million.
pub const SLIPPAGE_DENOMINATOR: u64 = 1_000_000;

/// Converts a fractional slippage (e.g. `0.01` for 1%) to parts-per-million.
///
/// The float is truncated to whole basis points before scaling up, so
/// `0.01` becomes exactly 10_000 ppm and sub-basis-point noise in the float
/// representation cannot shift the bound. This is the only place slippage
/// touches floating point.
pub fn slippage_to_micro_bps(slippage: f64) -> Result<u64, QuoteError> {
    if !slippage.is_finite() || !(0.0..=1.0).contains(&slippage) {
        return Err(QuoteError::InvalidSlippage);
    }
    let basis_points = (slippage * BASIS_POINTS_DENOMINATOR as f64).floor() as u64;
    Ok(basis_points * 100)
}

/// Deducts a basis-point fee with floor division.
pub fn deduct_fee(amount: u128, fee_basis_points: u64) -> Result<u128, QuoteError> {
    let keep = BASIS_POINTS_DENOMINATOR
        .checked_sub(fee_basis_points)
        .ok_or(QuoteError::ArithmeticOverflow)?;
    amount
        .checked_mul(keep as u128)
        .map(|scaled| scaled / BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(QuoteError::ArithmeticOverflow)
}

/// Scales an amount down by a parts-per-million slippage tolerance.
pub fn apply_slippage_floor(amount: u128, micro_bps: u64) -> Result<u128, QuoteError> {
    let keep = SLIPPAGE_DENOMINATOR
        .checked_sub(micro_bps)
        .ok_or(QuoteError::ArithmeticOverflow)?;
    amount
        .checked_mul(keep as u128)
        .map(|scaled| scaled / SLIPPAGE_DENOMINATOR as u128)
        .ok_or(QuoteError::ArithmeticOverflow)
}
