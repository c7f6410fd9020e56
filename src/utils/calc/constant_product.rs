//! Constant-product pricing for bonding-curve and pool venues.
//!
//! One parameterized quote path serves both venues: the venue difference is
//! entirely captured by which reserves the [`ReserveState`] snapshot carries
//! (virtual reserves for the launch curve, real vault balances for the pool)
//! and by its fee rate. All reserve math runs in `u128` with floor division;
//! nothing here rounds up.

use crate::common::ReserveState;
use crate::constants::LAMPORTS_PER_SOL;
use crate::error::QuoteError;
use crate::utils::calc::common::{apply_slippage_floor, deduct_fee, slippage_to_micro_bps};
use serde::{Deserialize, Serialize};

/// Which side of the pair the input amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Spend quote (SOL/WSOL), receive base tokens.
    Buy,
    /// Spend base tokens, receive quote.
    Sell,
}

/// A complete quote: what goes in, what is expected out, and the worst
/// acceptable outcome under the requested slippage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Input amount, scaled to the input mint's decimals.
    pub raw_input_amount: u64,
    /// Post-fee expected output at current reserves.
    pub estimated_amount_out: u64,
    /// Slippage-scaled floor; never exceeds `estimated_amount_out`.
    pub minimum_amount_out: u64,
}

/// Computes a constant-product swap quote against a reserve snapshot.
///
/// Validation order is fixed: a completed curve fails with
/// [`QuoteError::VenueGraduated`] before the amount is even looked at, a
/// zero input is [`QuoteError::InvalidAmount`], and slippage outside
/// `[0, 1]` is [`QuoteError::InvalidSlippage`].
pub fn quote(
    reserves: &ReserveState,
    direction: TradeDirection,
    amount_in: u64,
    slippage: f64,
) -> Result<QuoteResult, QuoteError> {
    if reserves.complete {
        return Err(QuoteError::VenueGraduated);
    }
    if amount_in == 0 {
        return Err(QuoteError::InvalidAmount);
    }
    let micro_bps = slippage_to_micro_bps(slippage)?;

    let (input_reserve, output_reserve) = match direction {
        TradeDirection::Buy => (reserves.virtual_quote_reserve, reserves.virtual_base_reserve),
        TradeDirection::Sell => (reserves.virtual_base_reserve, reserves.virtual_quote_reserve),
    };

    let x = input_reserve as u128;
    let y = output_reserve as u128;
    let k = x.checked_mul(y).ok_or(QuoteError::ArithmeticOverflow)?;
    let new_input_reserve =
        x.checked_add(amount_in as u128).ok_or(QuoteError::ArithmeticOverflow)?;
    if new_input_reserve == 0 {
        return Err(QuoteError::ArithmeticOverflow);
    }
    let new_output_reserve = k / new_input_reserve;
    let raw_out = y - new_output_reserve;

    let after_fee = deduct_fee(raw_out, reserves.fee_basis_points)?;
    let minimum = apply_slippage_floor(after_fee, micro_bps)?;

    let result = QuoteResult {
        raw_input_amount: amount_in,
        estimated_amount_out: u64::try_from(after_fee)
            .map_err(|_| QuoteError::ArithmeticOverflow)?,
        minimum_amount_out: u64::try_from(minimum).map_err(|_| QuoteError::ArithmeticOverflow)?,
    };
    tracing::debug!(
        venue = ?reserves.venue,
        ?direction,
        amount_in,
        estimated = result.estimated_amount_out,
        minimum = result.minimum_amount_out,
        "computed swap quote"
    );
    Ok(result)
}

/// Current marginal price in quote units per whole base token.
///
/// A pure reserve ratio, not a trade simulation: no fee, no depth impact.
/// Fails with [`QuoteError::VenueGraduated`] on a completed curve, whose
/// frozen reserves no longer price anything.
pub fn spot_price(reserves: &ReserveState) -> Result<f64, QuoteError> {
    if reserves.complete {
        return Err(QuoteError::VenueGraduated);
    }
    let quote_side = reserves.virtual_quote_reserve as f64 / LAMPORTS_PER_SOL as f64;
    let base_side =
        reserves.virtual_base_reserve as f64 / 10f64.powi(reserves.base_decimals as i32);
    Ok(quote_side / base_side)
}

/// Total supply priced at the current virtual ratio, in lamports.
///
/// Only meaningful for the launch curve, where the curve account carries
/// the token's total supply; the caller passes it in because
/// [`ReserveState`] stays venue-neutral. An empty base reserve prices
/// nothing and reports a cap of zero.
pub fn market_cap_lamports(
    reserves: &ReserveState,
    token_total_supply: u64,
) -> Result<u64, QuoteError> {
    if reserves.virtual_base_reserve == 0 {
        return Ok(0);
    }
    let cap = (token_total_supply as u128)
        .checked_mul(reserves.virtual_quote_reserve as u128)
        .ok_or(QuoteError::ArithmeticOverflow)?
        / reserves.virtual_base_reserve as u128;
    u64::try_from(cap).map_err(|_| QuoteError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::VenueKind;

    fn launch_reserves() -> ReserveState {
        ReserveState {
            venue: VenueKind::BondingCurve,
            virtual_base_reserve: 1_073_000_000_000_000,
            virtual_quote_reserve: 30_000_000_000,
            real_base_reserve: 793_100_000_000_000,
            real_quote_reserve: 0,
            base_decimals: 6,
            quote_decimals: 9,
            complete: false,
            fee_basis_points: 100,
        }
    }

    #[test]
    fn test_buy_quote_exact_values() {
        let result = quote(&launch_reserves(), TradeDirection::Buy, 1_000_000, 0.01).unwrap();
        assert_eq!(result.raw_input_amount, 1_000_000);
        assert_eq!(result.estimated_amount_out, 35_407_819_740);
        assert_eq!(result.minimum_amount_out, 35_053_741_542);
    }

    #[test]
    fn test_sell_quote_exact_values() {
        let result =
            quote(&launch_reserves(), TradeDirection::Sell, 1_000_000_000, 0.01).unwrap();
        assert_eq!(result.estimated_amount_out, 27_679);
        assert_eq!(result.minimum_amount_out, 27_402);
    }

    #[test]
    fn test_zero_slippage_means_equal_bounds() {
        let result = quote(&launch_reserves(), TradeDirection::Buy, 1_000_000, 0.0).unwrap();
        assert_eq!(result.minimum_amount_out, result.estimated_amount_out);
    }

    #[test]
    fn test_graduated_curve_rejected_before_amount_check() {
        let mut reserves = launch_reserves();
        reserves.complete = true;
        // Even a zero amount reports graduation first.
        assert_eq!(
            quote(&reserves, TradeDirection::Buy, 0, 0.01),
            Err(QuoteError::VenueGraduated)
        );
        assert_eq!(spot_price(&reserves), Err(QuoteError::VenueGraduated));
    }

    #[test]
    fn test_invalid_inputs() {
        let reserves = launch_reserves();
        assert_eq!(
            quote(&reserves, TradeDirection::Buy, 0, 0.01),
            Err(QuoteError::InvalidAmount)
        );
        assert_eq!(
            quote(&reserves, TradeDirection::Buy, 1, 1.5),
            Err(QuoteError::InvalidSlippage)
        );
        assert_eq!(
            quote(&reserves, TradeDirection::Buy, 1, f64::NAN),
            Err(QuoteError::InvalidSlippage)
        );
    }

    #[test]
    fn test_output_monotonic_and_concave_in_input() {
        let reserves = launch_reserves();
        let mut previous_out = 0u64;
        let mut previous_gain = u64::MAX;
        for step in 1..=50u64 {
            let amount = step * 500_000_000;
            let result = quote(&reserves, TradeDirection::Buy, amount, 0.0).unwrap();
            assert!(result.estimated_amount_out > previous_out);
            let gain = result.estimated_amount_out - previous_out;
            // Diminishing returns: each equal-size increment buys less.
            assert!(gain <= previous_gain);
            previous_out = result.estimated_amount_out;
            previous_gain = gain;
        }
    }

    #[test]
    fn test_output_never_exceeds_reserve() {
        let reserves = launch_reserves();
        // Absurdly large input drains at most the output-side reserve.
        let result =
            quote(&reserves, TradeDirection::Buy, u64::MAX / 2, 0.0).unwrap();
        assert!(result.estimated_amount_out < reserves.virtual_base_reserve);
    }

    #[test]
    fn test_spot_price_ratio() {
        let price = spot_price(&launch_reserves()).unwrap();
        // 30 SOL over 1_073_000_000 whole tokens.
        let expected = 30.0 / 1_073_000_000.0;
        assert!((price - expected).abs() < 1e-18);
    }

    #[test]
    fn test_market_cap_at_launch() {
        let reserves = launch_reserves();
        let cap = market_cap_lamports(&reserves, 1_000_000_000_000_000).unwrap();
        // total_supply * vQuote / vBase with floor division.
        assert_eq!(cap, 27_958_993_476);
    }

    #[test]
    fn test_market_cap_of_empty_reserve_is_zero() {
        let mut reserves = launch_reserves();
        reserves.virtual_base_reserve = 0;
        assert_eq!(market_cap_lamports(&reserves, 1_000_000_000_000_000).unwrap(), 0);
    }
}
