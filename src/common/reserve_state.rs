//! Point-in-time reserve snapshot used by the pricing engine.
//!
//! A `ReserveState` is built fresh for every quote and never cached: reserves
//! move on every on-chain trade, so a stale snapshot silently misprices.
//! Decimals are not embedded in any on-chain layout here; the caller attaches
//! them from each mint's own metadata.

use crate::common::bonding_curve::BondingCurveAccount;
use crate::common::pool::{PoolAccount, SplTokenAccount};
use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

/// Which venue a reserve snapshot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueKind {
    /// PumpFun launch-phase bonding curve, priced on virtual reserves.
    BondingCurve,
    /// PumpSwap constant-product pool, priced on real vault balances.
    Pool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveState {
    pub venue: VenueKind,
    /// Reserves the price is computed against. For a pool these equal the
    /// real vault balances.
    pub virtual_base_reserve: u64,
    pub virtual_quote_reserve: u64,
    /// Balances actually available for trading.
    pub real_base_reserve: u64,
    pub real_quote_reserve: u64,
    /// Scale of the base mint, from its metadata. Never assumed equal to
    /// the quote side.
    pub base_decimals: u8,
    pub quote_decimals: u8,
    /// Terminal for the bonding-curve venue: quoting against a completed
    /// curve fails with [`QuoteError::VenueGraduated`].
    pub complete: bool,
    /// Swap fee read from the venue's on-chain config account.
    pub fee_basis_points: u64,
}

impl ReserveState {
    /// Snapshot of a launch-phase bonding curve.
    ///
    /// `fee_basis_points` comes from the program's `Global` config account
    /// and `base_decimals` from the token mint; neither lives in the curve
    /// account itself. The quote side is native SOL at 9 decimals.
    pub fn from_bonding_curve(
        curve: &BondingCurveAccount,
        fee_basis_points: u64,
        base_decimals: u8,
    ) -> Self {
        Self {
            venue: VenueKind::BondingCurve,
            virtual_base_reserve: curve.virtual_token_reserves,
            virtual_quote_reserve: curve.virtual_sol_reserves,
            real_base_reserve: curve.real_token_reserves,
            real_quote_reserve: curve.real_sol_reserves,
            base_decimals,
            quote_decimals: 9,
            complete: curve.complete,
            fee_basis_points,
        }
    }

    /// Snapshot of an AMM pool from its account plus the two decoded vault
    /// token accounts.
    ///
    /// The vaults must be the ones the pool account records, holding the
    /// pool's mints; anything else means the caller fetched the wrong
    /// accounts and the price would be nonsense.
    pub fn from_pool(
        pool: &PoolAccount,
        base_vault: &SplTokenAccount,
        quote_vault: &SplTokenAccount,
        fee_basis_points: u64,
        base_decimals: u8,
        quote_decimals: u8,
    ) -> Result<Self, QuoteError> {
        if base_vault.mint != pool.base_mint {
            return Err(QuoteError::WrongAccountType {
                expected: pool.base_mint.to_string(),
                actual: base_vault.mint.to_string(),
            });
        }
        if quote_vault.mint != pool.quote_mint {
            return Err(QuoteError::WrongAccountType {
                expected: pool.quote_mint.to_string(),
                actual: quote_vault.mint.to_string(),
            });
        }
        Ok(Self {
            venue: VenueKind::Pool,
            // Pools have no virtual component: the vault balances are both
            // the price input and the tradable liquidity.
            virtual_base_reserve: base_vault.amount,
            virtual_quote_reserve: quote_vault.amount,
            real_base_reserve: base_vault.amount,
            real_quote_reserve: quote_vault.amount,
            base_decimals,
            quote_decimals,
            complete: false,
            fee_basis_points,
        })
    }
}
