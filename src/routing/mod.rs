//! Venue selection for a token pair.
//!
//! The launch curve wins while it is live; once it completes (or was never
//! initialized) the trade routes to the deepest candidate pool. All chain
//! reads are injected through the two traits below, keeping this module
//! synchronous and free of I/O: callers decide where bytes come from and
//! when they were fetched.

use crate::common::bonding_curve::BondingCurveAccount;
use crate::common::VenueKind;
use crate::error::QuoteError;
use crate::instruction::utils::pumpfun::{accounts::PUMPFUN, get_bonding_curve_pda};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Fetches raw account bytes by address. `None` means the account does not
/// exist (or the caller chose not to provide it), which routing treats the
/// same as an uninitialized account.
pub trait AccountReader {
    fn account_bytes(&self, address: &Pubkey) -> Option<Vec<u8>>;
}

/// Looks up candidate liquidity pools for a pair. The source ranks and
/// filters externally; candidates arrive with live reserves attached.
pub trait PoolLookup {
    fn candidate_pools(&self, base_mint: &Pubkey, quote_mint: &Pubkey) -> Vec<CandidatePool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePool {
    pub address: Pubkey,
    pub program_id: Pubkey,
    pub base_reserve: u64,
    pub quote_reserve: u64,
}

/// The venue a swap should execute on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDescriptor {
    pub kind: VenueKind,
    pub program_id: Pubkey,
    pub address: Pubkey,
}

/// Picks the venue for a pair.
///
/// If the bonding-curve PDA for the base mint exists, decodes, and has not
/// completed, the launch curve is the venue. A missing or short buffer
/// means the curve was never initialized and falls through to the pools;
/// a wrong discriminator is a real fault and propagates. Among candidate
/// pools the largest base reserve wins. Pure over its inputs: unchanged
/// collaborators give an unchanged answer.
pub fn select_venue<R: AccountReader, P: PoolLookup>(
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
    reader: &R,
    pools: &P,
) -> Result<VenueDescriptor, QuoteError> {
    let curve_address = get_bonding_curve_pda(base_mint);
    if let Some(bytes) = reader.account_bytes(&curve_address) {
        match BondingCurveAccount::decode(&bytes) {
            Ok(curve) if !curve.complete => {
                tracing::debug!(%base_mint, %curve_address, "routing to bonding curve");
                return Ok(VenueDescriptor {
                    kind: VenueKind::BondingCurve,
                    program_id: PUMPFUN,
                    address: curve_address,
                });
            },
            Ok(_) => {
                tracing::debug!(%base_mint, "bonding curve graduated, checking pools");
            },
            Err(QuoteError::MalformedAccountData { .. }) => {
                // Uninitialized account stub; treat like a missing curve.
                tracing::debug!(%base_mint, "bonding curve account not initialized");
            },
            Err(err) => return Err(err),
        }
    }

    let candidates = pools.candidate_pools(base_mint, quote_mint);
    let best = candidates
        .iter()
        .max_by_key(|pool| pool.base_reserve)
        .ok_or(QuoteError::NoVenueAvailable)?;
    tracing::debug!(%base_mint, pool = %best.address, base_reserve = best.base_reserve, "routing to pool");
    Ok(VenueDescriptor {
        kind: VenueKind::Pool,
        program_id: best.program_id,
        address: best.address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::bonding_curve::BONDING_CURVE_DISCRIMINATOR;
    use crate::instruction::utils::pumpswap::accounts::AMM_PROGRAM;
    use std::collections::HashMap;

    struct MapReader(HashMap<Pubkey, Vec<u8>>);

    impl AccountReader for MapReader {
        fn account_bytes(&self, address: &Pubkey) -> Option<Vec<u8>> {
            self.0.get(address).cloned()
        }
    }

    struct FixedPools(Vec<CandidatePool>);

    impl PoolLookup for FixedPools {
        fn candidate_pools(&self, _base: &Pubkey, _quote: &Pubkey) -> Vec<CandidatePool> {
            self.0.clone()
        }
    }

    fn live_curve_bytes() -> Vec<u8> {
        BondingCurveAccount {
            discriminator: BONDING_CURVE_DISCRIMINATOR,
            virtual_token_reserves: 1_073_000_000_000_000,
            virtual_sol_reserves: 30_000_000_000,
            real_token_reserves: 793_100_000_000_000,
            real_sol_reserves: 0,
            token_total_supply: 1_000_000_000_000_000,
            complete: false,
            creator: None,
        }
        .encode()
    }

    fn candidate(base_reserve: u64) -> CandidatePool {
        CandidatePool {
            address: Pubkey::new_unique(),
            program_id: AMM_PROGRAM,
            base_reserve,
            quote_reserve: base_reserve / 2,
        }
    }

    #[test]
    fn test_live_curve_wins_over_pools() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let curve_address = get_bonding_curve_pda(&mint);
        let reader = MapReader(HashMap::from([(curve_address, live_curve_bytes())]));
        let pools = FixedPools(vec![candidate(1_000_000)]);

        let venue = select_venue(&mint, &quote, &reader, &pools).unwrap();
        assert_eq!(venue.kind, VenueKind::BondingCurve);
        assert_eq!(venue.address, curve_address);
        assert_eq!(venue.program_id, PUMPFUN);
    }

    #[test]
    fn test_graduated_curve_falls_through_to_deepest_pool() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let mut bytes = live_curve_bytes();
        bytes[48] = 1; // complete flag
        let reader = MapReader(HashMap::from([(get_bonding_curve_pda(&mint), bytes)]));
        let shallow = candidate(10);
        let deep = candidate(1_000_000);
        let pools = FixedPools(vec![shallow, deep]);

        let venue = select_venue(&mint, &quote, &reader, &pools).unwrap();
        assert_eq!(venue.kind, VenueKind::Pool);
        assert_eq!(venue.address, deep.address);
    }

    #[test]
    fn test_short_curve_buffer_is_treated_as_missing() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let reader = MapReader(HashMap::from([(get_bonding_curve_pda(&mint), vec![0u8; 16])]));
        let pool = candidate(5);
        let pools = FixedPools(vec![pool]);

        let venue = select_venue(&mint, &quote, &reader, &pools).unwrap();
        assert_eq!(venue.kind, VenueKind::Pool);
        assert_eq!(venue.address, pool.address);
    }

    #[test]
    fn test_wrong_discriminator_propagates() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let mut bytes = live_curve_bytes();
        bytes[0] ^= 0xFF;
        let reader = MapReader(HashMap::from([(get_bonding_curve_pda(&mint), bytes)]));
        let pools = FixedPools(vec![candidate(5)]);

        let err = select_venue(&mint, &quote, &reader, &pools).unwrap_err();
        assert!(matches!(err, QuoteError::WrongAccountType { .. }));
    }

    #[test]
    fn test_nothing_available() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let reader = MapReader(HashMap::new());
        let pools = FixedPools(vec![]);

        assert_eq!(
            select_venue(&mint, &quote, &reader, &pools),
            Err(QuoteError::NoVenueAvailable)
        );
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mint = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let reader = MapReader(HashMap::from([(get_bonding_curve_pda(&mint), live_curve_bytes())]));
        let pools = FixedPools(vec![candidate(42)]);

        let first = select_venue(&mint, &quote, &reader, &pools).unwrap();
        let second = select_venue(&mint, &quote, &reader, &pools).unwrap();
        assert_eq!(first, second);
    }
}
