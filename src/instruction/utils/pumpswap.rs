//! PumpSwap AMM program constants and PDA derivation.
//!
//! The canonical graduation pool is deterministic: its authority is derived
//! under the PumpFun program from the mint, and the pool address under the
//! AMM program from (index 0, authority, base mint, quote mint).

use crate::instruction::utils::pumpfun;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

pub mod seeds {
    pub const POOL_AUTHORITY_SEED: &[u8] = b"pool-authority";
    pub const POOL_SEED: &[u8] = b"pool";
    pub const LP_MINT_SEED: &[u8] = b"pool_lp_mint";
    pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
    pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";
}

pub mod accounts {
    use solana_sdk::instruction::AccountMeta;
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// PumpSwap AMM program.
    pub const AMM_PROGRAM: Pubkey = pubkey!("pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA");

    pub const AMM_PROGRAM_META: AccountMeta =
        AccountMeta { pubkey: AMM_PROGRAM, is_signer: false, is_writable: false };
}

/// Pool index used for graduation pools.
pub const CANONICAL_POOL_INDEX: u16 = 0;

/// Authority of the canonical graduation pool, derived under the PumpFun
/// program from the token mint.
pub fn get_pool_authority_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[seeds::POOL_AUTHORITY_SEED, mint.as_ref()],
        &pumpfun::accounts::PUMPFUN,
    )
    .0
}

/// Pool account PDA for (index, authority, base, quote). The index is
/// encoded as 2 little-endian bytes, matching the account layout.
pub fn get_pool_pda(
    index: u16,
    authority: &Pubkey,
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            seeds::POOL_SEED,
            &index.to_le_bytes(),
            authority.as_ref(),
            base_mint.as_ref(),
            quote_mint.as_ref(),
        ],
        &accounts::AMM_PROGRAM,
    )
    .0
}

/// Canonical graduation pool for a mint, quoted against WSOL at index 0.
pub fn get_canonical_pool_pda(base_mint: &Pubkey, quote_mint: &Pubkey) -> Pubkey {
    let authority = get_pool_authority_pda(base_mint);
    get_pool_pda(CANONICAL_POOL_INDEX, &authority, base_mint, quote_mint)
}

pub fn get_lp_mint_pda(pool: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[seeds::LP_MINT_SEED, pool.as_ref()], &accounts::AMM_PROGRAM).0
}

pub fn get_global_config_pda() -> Pubkey {
    Pubkey::find_program_address(&[seeds::GLOBAL_CONFIG_SEED], &accounts::AMM_PROGRAM).0
}

pub fn get_event_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[seeds::EVENT_AUTHORITY_SEED], &accounts::AMM_PROGRAM).0
}

/// Associated token account for an owner and mint under the given token
/// program (classic or Token-2022).
pub fn get_token_account(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
