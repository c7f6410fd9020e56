//! PumpFun program constants and PDA derivation.

use solana_sdk::pubkey::Pubkey;

pub mod seeds {
    pub const GLOBAL_SEED: &[u8] = b"global";
    pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";
    pub const CREATOR_VAULT_SEED: &[u8] = b"creator-vault";
    pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";
}

pub mod accounts {
    use solana_sdk::instruction::AccountMeta;
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// PumpFun bonding curve program.
    pub const PUMPFUN: Pubkey = pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");

    pub const PUMPFUN_META: AccountMeta =
        AccountMeta { pubkey: PUMPFUN, is_signer: false, is_writable: false };
}

/// Global config PDA holding the fee rate and launch constants.
pub fn get_global_pda() -> Pubkey {
    Pubkey::find_program_address(&[seeds::GLOBAL_SEED], &accounts::PUMPFUN).0
}

/// Bonding curve PDA for a token mint; existence of this account is what
/// makes the launch venue eligible.
pub fn get_bonding_curve_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[seeds::BONDING_CURVE_SEED, mint.as_ref()], &accounts::PUMPFUN)
        .0
}

/// Creator fee vault PDA, keyed by the curve's creator.
pub fn get_creator_vault_pda(creator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[seeds::CREATOR_VAULT_SEED, creator.as_ref()],
        &accounts::PUMPFUN,
    )
    .0
}

pub fn get_event_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[seeds::EVENT_AUTHORITY_SEED], &accounts::PUMPFUN).0
}
