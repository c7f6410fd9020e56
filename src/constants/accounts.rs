use solana_sdk::instruction::AccountMeta;
use solana_sdk::{pubkey, pubkey::Pubkey};

/// SPL Token program
pub const TOKEN_PROGRAM: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Token2022 program
pub const TOKEN_PROGRAM_2022: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// Associated Token program
pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// System program
pub const SYSTEM_PROGRAM: Pubkey = pubkey!("11111111111111111111111111111111");

/// Rent sysvar
pub const SYSVAR_RENT: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

// META

pub const TOKEN_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: TOKEN_PROGRAM, is_signer: false, is_writable: false };

pub const TOKEN_PROGRAM_2022_META: AccountMeta =
    AccountMeta { pubkey: TOKEN_PROGRAM_2022, is_signer: false, is_writable: false };

pub const ASSOCIATED_TOKEN_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: ASSOCIATED_TOKEN_PROGRAM, is_signer: false, is_writable: false };

pub const SYSTEM_PROGRAM_META: AccountMeta =
    AccountMeta { pubkey: SYSTEM_PROGRAM, is_signer: false, is_writable: false };

pub const RENT_META: AccountMeta =
    AccountMeta { pubkey: SYSVAR_RENT, is_signer: false, is_writable: false };
