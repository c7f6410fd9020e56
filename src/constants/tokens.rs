use solana_sdk::{pubkey, pubkey::Pubkey};

/// Wrapped SOL mint
pub const WSOL_TOKEN_ACCOUNT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

/// Lamports per SOL (SOL has 9 decimals)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
