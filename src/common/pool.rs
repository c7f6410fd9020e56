//! PumpSwap pool account and SPL token (vault) account layouts.
//!
//! The pool account records the mints and vault addresses; live reserves
//! come from decoding the two vault token accounts separately.

use crate::error::QuoteError;
use crate::parser::{BinaryReader, BinaryWriter};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Anchor discriminator for the PumpSwap `Pool` account.
pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];

/// Fixed pool account size: discriminator + bump + index + 6 pubkeys + lp supply.
pub const POOL_SIZE: usize = 8 + 1 + 2 + 6 * 32 + 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAccount {
    pub discriminator: [u8; 8],
    pub pool_bump: u8,
    pub index: u16,
    pub creator: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub pool_base_token_account: Pubkey,
    pub pool_quote_token_account: Pubkey,
    pub lp_supply: u64,
}

impl PoolAccount {
    pub fn decode(data: &[u8]) -> Result<Self, QuoteError> {
        if data.len() < POOL_SIZE {
            return Err(QuoteError::MalformedAccountData {
                expected: POOL_SIZE,
                actual: data.len(),
            });
        }
        let mut reader = BinaryReader::new(data);
        let discriminator = reader.read_discriminator()?;
        if discriminator != POOL_DISCRIMINATOR {
            return Err(QuoteError::wrong_account_type(&POOL_DISCRIMINATOR, &discriminator));
        }
        Ok(Self {
            discriminator,
            pool_bump: reader.read_u8()?,
            index: reader.read_u16()?,
            creator: reader.read_pubkey()?,
            base_mint: reader.read_pubkey()?,
            quote_mint: reader.read_pubkey()?,
            lp_mint: reader.read_pubkey()?,
            pool_base_token_account: reader.read_pubkey()?,
            pool_quote_token_account: reader.read_pubkey()?,
            lp_supply: reader.read_u64()?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(POOL_SIZE);
        writer.write_discriminator(&self.discriminator);
        writer.write_u8(self.pool_bump);
        writer.write_u16(self.index);
        writer.write_pubkey(&self.creator);
        writer.write_pubkey(&self.base_mint);
        writer.write_pubkey(&self.quote_mint);
        writer.write_pubkey(&self.lp_mint);
        writer.write_pubkey(&self.pool_base_token_account);
        writer.write_pubkey(&self.pool_quote_token_account);
        writer.write_u64(self.lp_supply);
        writer.into_bytes()
    }
}

/// SPL token account as stored in the pool vaults.
///
/// The three optional fields carry a 1-byte presence flag; the codec copies
/// the mint/owner keys without validating curve membership, which is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplTokenAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub state: u8,
    pub is_native: Option<u64>,
    pub delegated_amount: u64,
    pub close_authority: Option<Pubkey>,
}

impl SplTokenAccount {
    pub fn decode(data: &[u8]) -> Result<Self, QuoteError> {
        let mut reader = BinaryReader::new(data);
        Ok(Self {
            mint: reader.read_pubkey()?,
            owner: reader.read_pubkey()?,
            amount: reader.read_u64()?,
            delegate: reader.read_option_pubkey()?,
            state: reader.read_u8()?,
            is_native: reader.read_option_u64()?,
            delegated_amount: reader.read_u64()?,
            close_authority: reader.read_option_pubkey()?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_pubkey(&self.mint);
        writer.write_pubkey(&self.owner);
        writer.write_u64(self.amount);
        writer.write_option_pubkey(self.delegate.as_ref());
        writer.write_u8(self.state);
        writer.write_option_u64(self.is_native);
        writer.write_u64(self.delegated_amount);
        writer.write_option_pubkey(self.close_authority.as_ref());
        writer.into_bytes()
    }
}
