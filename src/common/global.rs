//! On-chain fee configuration accounts.
//!
//! Fee rates are mutable program configuration and must be read from these
//! accounts before quoting, never hard-coded. Observed values: 100 bps on
//! the bonding curve, 25 bps LP fee on the pool.

use crate::error::QuoteError;
use crate::parser::{BinaryReader, BinaryWriter};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Anchor discriminator for the PumpFun `Global` account.
pub const GLOBAL_DISCRIMINATOR: [u8; 8] = [167, 232, 232, 177, 200, 108, 114, 127];

/// Anchor discriminator for the PumpSwap `GlobalConfig` account.
pub const GLOBAL_CONFIG_DISCRIMINATOR: [u8; 8] = [149, 8, 156, 202, 160, 252, 176, 217];

/// Fixed `Global` size: discriminator + flag + 2 pubkeys + 5 u64 fields.
pub const GLOBAL_SIZE: usize = 8 + 1 + 2 * 32 + 5 * 8;

/// Fixed `GlobalConfig` size: discriminator + admin + 2 fee u64s + flags
/// + 8 recipient pubkeys.
pub const GLOBAL_CONFIG_SIZE: usize = 8 + 32 + 2 * 8 + 1 + 8 * 32;

/// PumpFun global configuration: launch constants and the bonding-curve fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalAccount {
    pub discriminator: [u8; 8],
    pub initialized: bool,
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub token_total_supply: u64,
    pub fee_basis_points: u64,
}

impl GlobalAccount {
    pub fn decode(data: &[u8]) -> Result<Self, QuoteError> {
        if data.len() < GLOBAL_SIZE {
            return Err(QuoteError::MalformedAccountData {
                expected: GLOBAL_SIZE,
                actual: data.len(),
            });
        }
        let mut reader = BinaryReader::new(data);
        let discriminator = reader.read_discriminator()?;
        if discriminator != GLOBAL_DISCRIMINATOR {
            return Err(QuoteError::wrong_account_type(&GLOBAL_DISCRIMINATOR, &discriminator));
        }
        Ok(Self {
            discriminator,
            initialized: reader.read_bool()?,
            authority: reader.read_pubkey()?,
            fee_recipient: reader.read_pubkey()?,
            initial_virtual_token_reserves: reader.read_u64()?,
            initial_virtual_sol_reserves: reader.read_u64()?,
            initial_real_token_reserves: reader.read_u64()?,
            token_total_supply: reader.read_u64()?,
            fee_basis_points: reader.read_u64()?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_discriminator(&self.discriminator);
        writer.write_bool(self.initialized);
        writer.write_pubkey(&self.authority);
        writer.write_pubkey(&self.fee_recipient);
        writer.write_u64(self.initial_virtual_token_reserves);
        writer.write_u64(self.initial_virtual_sol_reserves);
        writer.write_u64(self.initial_real_token_reserves);
        writer.write_u64(self.token_total_supply);
        writer.write_u64(self.fee_basis_points);
        writer.into_bytes()
    }
}

/// PumpSwap global configuration: pool fees and protocol fee recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfigAccount {
    pub discriminator: [u8; 8],
    pub admin: Pubkey,
    pub lp_fee_basis_points: u64,
    pub protocol_fee_basis_points: u64,
    /// Bit flags disabling pool operations:
    /// bit 0 create pool, bit 1 deposit, bit 2 withdraw, bit 3 buy, bit 4 sell.
    pub disable_flags: u8,
    pub protocol_fee_recipients: [Pubkey; 8],
}

impl GlobalConfigAccount {
    pub fn decode(data: &[u8]) -> Result<Self, QuoteError> {
        if data.len() < GLOBAL_CONFIG_SIZE {
            return Err(QuoteError::MalformedAccountData {
                expected: GLOBAL_CONFIG_SIZE,
                actual: data.len(),
            });
        }
        let mut reader = BinaryReader::new(data);
        let discriminator = reader.read_discriminator()?;
        if discriminator != GLOBAL_CONFIG_DISCRIMINATOR {
            return Err(QuoteError::wrong_account_type(
                &GLOBAL_CONFIG_DISCRIMINATOR,
                &discriminator,
            ));
        }
        let admin = reader.read_pubkey()?;
        let lp_fee_basis_points = reader.read_u64()?;
        let protocol_fee_basis_points = reader.read_u64()?;
        let disable_flags = reader.read_u8()?;
        let mut protocol_fee_recipients = [Pubkey::default(); 8];
        for recipient in &mut protocol_fee_recipients {
            *recipient = reader.read_pubkey()?;
        }
        Ok(Self {
            discriminator,
            admin,
            lp_fee_basis_points,
            protocol_fee_basis_points,
            disable_flags,
            protocol_fee_recipients,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_discriminator(&self.discriminator);
        writer.write_pubkey(&self.admin);
        writer.write_u64(self.lp_fee_basis_points);
        writer.write_u64(self.protocol_fee_basis_points);
        writer.write_u8(self.disable_flags);
        for recipient in &self.protocol_fee_recipients {
            writer.write_pubkey(recipient);
        }
        writer.into_bytes()
    }
}
