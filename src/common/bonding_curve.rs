//! Bonding curve account for the PumpFun program.
//!
//! The bonding curve account holds the virtual and real reserves used for
//! launch-phase pricing. Two layouts exist on chain: the legacy 49-byte
//! layout and the newer layout with a trailing 32-byte creator key. Both
//! must decode; detection is by buffer length.

use crate::error::QuoteError;
use crate::parser::{BinaryReader, BinaryWriter};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Anchor discriminator for the `BondingCurve` account.
pub const BONDING_CURVE_DISCRIMINATOR: [u8; 8] = [23, 183, 248, 55, 96, 216, 172, 96];

/// Minimum account size: discriminator + 5 u64 fields + complete flag.
pub const BONDING_CURVE_MIN_SIZE: usize = 8 + 5 * 8 + 1;

/// Account size with the trailing creator key.
pub const BONDING_CURVE_CREATOR_SIZE: usize = BONDING_CURVE_MIN_SIZE + 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondingCurveAccount {
    /// Raw discriminator bytes, preserved verbatim on round trip.
    pub discriminator: [u8; 8],
    /// Virtual token reserves used for price calculations
    pub virtual_token_reserves: u64,
    /// Virtual SOL reserves used for price calculations
    pub virtual_sol_reserves: u64,
    /// Actual token reserves available for trading
    pub real_token_reserves: u64,
    /// Actual SOL reserves available for trading
    pub real_sol_reserves: u64,
    /// Total supply of tokens
    pub token_total_supply: u64,
    /// Whether the bonding curve has completed (graduated to the pool)
    pub complete: bool,
    /// Creator key, present only in the newer layout
    pub creator: Option<Pubkey>,
}

impl BondingCurveAccount {
    /// Decodes a bonding curve account from raw account bytes.
    ///
    /// A buffer shorter than the 49-byte minimum is reported as
    /// [`QuoteError::MalformedAccountData`] (missing or uninitialized
    /// account); a known-length buffer with the wrong discriminator is
    /// [`QuoteError::WrongAccountType`].
    pub fn decode(data: &[u8]) -> Result<Self, QuoteError> {
        // Length first: a buffer too short to hold the schema is a missing
        // or uninitialized account, whatever its leading bytes contain.
        if data.len() < BONDING_CURVE_MIN_SIZE {
            return Err(QuoteError::MalformedAccountData {
                expected: BONDING_CURVE_MIN_SIZE,
                actual: data.len(),
            });
        }
        let mut reader = BinaryReader::new(data);
        let discriminator = reader.read_discriminator()?;
        if discriminator != BONDING_CURVE_DISCRIMINATOR {
            return Err(QuoteError::wrong_account_type(
                &BONDING_CURVE_DISCRIMINATOR,
                &discriminator,
            ));
        }
        let virtual_token_reserves = reader.read_u64()?;
        let virtual_sol_reserves = reader.read_u64()?;
        let real_token_reserves = reader.read_u64()?;
        let real_sol_reserves = reader.read_u64()?;
        let token_total_supply = reader.read_u64()?;
        let complete = reader.read_bool()?;
        // Newer layout appends the creator key; detect by remaining length.
        let creator = if reader.remaining() >= 32 { Some(reader.read_pubkey()?) } else { None };

        Ok(Self {
            discriminator,
            virtual_token_reserves,
            virtual_sol_reserves,
            real_token_reserves,
            real_sol_reserves,
            token_total_supply,
            complete,
            creator,
        })
    }

    /// Encodes back into the exact on-chain layout the account decoded from.
    pub fn encode(&self) -> Vec<u8> {
        let size = if self.creator.is_some() {
            BONDING_CURVE_CREATOR_SIZE
        } else {
            BONDING_CURVE_MIN_SIZE
        };
        let mut writer = BinaryWriter::with_capacity(size);
        writer.write_discriminator(&self.discriminator);
        writer.write_u64(self.virtual_token_reserves);
        writer.write_u64(self.virtual_sol_reserves);
        writer.write_u64(self.real_token_reserves);
        writer.write_u64(self.real_sol_reserves);
        writer.write_u64(self.token_total_supply);
        writer.write_bool(self.complete);
        if let Some(creator) = &self.creator {
            writer.write_pubkey(creator);
        }
        writer.into_bytes()
    }
}
