//! Swap instruction payload: `[8B discriminator][8B LE u64][8B LE i64]`.
//!
//! Both venues expose the same Anchor method names, so the buy and sell
//! discriminators are shared between the bonding-curve and pool programs.
//! The two amount slots carry zero sentinels on the wire: a zero desired
//! output encodes as `u64::MAX` ("take whatever fills the cap") and a zero
//! spend cap as `-1` ("no cap"). Both zero at once is meaningless and is
//! rejected before anything touches the wire.

use crate::error::QuoteError;
use crate::parser::{BinaryReader, BinaryWriter};
use serde::{Deserialize, Serialize};

/// Anchor discriminator for the `buy` instruction (hex `66063d1201daebea`).
pub const BUY_INSTRUCTION_DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];

/// Anchor discriminator for the `sell` instruction (hex `33e685a4017f83ad`).
pub const SELL_INSTRUCTION_DISCRIMINATOR: [u8; 8] = [51, 230, 133, 164, 1, 127, 131, 173];

/// Wire length of every swap payload.
pub const SWAP_PAYLOAD_SIZE: usize = 8 + 8 + 8;

/// Decoded swap payload with the sentinel interpretation applied: a zero
/// `desired_output` or `limit` here means "unbounded on that side".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPayload {
    pub discriminator: [u8; 8],
    pub desired_output: u64,
    pub limit: u64,
}

/// Packs a swap payload, applying the zero sentinels.
pub fn pack_swap_payload(
    discriminator: &[u8; 8],
    desired_output: u64,
    limit: u64,
) -> Result<Vec<u8>, QuoteError> {
    if desired_output == 0 && limit == 0 {
        return Err(QuoteError::AmbiguousZeroAmounts);
    }
    // The limit rides in a signed slot; a value that would wrap negative
    // would alias the "no cap" sentinel.
    let wire_limit: i64 = if limit == 0 {
        -1
    } else {
        i64::try_from(limit).map_err(|_| QuoteError::InvalidAmount)?
    };
    let wire_output = if desired_output == 0 { u64::MAX } else { desired_output };

    let mut writer = BinaryWriter::with_capacity(SWAP_PAYLOAD_SIZE);
    writer.write_discriminator(discriminator);
    writer.write_u64(wire_output);
    writer.write_i64(wire_limit);
    Ok(writer.into_bytes())
}

/// Unpacks a swap payload, mapping the wire sentinels back to zero.
pub fn unpack_swap_payload(data: &[u8]) -> Result<SwapPayload, QuoteError> {
    let mut reader = BinaryReader::new(data);
    let discriminator = reader.read_discriminator()?;
    let wire_output = reader.read_u64()?;
    let wire_limit = reader.read_i64()?;

    let desired_output = if wire_output == u64::MAX { 0 } else { wire_output };
    let limit = if wire_limit == -1 { 0 } else { wire_limit as u64 };
    Ok(SwapPayload { discriminator, desired_output, limit })
}
