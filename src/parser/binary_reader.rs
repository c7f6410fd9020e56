//! Fixed-offset binary codec for on-chain account layouts.
//!
//! All multi-byte integers are little-endian. Optional fields use a 1-byte
//! presence flag followed by the value, matching the SPL token account
//! delegate/close-authority encoding. Discriminators are opaque 8-byte
//! prefixes: copied verbatim, never interpreted here.

use crate::error::QuoteError;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    fn check_bounds(&self, length: usize) -> Result<(), QuoteError> {
        if self.offset + length > self.buffer.len() {
            Err(QuoteError::MalformedAccountData {
                expected: self.offset + length,
                actual: self.buffer.len(),
            })
        } else {
            Ok(())
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, QuoteError> {
        self.check_bounds(1)?;
        let value = self.buffer[self.offset];
        self.offset += 1;
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool, QuoteError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16, QuoteError> {
        self.check_bounds(2)?;
        let value = u16::from_le_bytes([self.buffer[self.offset], self.buffer[self.offset + 1]]);
        self.offset += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, QuoteError> {
        self.check_bounds(4)?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buffer[self.offset..self.offset + 4]);
        self.offset += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn read_u64(&mut self) -> Result<u64, QuoteError> {
        self.check_bounds(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.offset..self.offset + 8]);
        self.offset += 8;
        Ok(u64::from_le_bytes(bytes))
    }

    pub fn read_i64(&mut self) -> Result<i64, QuoteError> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads the 8-byte account discriminator. The bytes are forwarded,
    /// not interpreted; loaders compare them against known constants.
    pub fn read_discriminator(&mut self) -> Result<[u8; 8], QuoteError> {
        self.check_bounds(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.offset..self.offset + 8]);
        self.offset += 8;
        Ok(bytes)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, QuoteError> {
        self.check_bounds(32)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.buffer[self.offset..self.offset + 32]);
        self.offset += 32;
        Ok(Pubkey::new_from_array(bytes))
    }

    /// Reads a 1-byte presence flag followed by a pubkey when present.
    pub fn read_option_pubkey(&mut self) -> Result<Option<Pubkey>, QuoteError> {
        if self.read_bool()? { Ok(Some(self.read_pubkey()?)) } else { Ok(None) }
    }

    /// Reads a 1-byte presence flag followed by a u64 when present.
    pub fn read_option_u64(&mut self) -> Result<Option<u64>, QuoteError> {
        if self.read_bool()? { Ok(Some(self.read_u64()?)) } else { Ok(None) }
    }

    pub fn skip(&mut self, length: usize) -> Result<(), QuoteError> {
        self.check_bounds(length)?;
        self.offset += length;
        Ok(())
    }
}

/// Mirror of [`BinaryReader`]; every `write_*` produces exactly the bytes
/// the corresponding `read_*` consumes, so `decode(encode(x)) == x` holds
/// for all fixed-layout schemas in this crate.
#[derive(Debug, Clone, Default)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buffer.push(u8::from(value));
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_discriminator(&mut self, value: &[u8; 8]) {
        self.buffer.extend_from_slice(value);
    }

    pub fn write_pubkey(&mut self, value: &Pubkey) {
        self.buffer.extend_from_slice(value.as_ref());
    }

    pub fn write_option_pubkey(&mut self, value: Option<&Pubkey>) {
        match value {
            Some(key) => {
                self.write_bool(true);
                self.write_pubkey(key);
            },
            None => self.write_bool(false),
        }
    }

    pub fn write_option_u64(&mut self, value: Option<u64>) {
        match value {
            Some(amount) => {
                self.write_bool(true);
                self.write_u64(amount);
            },
            None => self.write_bool(false),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
