//! Key entry definitions
//!
//! A key entry ties an identifier to the data storage slot holding its
//! record.

use bytes::{Buf, BufMut};

use crate::codec::FixedCodec;
use crate::error::{Result, ShelfError};

/// Width of the data offset trailing every key entry, in bytes
pub const KEY_OFFSET_SIZE: u16 = 8;

/// One slot of the key storage: identifier bytes plus the index of the
/// data storage slot the identifier maps to
///
/// The identifier is held in already-marshaled form; the index compares
/// identifiers as raw bytes and never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEntry {
    /// Marshaled identifier bytes
    pub id: Vec<u8>,

    /// Slot index into the data storage
    pub offset: u64,
}

impl KeyEntry {
    /// Create an entry from marshaled identifier bytes and a data offset
    pub fn new(id: Vec<u8>, offset: u64) -> Self {
        Self { id, offset }
    }
}

impl FixedCodec for KeyEntry {
    /// `[id bytes][little-endian u64 offset]`, id width + 8 bytes total
    fn marshal(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.id.len() + KEY_OFFSET_SIZE as usize);
        buf.put_slice(&self.id);
        buf.put_u64_le(self.offset);
        Ok(buf)
    }

    fn unmarshal(&mut self, buf: &[u8]) -> Result<()> {
        // The id width is whatever precedes the trailing offset; an
        // entry with an empty id is never valid.
        if buf.len() <= KEY_OFFSET_SIZE as usize {
            return Err(ShelfError::InvalidSliceSize);
        }

        let (id, mut offset) = buf.split_at(buf.len() - KEY_OFFSET_SIZE as usize);
        self.id = id.to_vec();
        self.offset = offset.get_u64_le();

        Ok(())
    }
}
