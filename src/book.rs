//! Reference record and identifier types
//!
//! A small book catalog — the domain the integration tests and the demo
//! binary store. Also doubles as a worked example of implementing
//! [`FixedCodec`] for a custom record type.

use std::fmt;

use bytes::{Buf, BufMut};
use uuid::Uuid;

use crate::codec::FixedCodec;
use crate::error::{Result, ShelfError};

/// Bytes reserved for the title, including the trailing NUL padding
pub const BOOK_TITLE_SIZE: usize = 128;

/// Serialized width of a [`Book`]: NUL-padded title plus a u32 year
pub const BOOK_SIZE: usize = BOOK_TITLE_SIZE + 4;

/// Serialized width of a [`BookId`] (a UUID)
pub const BOOK_ID_SIZE: usize = 16;

/// A book record
///
/// Serialized as `[title bytes, NUL-padded to 128][year u32, LE]`.
/// Titles longer than 127 bytes are truncated on marshal so at least one
/// NUL terminator always survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub year: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, year: u32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl FixedCodec for Book {
    fn marshal(&self) -> Result<Vec<u8>> {
        let title = self.title.as_bytes();
        let len = title.len().min(BOOK_TITLE_SIZE - 1);

        let mut buf = Vec::with_capacity(BOOK_SIZE);
        buf.put_slice(&title[..len]);
        buf.put_bytes(0, BOOK_TITLE_SIZE - len);
        buf.put_u32_le(self.year);

        Ok(buf)
    }

    fn unmarshal(&mut self, buf: &[u8]) -> Result<()> {
        if buf.len() != BOOK_SIZE {
            return Err(ShelfError::InvalidSliceSize);
        }

        let (title, mut year) = buf.split_at(BOOK_TITLE_SIZE);
        let end = title.iter().position(|&b| b == 0).unwrap_or(BOOK_TITLE_SIZE);

        self.title = String::from_utf8_lossy(&title[..end]).into_owned();
        self.year = year.get_u32_le();

        Ok(())
    }
}

/// Identifier for a [`Book`]: a 16-byte UUID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh random (v4) identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FixedCodec for BookId {
    fn marshal(&self) -> Result<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }

    fn unmarshal(&mut self, buf: &[u8]) -> Result<()> {
        let id = Uuid::from_slice(buf).map_err(|_| ShelfError::InvalidSliceSize)?;
        self.0 = id;

        Ok(())
    }
}
