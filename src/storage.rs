//! Slotted Storage
//!
//! A fixed-width record array persisted in a single file.
//!
//! ## Responsibilities
//! - Random access to records by slot index
//! - Shifting a contiguous range of slots left or right
//! - Slot accounting derived purely from file length
//!
//! ## File Format
//! ```text
//! ┌──────────┬──────────┬──────────┬─────┐
//! │ Slot 0   │ Slot 1   │ Slot 2   │ ... │
//! │ item_size│ item_size│ item_size│     │
//! └──────────┴──────────┴──────────┴─────┘
//! ```
//! No header, magic, or version — slot `i` occupies bytes
//! `[i * item_size, (i + 1) * item_size)` and the slot count is
//! `file_length / item_size`. Every mutating operation keeps the file
//! length an exact multiple of `item_size`.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::trace;

use crate::error::{Result, ShelfError};

/// Fixed-width random-access record array over one file
///
/// Owns exactly one open file handle, acquired at [`SlottedStorage::open`]
/// and released by [`SlottedStorage::close`] (or on drop). All I/O is
/// synchronous and blocking; the storage performs no internal locking, so
/// callers must serialize mutating access.
#[derive(Debug)]
pub struct SlottedStorage {
    /// The backing file, positioned per-operation via seek
    file: File,

    /// Width of one slot in bytes
    item_size: u16,
}

impl SlottedStorage {
    /// Open or create a slotted storage file
    pub fn open(path: &Path, item_size: u16) -> Result<Self> {
        if item_size == 0 {
            return Err(ShelfError::Config(
                "item size must be non-zero".to_string(),
            ));
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| ShelfError::io("opening storage file failed", e))?;

        Ok(Self { file, item_size })
    }

    /// Width of one slot in bytes
    pub fn item_size(&self) -> u16 {
        self.item_size
    }

    /// Read exactly `buf.len()` bytes starting at the slot's byte offset
    ///
    /// A buffer shorter than the item size reads a prefix of the slot
    /// (the index uses this to compare identifier prefixes without
    /// reading whole entries). A buffer longer than the item size is
    /// rejected before any I/O happens.
    pub fn read_slot(&mut self, buf: &mut [u8], slot: u64) -> Result<()> {
        if buf.len() > self.item_size as usize {
            return Err(ShelfError::SliceExceedsItemSize);
        }

        self.file
            .seek(SeekFrom::Start(slot * self.item_size as u64))
            .map_err(|e| ShelfError::io("read from storage by offset failed", e))?;
        self.file
            .read_exact(buf)
            .map_err(|e| ShelfError::io("read from storage by offset failed", e))?;

        Ok(())
    }

    /// Write `buf` starting at the slot's byte offset
    ///
    /// Writing at slot index == count grows the storage by one slot.
    /// Same length constraint as [`SlottedStorage::read_slot`].
    pub fn write_slot(&mut self, buf: &[u8], slot: u64) -> Result<()> {
        if buf.len() > self.item_size as usize {
            return Err(ShelfError::SliceExceedsItemSize);
        }

        self.file
            .seek(SeekFrom::Start(slot * self.item_size as u64))
            .map_err(|e| ShelfError::io("write to storage by offset failed", e))?;
        self.file
            .write_all(buf)
            .map_err(|e| ShelfError::io("write to storage by offset failed", e))?;

        Ok(())
    }

    /// Current slot count, derived from the file length
    pub fn count(&self) -> Result<u64> {
        let meta = self
            .file
            .metadata()
            .map_err(|e| ShelfError::io("counting items in storage failed", e))?;

        Ok(meta.len() / self.item_size as u64)
    }

    /// Truncate the storage to zero slots
    pub fn reset(&mut self) -> Result<()> {
        self.file
            .set_len(0)
            .map_err(|e| ShelfError::io("resetting storage failed", e))?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| ShelfError::io("resetting storage failed", e))?;

        Ok(())
    }

    /// Open a gap at `target` by moving slots `[target, count)` one
    /// position right, growing the storage by one slot
    ///
    /// Slots are moved in descending index order so each one is read
    /// before the shift overwrites it. Used before inserting at `target`.
    pub fn shift_right(&mut self, target: u64) -> Result<()> {
        let count = self.count()?;
        trace!(target, count, "shifting slots right");

        let mut buf = vec![0u8; self.item_size as usize];
        let mut slot = count;
        while slot > target {
            self.read_slot(&mut buf, slot - 1)?;
            self.write_slot(&buf, slot)?;
            slot -= 1;
        }

        Ok(())
    }

    /// Close the gap at `target` by moving slots `[target + 1, count)`
    /// one position left, then truncating the file by one slot
    ///
    /// Slots are moved in ascending index order. No-op when the storage
    /// is empty. Used after removing the record at `target`.
    pub fn shift_left(&mut self, target: u64) -> Result<()> {
        let count = self.count()?;
        if count == 0 {
            return Ok(());
        }
        trace!(target, count, "shifting slots left");

        let mut buf = vec![0u8; self.item_size as usize];
        for slot in target + 1..count {
            self.read_slot(&mut buf, slot)?;
            self.write_slot(&buf, slot - 1)?;
        }

        self.file
            .set_len((count - 1) * self.item_size as u64)
            .map_err(|e| ShelfError::io("truncating storage failed", e))?;

        Ok(())
    }

    /// Sync outstanding writes and release the file handle
    ///
    /// Dropping the storage also releases the handle, but without
    /// surfacing sync errors; call this on the happy path.
    pub fn close(self) -> Result<()> {
        self.file
            .sync_all()
            .map_err(|e| ShelfError::io("syncing storage file failed", e))?;

        Ok(())
    }
}
