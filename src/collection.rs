//! Collection Module
//!
//! Keyed CRUD over a domain record type.
//!
//! ## Responsibilities
//! - Map an external identifier to a slot in the data storage via the
//!   sorted index
//! - Append new records, overwrite updated ones in place
//! - Own both storages and the index for its lifetime
//!
//! ## Known limitation
//! The data storage only grows: removing a key leaves the data slot it
//! pointed to as permanently unreferenced dead space. There is no
//! compaction in this design.

use std::fs;

use tracing::debug;

use crate::codec::FixedCodec;
use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::index::{KeyEntry, SortedIndex};
use crate::storage::SlottedStorage;

/// One collection: a data storage plus a sorted index over a key storage
///
/// ## Concurrency model
///
/// Every operation is synchronous, blocking, and runs to completion; the
/// collection performs no internal locking. The two writes a `put` of a
/// new record makes (data append, then key insert) are not atomic with
/// respect to each other, so concurrent mutating callers can corrupt the
/// sort invariant or the offset mapping. The embedding application must
/// serialize all mutating access to a collection, e.g. behind a mutex
/// held for each logical operation.
pub struct Collection {
    /// Collection configuration
    config: Config,

    /// Domain records, addressed by slot index, no ordering invariant
    data: SlottedStorage,

    /// Sorted id → data offset index over the key storage
    index: SortedIndex,
}

impl Collection {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const DATA_FILENAME: &'static str = "data";
    const KEY_FILENAME: &'static str = "key";

    /// Open or create a collection in the configured directory
    ///
    /// Creates the directory if needed, then opens the two backing files
    /// (`data` and `key`) with the configured widths.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(|e| ShelfError::io("creating collection directory failed", e))?;

        let data_path = config.data_dir.join(Self::DATA_FILENAME);
        let key_path = config.data_dir.join(Self::KEY_FILENAME);

        let data = SlottedStorage::open(&data_path, config.item_size)?;
        let keys = SlottedStorage::open(&key_path, config.key_size())?;
        let index = SortedIndex::new(keys, config.id_size)?;

        debug!(dir = %config.data_dir.display(), "opened collection");

        Ok(Self {
            config,
            data,
            index,
        })
    }

    /// Store a record under an identifier
    ///
    /// A new identifier appends the record to the data storage and
    /// inserts a key entry pointing at it. An existing identifier
    /// overwrites the record in place at its stored offset — the data
    /// storage does not grow on update.
    pub fn put(&mut self, id: &impl FixedCodec, item: &impl FixedCodec) -> Result<()> {
        let bytes = item.marshal()?;
        if bytes.len() != self.data.item_size() as usize {
            return Err(ShelfError::InvalidSliceSize);
        }

        match self.index.find(id)? {
            None => {
                // Append at the current end of the data storage, then
                // index the new slot.
                let data_offset = self.data.count()?;
                self.data.write_slot(&bytes, data_offset)?;

                let entry = KeyEntry::new(id.marshal()?, data_offset);
                self.index.insert(&entry)?;

                debug!(offset = data_offset, "stored new record");
            }
            Some(key_slot) => {
                let entry = self.index.entry_at(key_slot)?;
                self.data.write_slot(&bytes, entry.offset)?;

                debug!(offset = entry.offset, "updated record in place");
            }
        }

        Ok(())
    }

    /// Load the record stored under an identifier into `item`
    ///
    /// Fails with "item not found" when the identifier is absent.
    pub fn get(&mut self, id: &impl FixedCodec, item: &mut impl FixedCodec) -> Result<()> {
        let key_slot = self.index.find(id)?.ok_or(ShelfError::ItemNotFound)?;
        let entry = self.index.entry_at(key_slot)?;

        let mut buf = vec![0u8; self.data.item_size() as usize];
        self.data.read_slot(&mut buf, entry.offset)?;

        item.unmarshal(&buf)
    }

    /// Remove an identifier's entry from the index
    ///
    /// Removing an absent identifier is a silent no-op. The data slot
    /// the key pointed to is not reclaimed (see the module docs).
    pub fn remove(&mut self, id: &impl FixedCodec) -> Result<()> {
        self.index.remove(id)
    }

    /// Number of live entries (= key storage slots)
    pub fn count(&self) -> Result<u64> {
        self.index.count()
    }

    /// Truncate both storages to zero slots
    pub fn reset(&mut self) -> Result<()> {
        self.index.reset()?;
        self.data.reset()
    }

    /// Close both underlying storages
    ///
    /// Both are always closed; when both fail, the data storage's error
    /// is the one reported.
    pub fn close(self) -> Result<()> {
        let data_result = self.data.close();
        let key_result = self.index.close();

        data_result.and(key_result)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
