//! Sorted index over a slotted key storage
//!
//! Maintains the sort invariant with O(n) shifts and answers lookups
//! with O(log n) binary search. Acceptable only at the scale where the
//! lookup savings dominate the shift cost; there is deliberately no
//! B-tree or paging here.

use std::cmp::Ordering;

use tracing::debug;

use crate::codec::FixedCodec;
use crate::error::{Result, ShelfError};
use crate::index::key::KeyEntry;
use crate::storage::SlottedStorage;

/// Keeps a key storage sorted ascending by identifier bytes
///
/// Owns the key storage outright. The configured `key_size` is the
/// identifier width; every slot holds the identifier followed by a
/// `u64` data offset, so slots are `key_size + 8` bytes wide.
#[derive(Debug)]
pub struct SortedIndex {
    /// The key storage, sorted ascending by id prefix at all times
    storage: SlottedStorage,

    /// Fixed identifier width this index enforces
    key_size: u16,
}

impl SortedIndex {
    /// Bind an index to a key storage
    ///
    /// The identifier must fit in a slot with room for the data offset.
    pub fn new(storage: SlottedStorage, key_size: u16) -> Result<Self> {
        if key_size == 0 || key_size > storage.item_size() {
            return Err(ShelfError::Config(
                "key size exceeded the item size".to_string(),
            ));
        }

        Ok(Self { storage, key_size })
    }

    /// Fixed identifier width this index enforces
    pub fn key_size(&self) -> u16 {
        self.key_size
    }

    /// Number of entries in the index
    pub fn count(&self) -> Result<u64> {
        self.storage.count()
    }

    /// Lower-bound binary search for `key` over the id prefixes
    ///
    /// Returns `(slot, true)` when an entry's id equals `key`, or
    /// `(insertion_point, false)` where inserting keeps the sort order.
    fn binary_search(&mut self, key: &[u8]) -> Result<(u64, bool)> {
        let mut low = 0u64;
        let mut high = self.storage.count()?;
        let mut probe = vec![0u8; self.key_size as usize];

        while low < high {
            let median = (low + high) / 2;

            // Reading with a key_size buffer yields just the id prefix.
            self.storage.read_slot(&mut probe, median)?;

            match probe.as_slice().cmp(key) {
                Ordering::Less => low = median + 1,
                Ordering::Greater => high = median,
                Ordering::Equal => return Ok((median, true)),
            }
        }

        Ok((low, false))
    }

    /// Insert an entry, keeping the storage sorted by id
    ///
    /// A new id gets a gap opened at its insertion point; a duplicate id
    /// overwrites the existing slot in place, leaving the count
    /// unchanged. Returns the slot the entry was written to.
    pub fn insert(&mut self, entry: &impl FixedCodec) -> Result<u64> {
        let bytes = entry.marshal()?;
        if bytes.len() != self.storage.item_size() as usize {
            return Err(ShelfError::InvalidSliceSize);
        }

        let (slot, found) = self.binary_search(&bytes[..self.key_size as usize])?;

        if !found {
            self.storage.shift_right(slot)?;
        }

        self.storage.write_slot(&bytes, slot)?;
        debug!(slot, duplicate = found, "inserted index entry");

        Ok(slot)
    }

    /// Look up an identifier
    ///
    /// Absence is `None`, not an error. Fails with "invalid key id size"
    /// when the marshaled identifier does not match [`Self::key_size`].
    pub fn find(&mut self, key_id: &impl FixedCodec) -> Result<Option<u64>> {
        let key = key_id.marshal()?;
        if key.len() != self.key_size as usize {
            return Err(ShelfError::InvalidKeyIdSize);
        }

        let (slot, found) = self.binary_search(&key)?;
        if !found {
            return Ok(None);
        }

        Ok(Some(slot))
    }

    /// Remove an identifier's entry, closing the gap it leaves
    ///
    /// Removing an absent identifier is a silent no-op.
    pub fn remove(&mut self, key_id: &impl FixedCodec) -> Result<()> {
        match self.find(key_id)? {
            Some(slot) => {
                self.storage.shift_left(slot)?;
                debug!(slot, "removed index entry");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Read and decode the entry at a key storage slot
    pub fn entry_at(&mut self, slot: u64) -> Result<KeyEntry> {
        let mut buf = vec![0u8; self.storage.item_size() as usize];
        self.storage.read_slot(&mut buf, slot)?;

        let mut entry = KeyEntry::default();
        entry.unmarshal(&buf)?;

        Ok(entry)
    }

    /// Truncate the key storage to zero entries
    pub fn reset(&mut self) -> Result<()> {
        self.storage.reset()
    }

    /// Close the underlying key storage
    pub fn close(self) -> Result<()> {
        self.storage.close()
    }
}
