//! Fixed-width binary codec contract
//!
//! Records and identifiers enter and leave the store as raw bytes of a
//! width agreed with the owning collection. The store never interprets
//! those bytes beyond lexicographic comparison of identifiers; the size
//! contract is enforced at the call boundary, not assumed.

use crate::error::Result;

/// Capability required of anything stored in or used to address a
/// collection: marshal to a fixed number of bytes and unmarshal back.
///
/// Implementations must produce exactly the width agreed with the owning
/// collection (`item_size` for records, the index's `key_size` for
/// identifiers) and fail with `InvalidSliceSize` when handed a slice of
/// any other length.
pub trait FixedCodec {
    /// Serialize to the type's fixed byte width.
    fn marshal(&self) -> Result<Vec<u8>>;

    /// Deserialize in place from a slice of exactly the fixed width.
    fn unmarshal(&mut self, buf: &[u8]) -> Result<()>;
}
