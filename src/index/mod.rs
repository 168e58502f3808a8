//! Sorted Index Module
//!
//! Keeps a slotted storage of key entries in ascending identifier order
//! and supports logarithmic lookup.
//!
//! ## Responsibilities
//! - Binary-search lookup by identifier bytes
//! - Shift-based insert/remove that preserves sort order on disk
//! - Mapping identifiers to data storage offsets
//!
//! ## Key Slot Format
//! ```text
//! ┌───────────────────┬──────────────────────┐
//! │ id bytes          │ offset (u64, LE)     │
//! │ id_size           │ 8                    │
//! └───────────────────┴──────────────────────┘
//! ```
//! Slots are kept sorted ascending by raw identifier bytes
//! (lexicographic comparison) after every operation.

mod key;
mod sorted;

pub use key::{KeyEntry, KEY_OFFSET_SIZE};
pub use sorted::SortedIndex;
