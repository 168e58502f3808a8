//! # shelfdb
//!
//! A minimal embedded record store:
//! - Fixed-width records in a flat data file, addressed by slot index
//! - A second flat file holding a sorted index of identifiers
//! - Binary-search lookup, shift-based insert/delete that preserves the
//!   on-disk sort order
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Collection                              │
//! │              (keyed put / get / remove)                      │
//! └───────────┬─────────────────────────────────┬───────────────┘
//!             │                                 │
//!             ▼                                 │
//!      ┌─────────────┐                          │
//!      │ SortedIndex │                          │
//!      │ (bin search │                          │
//!      │  + shifts)  │                          │
//!      └──────┬──────┘                          │
//!             │                                 │
//!             ▼                                 ▼
//!      ┌─────────────┐                   ┌─────────────┐
//!      │ SlottedStorage                  │ SlottedStorage
//!      │  ("key" file)│                  │ ("data" file)│
//!      └─────────────┘                   └─────────────┘
//! ```
//!
//! A key slot stores `[id bytes][u64 data offset]`; the offset addresses
//! the slot in the data file holding the record. Exactly-sized marshal
//! and unmarshal are the only contract record and identifier types must
//! satisfy — see [`codec::FixedCodec`].
//!
//! There is no WAL, no crash recovery, no internal locking, and no
//! compaction of data slots orphaned by removals. Callers must serialize
//! mutating access to a [`Collection`].

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod storage;
pub mod index;
pub mod collection;
pub mod book;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use codec::FixedCodec;
pub use storage::SlottedStorage;
pub use index::{KeyEntry, SortedIndex};
pub use collection::Collection;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of shelfdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
