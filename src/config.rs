//! Configuration for shelfdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::index::KEY_OFFSET_SIZE;

/// Configuration for a single collection
///
/// The widths here define the on-disk layout: the `data` file is a flat
/// array of `item_size`-byte slots, the `key` file a flat array of
/// `(id_size + 8)`-byte slots. Neither file carries a header, so the
/// widths must match whatever the files were written with — there is no
/// way to detect a mismatch after the fact.
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the collection's two files:
    ///   {data_dir}/
    ///     ├── data    (fixed-width record slots)
    ///     └── key     (sorted id → offset slots)
    pub data_dir: PathBuf,

    /// Width of a serialized record in the data file, in bytes
    pub item_size: u16,

    /// Width of a serialized identifier in the key file, in bytes
    pub id_size: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./shelfdb_data"),
            item_size: 256,
            id_size: 16, // UUID width
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Width of a key file slot: identifier bytes plus the u64 data offset
    pub fn key_size(&self) -> u16 {
        self.id_size + KEY_OFFSET_SIZE
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory holding the collection files
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the serialized record width (in bytes)
    pub fn item_size(mut self, size: u16) -> Self {
        self.config.item_size = size;
        self
    }

    /// Set the serialized identifier width (in bytes)
    pub fn id_size(mut self, size: u16) -> Self {
        self.config.id_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
