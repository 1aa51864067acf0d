//! This crate provides the core codecs for the `retouch-rs` project.
//!
//! # File Formats
//!
//! - **GYU**: proprietary raster image container (LZSS/LZSS2 compression, MT19937-seeded
//!   byte shuffling, palette/alpha variants)
//! - **RLD**: encrypted scenario bytecode container (MT19937-seeded keystream XOR,
//!   command-stream parsing, translatable-text extraction)
//!
//! # Examples
//!
//! ```rust
//! use retouch_types::file::{Mt19937, TextFilterConfig};
//!
//! let mut mt = Mt19937::new(0x20100806);
//! let _ = mt.next_u32();
//!
//! let filter = TextFilterConfig::default();
//! assert!(filter.is_translatable("こんにちは"));
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use file::{
	CharTable, EncodeInput, GyuError, GyuHeader, GyuImage, Mt19937, RetouchError, RldError,
	RldFile, RldSource, TextFilterConfig, TranslationEntry,
};
