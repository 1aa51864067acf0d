//! Prelude module for `retouch_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use retouch_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let mt = Mt19937::new(0x20100806);
//! let filter = TextFilterConfig::default();
//! ```

#[doc(inline)]
pub use crate::file::{
	CharTable, EncodeInput, GyuError, GyuHeader, GyuImage, Mt19937, RetouchError, RldError,
	RldFile, RldSource, TextFilterConfig, TranslationEntry,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
