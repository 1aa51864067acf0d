//! Internal crate for `retouch-rs`.
//!
//! This module is separated into its own crate to enable simple dynamic linking for the
//! main binary, and should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use retouch_internal::prelude::*;
//!
//! // All commonly used types are available
//! let mt = Mt19937::new(0x20100806);
//! let filter = TextFilterConfig::default();
//! assert!(filter.is_translatable("こんにちは"));
//! ```

/// `use retouch_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export retouch_types for convenience
pub use retouch_types;
