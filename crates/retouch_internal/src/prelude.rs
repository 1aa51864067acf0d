//! Prelude module for `retouch_internal`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```rust
//! use retouch_internal::prelude::*;
//!
//! let mt = Mt19937::new(0x20100806);
//! let filter = TextFilterConfig::default();
//! assert!(filter.is_translatable("こんにちは"));
//! ```

// Re-export everything from retouch_types::prelude
#[doc(inline)]
pub use retouch_types::prelude::*;

// Re-export the entire retouch_types module for advanced usage
#[doc(inline)]
pub use retouch_types;
