//! Dynamic-linking shim for `retouch-rs`.
//!
//! Building this crate as a `dylib` lets the main binary link `retouch_internal`
//! dynamically via the `dynamic_linking` feature, instead of statically.

pub use retouch_internal::*;
