#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `retouch-rs` decodes and encodes the proprietary `GYU` image container and
//! decrypts/parses the `RLD` scenario container used by the Retouch visual-novel
//! engine, reverse-engineered from the original game's executables.
//!
//! See [`retouch_types::file`] for the codec implementations and
//! [`retouch_types::prelude`] for the commonly used types.

pub use retouch_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use retouch_dylib;
