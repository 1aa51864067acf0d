//! File format support for the `retouch-rs` project.

mod error;

pub mod gyu;
pub mod lzss;
pub mod lzss2;
pub mod mt19937;
pub mod rld;
pub mod text_filter;

// Re-export unified error types
pub use error::{GyuError, RetouchError, RldError};

// Re-export main file types
pub use gyu::{EncodeInput, GyuImage, Header as GyuHeader};
pub use mt19937::Mt19937;
pub use rld::{CharTable, RldFile, Source as RldSource, TranslationEntry};
pub use text_filter::TextFilterConfig;
