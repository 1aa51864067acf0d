//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when decoding or encoding `GYU` images.
#[derive(Debug, Error)]
pub enum GyuError {
	/// File does not begin with the expected `GYU\x1A` magic.
	#[error("not a GYU file: expected magic `GYU\\x1A`")]
	BadMagic,

	/// On encode, bpp was not one of the supported values.
	#[error("unsupported bits-per-pixel for encode: {0} (expected 8, 24, or 32)")]
	UnsupportedBpp(u16),

	/// 8-bit decode with an empty palette.
	#[error("8-bit image declares zero palette colors")]
	MissingPalette,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when decrypting or parsing `RLD` scenario files.
#[derive(Debug, Error)]
pub enum RldError {
	/// File does not begin with the expected `?DLR` magic at offset 1.
	#[error("not an RLD file: expected magic `?DLR` at offset 1")]
	BadMagic,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Crate-level umbrella error, used where a caller handles both codecs uniformly.
#[derive(Debug, Error)]
pub enum RetouchError {
	/// Error from the `GYU` image codec
	#[error(transparent)]
	Gyu(#[from] GyuError),

	/// Error from the `RLD` scenario codec
	#[error(transparent)]
	Rld(#[from] RldError),

	/// Error loading a [`crate::file::text_filter::TextFilterConfig`] override
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
