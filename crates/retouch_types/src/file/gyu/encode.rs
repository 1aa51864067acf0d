use rand::Rng;

use super::{Header, row_stride, shuffle};
use crate::file::error::GyuError;
use crate::file::lzss;

/// Inputs to [`super::GyuImage::encode`].
///
/// `rgb` and `alpha` are bottom-up planes in the engine's native layout: palette-index
/// bytes for `bpp == 8`, otherwise BGR (`bpp == 24`) or BGRA (`bpp == 32`) bytes, each row
/// padded to [`Header::row_stride`] / [`Header::alpha_stride`].
#[derive(Debug, Clone)]
pub struct EncodeInput {
	/// Image width in pixels.
	pub width: u32,
	/// Image height in pixels.
	pub height: u32,
	/// Bits per pixel: 8, 24, or 32.
	pub bpp: u16,
	/// Bottom-up RGB/palette-index plane.
	pub rgb: Vec<u8>,
	/// BGRA palette entries, required iff `bpp == 8`.
	pub palette: Option<Vec<[u8; 4]>>,
	/// Bottom-up alpha plane, if the image carries one.
	pub alpha: Option<Vec<u8>>,
	/// Shuffle seed. `None` draws a random key the way the original tool's
	/// `generate_key` does; `Some(0)` disables shuffling.
	pub key: Option<u32>,
}

pub(super) fn encode(input: EncodeInput) -> Result<Vec<u8>, GyuError> {
	if !matches!(input.bpp, 8 | 24 | 32) {
		return Err(GyuError::UnsupportedBpp(input.bpp));
	}
	if input.bpp == 8 {
		let colors = input.palette.as_ref().map(Vec::len).unwrap_or(0);
		if colors == 0 {
			return Err(GyuError::MissingPalette);
		}
	}

	let key = input.key.unwrap_or_else(generate_key);

	let expected_stride = row_stride(input.width, input.bpp as u32);
	debug_assert_eq!(input.rgb.len(), expected_stride * input.height as usize);

	let mut rgb_compressed = lzss::encode(&input.rgb);
	if key != 0 {
		let len = rgb_compressed.len();
		shuffle(&mut rgb_compressed, key, len);
	}

	let alpha_compressed = input.alpha.as_ref().map(|alpha| {
		let mut compressed = lzss::encode(alpha);
		if key != 0 {
			let len = compressed.len();
			shuffle(&mut compressed, key, len);
		}
		compressed
	});

	let flags = if input.alpha.is_some() { 0x0003u16 } else { 0x0000 };

	// The engine always writes a full 256-entry BGRA palette, zero-padded past the
	// caller's actual color count (see `png_to_gyu`'s palette handling).
	const PALETTE_ENTRIES: usize = 256;
	let padded_palette = input.palette.as_ref().map(|palette| {
		let mut padded = palette.clone();
		padded.resize(PALETTE_ENTRIES, [0, 0, 0, 0]);
		padded.truncate(PALETTE_ENTRIES);
		padded
	});

	let header = Header {
		flags,
		type_: 0x0000,
		key,
		bpp: input.bpp as u32,
		width: input.width,
		height: input.height,
		data_size: rgb_compressed.len() as u32,
		alpha_size: alpha_compressed.as_ref().map(Vec::len).unwrap_or(0) as u32,
		pal_colors: if padded_palette.is_some() { PALETTE_ENTRIES as u32 } else { 0 },
	};
	log::debug!("gyu: encoding with key 0x{key:08X}");

	let mut out = Vec::with_capacity(Header::SIZE + rgb_compressed.len());
	out.extend_from_slice(&header.to_bytes());
	if let Some(palette) = &padded_palette {
		for entry in palette {
			out.extend_from_slice(entry);
		}
	}
	out.extend_from_slice(&rgb_compressed);
	if let Some(alpha_compressed) = alpha_compressed {
		out.extend_from_slice(&alpha_compressed);
	}

	Ok(out)
}

/// Draws a random key in `[0x10000000, 0xFFFFFFFF]`, matching the original tool's
/// `generate_key`.
fn generate_key() -> u32 {
	rand::rng().random_range(0x1000_0000..=0xFFFF_FFFFu32)
}
