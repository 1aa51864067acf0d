//! Benchmark helper utilities for `retouch-rs`.
//!
//! All fixtures are generated synthetically at bench time; no proprietary game assets are
//! shipped in this crate.

use retouch_types::file::gyu::EncodeInput;
use retouch_types::file::mt19937::Mt19937;

/// Builds a synthetic bottom-up 24bpp RGB plane of `width * height` pixels with enough
/// internal repetition to give the LZSS/LZSS2 encoders real matches to find, while still
/// varying byte-to-byte so the decoder exercises both literal and reference paths.
pub fn generate_rgb_plane(width: u32, height: u32) -> Vec<u8> {
	let stride = ((width as usize * 3) + 3) & !3;
	let mut plane = Vec::with_capacity(stride * height as usize);
	for y in 0..height {
		for x in 0..width {
			let shade = ((x / 8 + y / 8) % 64) as u8;
			plane.extend_from_slice(&[shade, shade.wrapping_mul(2), shade.wrapping_mul(3)]);
		}
		plane.resize(plane.len() + (stride - width as usize * 3), 0);
	}
	plane
}

/// Builds a complete, encoded `GYU` file of the given dimensions for decode benchmarks.
///
/// `key`: `Some(0)` disables shuffling, `Some(seed)` shuffles with a fixed seed (so
/// benchmark runs are reproducible), `None` draws a random key per the encoder's default.
pub fn generate_gyu_file(width: u32, height: u32, key: Option<u32>) -> Vec<u8> {
	let rgb = generate_rgb_plane(width, height);
	let input = EncodeInput {
		width,
		height,
		bpp: 24,
		rgb,
		palette: None,
		alpha: None,
		key,
	};
	retouch_types::GyuImage::encode(input).expect("synthetic fixture must encode")
}

/// Builds a minimal `RLD` scenario file with `command_count` MESSAGE commands, each
/// carrying a short CP932-encodable string, then encrypts it with `seed`.
pub fn generate_rld_file(command_count: u32, seed: u32) -> Vec<u8> {
	let mut body = Vec::new();
	for i in 0..command_count {
		let text = format!("line {i}\0");
		let string_count = 1u32;
		let packed = (retouch_types::file::rld::command::types::MESSAGE as u32)
			| ((string_count & 0xF) << 24);
		body.extend_from_slice(&packed.to_le_bytes());
		body.extend_from_slice(text.as_bytes());
	}

	let header_len = 16usize;
	let mut data = vec![0u8; header_len];
	data[0..4].copy_from_slice(b"?DLR");
	data[8..12].copy_from_slice(&(header_len as u32).to_le_bytes());
	data[12..16].copy_from_slice(&command_count.to_le_bytes());
	data.extend_from_slice(&body);

	retouch_types::file::rld::decrypt::decrypt(&mut data, seed);
	data
}

/// Draws `count` raw words from a freshly seeded engine; used to benchmark the MT19937
/// core independent of either codec built on top of it.
pub fn draw_mt19937(seed: u32, count: usize) -> Vec<u32> {
	let mut engine = Mt19937::new(seed);
	(0..count).map(|_| engine.next_u32()).collect()
}

/// Common benchmark sizes for synthetic test data.
pub mod sizes {
	/// Tiny image: 64x64 (4,096 pixels)
	pub const TINY: (u32, u32) = (64, 64);
	/// Small image: 256x256 (65,536 pixels)
	pub const SMALL: (u32, u32) = (256, 256);
	/// Medium image: 512x512 (262,144 pixels)
	pub const MEDIUM: (u32, u32) = (512, 512);
	/// Large image: 1024x768 (786,432 pixels) - typical game asset
	pub const LARGE: (u32, u32) = (1024, 768);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgb_plane_has_expected_length() {
		let plane = generate_rgb_plane(10, 4);
		let stride = ((10 * 3) + 3) & !3;
		assert_eq!(plane.len(), stride * 4);
	}

	#[test]
	fn gyu_fixture_round_trips() {
		let data = generate_gyu_file(16, 16, Some(0xDEAD_BEEF));
		let image = retouch_types::GyuImage::decode(&data).unwrap();
		assert_eq!(image.header().width(), 16);
		assert_eq!(image.header().height(), 16);
	}

	#[test]
	fn rld_fixture_parses_to_expected_command_count() {
		let data = generate_rld_file(5, 0x2010_0806);
		let file = retouch_types::RldFile::decode(&data, 0x2010_0806).unwrap();
		assert_eq!(file.commands().len(), 5);
	}

	#[test]
	fn sizes_constants() {
		assert_eq!(sizes::TINY, (64, 64));
		assert_eq!(sizes::LARGE, (1024, 768));
	}
}
