use super::{GyuImage, Header, alpha_stride, row_stride, shuffle};
use crate::file::error::GyuError;
use crate::file::{lzss, lzss2};

pub(super) fn decode(data: &[u8]) -> Result<GyuImage, GyuError> {
	let header = Header::from_bytes(data)?;
	log::debug!("{header}");

	let mut offset = Header::SIZE;

	let palette = if header.bpp == 8 {
		if header.pal_colors == 0 {
			return Err(GyuError::MissingPalette);
		}
		let palette = read_palette(data, offset, header.pal_colors as usize);
		offset += header.pal_colors as usize * 4;
		Some(palette)
	} else {
		None
	};

	let data_size = header.data_size as usize;
	let mut rgb_compressed = slice_at_most(data, offset, data_size);
	offset += data_size;

	if header.key != 0 {
		shuffle(&mut rgb_compressed, header.key, data_size);
	}

	let raster_size = row_stride(header.width, header.bpp) * header.height as usize;
	let rgb = decode_plane(&rgb_compressed, raster_size, header.data_size as usize == raster_size, header.uses_lzss2());
	log::trace!(
		"gyu: decoded rgb plane ({} bytes, lzss2={})",
		rgb.len(),
		header.uses_lzss2()
	);

	let alpha = if header.alpha_size > 0 {
		let alpha_size = header.alpha_size as usize;
		let alpha_compressed = slice_at_most(data, offset, alpha_size);
		let alpha_raster_size = alpha_stride(header.width) * header.height as usize;
		// The reference decoder never unshuffles the alpha plane, even though the
		// encoder shuffles it; preserved here rather than "fixed" (see DESIGN.md).
		Some(decode_plane(&alpha_compressed, alpha_raster_size, alpha_size == alpha_raster_size, false))
	} else {
		None
	};

	Ok(GyuImage {
		header,
		palette,
		rgb,
		alpha,
	})
}

/// Copies up to `len` bytes starting at `offset`, truncating (rather than erroring) if
/// the declared length runs past the end of a truncated file.
fn slice_at_most(data: &[u8], offset: usize, len: usize) -> Vec<u8> {
	if offset >= data.len() {
		return Vec::new();
	}
	let end = (offset + len).min(data.len());
	data[offset..end].to_vec()
}

fn read_palette(data: &[u8], offset: usize, count: usize) -> Vec<[u8; 4]> {
	let mut palette = Vec::with_capacity(count);
	for i in 0..count {
		let base = offset + i * 4;
		if base + 4 > data.len() {
			palette.push([0, 0, 0, 0]);
			continue;
		}
		palette.push([data[base], data[base + 1], data[base + 2], data[base + 3]]);
	}
	palette
}

fn decode_plane(compressed: &[u8], raster_size: usize, is_uncompressed: bool, use_lzss2: bool) -> Vec<u8> {
	if is_uncompressed {
		let mut plane = compressed.to_vec();
		plane.resize(raster_size, 0);
		plane.truncate(raster_size);
		return plane;
	}

	if use_lzss2 {
		let payload = compressed.get(4..).unwrap_or(&[]);
		lzss2::decode(payload, raster_size)
	} else {
		lzss::decode(compressed, raster_size)
	}
}

pub(super) fn to_rgba_image(image: &GyuImage) -> image::RgbaImage {
	let header = &image.header;
	let width = header.width;
	let height = header.height;
	let row_stride = header.row_stride();
	let alpha_stride = header.alpha_stride();
	let wide_alpha = header.wide_alpha();

	let mut out = image::RgbaImage::new(width.max(1), height.max(1));

	for y in 0..height {
		// Bottom-up source, top-down destination.
		let src_row = (height - 1 - y) as usize;
		let dst_y = y;

		for x in 0..width {
			let rgba = pixel_at(image, src_row, x as usize, row_stride, alpha_stride, wide_alpha);
			out.put_pixel(x, dst_y, image::Rgba(rgba));
		}
	}

	out
}

fn pixel_at(
	image: &GyuImage,
	src_row: usize,
	x: usize,
	row_stride: usize,
	alpha_stride: usize,
	wide_alpha: bool,
) -> [u8; 4] {
	let header = &image.header;
	let rgb_row = &image.rgb[src_row * row_stride..];

	let mut rgba = match header.bpp {
		8 => {
			let index = *rgb_row.get(x).unwrap_or(&0) as usize;
			let palette = image.palette.as_deref().unwrap_or(&[]);
			let entry = palette.get(index).copied().unwrap_or([0, 0, 0, 0]);
			// Palette is BGRA.
			[entry[2], entry[1], entry[0], 255]
		}
		24 => {
			let base = x * 3;
			let b = *rgb_row.get(base).unwrap_or(&0);
			let g = *rgb_row.get(base + 1).unwrap_or(&0);
			let r = *rgb_row.get(base + 2).unwrap_or(&0);
			[r, g, b, 255]
		}
		32 => {
			let base = x * 4;
			let b = *rgb_row.get(base).unwrap_or(&0);
			let g = *rgb_row.get(base + 1).unwrap_or(&0);
			let r = *rgb_row.get(base + 2).unwrap_or(&0);
			let a = *rgb_row.get(base + 3).unwrap_or(&255);
			[r, g, b, a]
		}
		other => {
			log::warn!("gyu: unexpected bpp {other}, treating as opaque black");
			[0, 0, 0, 255]
		}
	};

	if let Some(alpha_plane) = &image.alpha {
		let alpha_row = &alpha_plane[src_row * alpha_stride..];
		let raw = *alpha_row.get(x).unwrap_or(&0);
		rgba[3] = if wide_alpha {
			raw
		} else if raw < 16 {
			raw * 16
		} else {
			255
		};
	}

	rgba
}
