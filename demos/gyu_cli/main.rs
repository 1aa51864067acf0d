//! GYU Image Format CLI Utility
//!
//! A command-line tool for decoding and encoding `GYU` image containers.
//!
//! # Features
//!
//! - **decode**: Convert GYU file(s) to PNG
//! - **encode**: Convert PNG file(s) to GYU
//!
//! # Usage
//!
//! ```bash
//! # Decode a single GYU file to PNG
//! cargo run --example gyu_cli decode input.gyu -o output.png
//!
//! # Decode every .gyu file in a folder
//! cargo run --example gyu_cli decode scenes/ -o out/
//!
//! # Encode a PNG back to GYU, reusing the shuffle key from a donor file
//! cargo run --example gyu_cli encode input.png -o output.gyu --ref original.gyu
//! ```

use clap::{Parser, Subcommand};
use retouch_rs::prelude::file::gyu::EncodeInput;
use retouch_rs::prelude::file::GyuImage;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gyu_cli")]
#[command(author = "retouch-rs project")]
#[command(version = "1.0")]
#[command(about = "GYU image format utility - decode and encode GYU containers", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode GYU file(s) to PNG
	Decode {
		/// Input .gyu file or a directory of .gyu files
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output PNG file (single input) or directory (folder input)
		#[arg(short, long, value_name = "OUT")]
		output: PathBuf,
	},

	/// Encode PNG file(s) to GYU
	Encode {
		/// Input PNG file or a directory of PNG files
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output .gyu file (single input) or directory (folder input)
		#[arg(short, long, value_name = "OUT")]
		output: PathBuf,

		/// Directory of donor .gyu files to adopt shuffle keys from, matched by stem
		#[arg(long, value_name = "REF_DIR")]
		r#ref: Option<PathBuf>,
	},
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode { input, output } => {
			if input.is_dir() {
				decode_folder(&input, &output)
			} else {
				decode_file(&input, &output)
			}
		}
		Commands::Encode { input, output, r#ref } => {
			if input.is_dir() {
				encode_folder(&input, &output, r#ref.as_deref())
			} else {
				encode_file(&input, &output, r#ref.as_deref())
			}
		}
	}
}

fn decode_file(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let image = GyuImage::open(input)?;
	image.to_rgba_image().save(output)?;
	log::info!("decoded {} -> {}", input.display(), output.display());
	Ok(())
}

fn decode_folder(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
	std::fs::create_dir_all(output)?;
	for entry in walkdir::WalkDir::new(input).into_iter().filter_map(Result::ok) {
		let path = entry.path();
		if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gyu")) {
			let dest = output.join(path.file_stem().unwrap_or_default()).with_extension("png");
			if let Err(error) = decode_file(path, &dest) {
				log::error!("skipping {}: {error}", path.display());
			}
		}
	}
	Ok(())
}

fn donor_key(ref_dir: Option<&Path>, stem: &std::ffi::OsStr) -> Option<u32> {
	let ref_dir = ref_dir?;
	let donor = ref_dir.join(stem).with_extension("gyu");
	let image = GyuImage::open(&donor).ok()?;
	Some(image.header().key())
}

fn encode_file(input: &Path, output: &Path, ref_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
	let rgba = image::open(input)?.to_rgba8();
	let (width, height) = rgba.dimensions();

	let alpha_stride = (width as usize + 3) & !3;
	let mut rgb = Vec::with_capacity((width * height * 4) as usize);
	let mut alpha = Vec::with_capacity(alpha_stride * height as usize);
	for row in rgba.rows().rev() {
		let row_start = alpha.len();
		for pixel in row {
			rgb.extend_from_slice(&[pixel[2], pixel[1], pixel[0], pixel[3]]);
			alpha.push(pixel[3]);
		}
		alpha.resize(row_start + alpha_stride, 0);
	}

	let key = input.file_stem().and_then(|stem| donor_key(ref_dir, stem));

	let encoded = GyuImage::encode(EncodeInput {
		width,
		height,
		bpp: 32,
		rgb,
		palette: None,
		alpha: Some(alpha),
		key,
	})?;

	std::fs::write(output, &encoded)?;
	log::info!("encoded {} -> {}", input.display(), output.display());
	Ok(())
}

fn encode_folder(input: &Path, output: &Path, ref_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
	std::fs::create_dir_all(output)?;
	for entry in walkdir::WalkDir::new(input).into_iter().filter_map(Result::ok) {
		let path = entry.path();
		if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) {
			let dest = output.join(path.file_stem().unwrap_or_default()).with_extension("gyu");
			if let Err(error) = encode_file(path, &dest, ref_dir) {
				log::error!("skipping {}: {error}", path.display());
			}
		}
	}
	Ok(())
}
