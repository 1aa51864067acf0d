//! `RLD` scenario container: keystream decryption, command-stream parsing,
//! character-table resolution, and translatable-text extraction.

pub mod char_table;
pub mod command;
pub mod decrypt;
pub mod export;
pub mod extract;
pub mod repair;

use std::io::Read;

pub use char_table::CharTable;
pub use command::Command;
pub use extract::{Source, TranslationEntry};

use crate::file::error::RldError;

const MAGIC: &[u8; 4] = b"?DLR";
const CMD_OFFSET_FIELD: usize = 8;
const CMD_COUNT_FIELD: usize = 12;

/// A decrypted, parsed `RLD` scenario file.
#[derive(Debug, Clone)]
pub struct RldFile {
	commands: Vec<Command>,
}

impl RldFile {
	/// Returns the parsed command stream.
	pub fn commands(&self) -> &[Command] {
		&self.commands
	}

	/// Opens, decrypts, and parses an `RLD` file, picking the seed from its filename
	/// (the `def.rld` override, otherwise the per-file default).
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, RldError> {
		let data = std::fs::read(&path)?;
		let filename = path.as_ref().file_name().and_then(|n| n.to_str()).unwrap_or("");
		Self::decode(&data, decrypt::seed_for_filename(filename))
	}

	/// Decrypts and parses an `RLD` file already held in memory.
	pub fn decode(data: &[u8], seed: u32) -> Result<Self, RldError> {
		if data.len() < 16 || &data[0..4] != MAGIC {
			return Err(RldError::BadMagic);
		}

		let cmd_offset = read_u32(data, CMD_OFFSET_FIELD) as usize;
		let cmd_count = read_u32(data, CMD_COUNT_FIELD);

		let mut decrypted = data.to_vec();
		decrypt::decrypt(&mut decrypted, seed);

		log::debug!("rld: cmd_offset={cmd_offset} cmd_count={cmd_count}");
		let commands = command::parse_commands(&decrypted, cmd_offset, cmd_count);
		log::trace!("rld: parsed {} commands", commands.len());

		Ok(Self { commands })
	}

	/// Decrypts and parses an `RLD` file from any reader.
	pub fn from_reader<R: Read>(reader: &mut R, seed: u32) -> Result<Self, RldError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::decode(&data, seed)
	}

	/// Extracts translatable entries, tagging them with `file` for reinjection.
	pub fn extract(
		&self,
		file: &str,
		char_table: &CharTable,
		filter: &crate::file::text_filter::TextFilterConfig,
	) -> Vec<TranslationEntry> {
		extract::extract(file, &self.commands, char_table, filter)
	}
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}
