//! Command-stream parsing: header layout, sanity bounds, and CP932 string decoding.

/// Hard cap on commands parsed from a single file, independent of the header's declared
/// `cmd_count` — a defensive bound against corrupt or adversarial input.
const MAX_COMMANDS: usize = 50_000;

const MAX_TYPE: u16 = 0x1000;
const MAX_DWORD_COUNT: u8 = 50;
const MAX_STRING_COUNT: u8 = 15;

/// Command types referenced by translatable-text extraction (§4.E); other types are
/// parsed (header, params, strings) but otherwise passed over.
pub mod types {
	/// Opens a named choice branch.
	pub const BLOCK: u16 = 0x05;
	/// Jumps to a different scenario file.
	pub const CHANGESCENARIO: u16 = 0x11;
	/// Jumps to a branch label within the same scenario.
	pub const JUMP: u16 = 0x14;
	/// Presents a multi-option choice.
	pub const QUESTION: u16 = 0x15;
	/// A spoken line of dialogue.
	pub const MESSAGE: u16 = 0x1C;
	/// Registers a speaking character in the character table.
	pub const CREATECHARACTER: u16 = 0x30;
}

/// One parsed `RLD` command: a type tag, fixed-shape parameter words, and strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	/// Command type, one of [`types`] or an unrecognized value passed over verbatim.
	pub type_: u16,
	/// Fixed-shape parameter words following the type tag.
	pub params: Vec<u32>,
	/// CP932-decoded strings carried by this command.
	pub strings: Vec<String>,
}

/// Reads up to `cmd_count` commands starting at `offset`, stopping early (without error)
/// on sanity-bound violations or input exhaustion — both treated as soft EOF per §7.
pub fn parse_commands(data: &[u8], offset: usize, cmd_count: u32) -> Vec<Command> {
	let mut commands = Vec::new();
	let mut pos = offset;
	let limit = (cmd_count as usize).min(MAX_COMMANDS);

	for _ in 0..limit {
		let Some((command, next_pos)) = parse_one(data, pos) else {
			break;
		};
		pos = next_pos;
		commands.push(command);
	}

	commands
}

fn parse_one(data: &[u8], pos: usize) -> Option<(Command, usize)> {
	let header = data.get(pos..pos + 4)?;
	let packed = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);

	let type_ = (packed & 0xFFFF) as u16;
	let dword_count = ((packed >> 16) & 0xFF) as u8;
	let string_count = ((packed >> 24) & 0xF) as u8;

	if type_ > MAX_TYPE || dword_count > MAX_DWORD_COUNT || string_count > MAX_STRING_COUNT {
		return None;
	}

	let mut cursor = pos + 4;

	let mut params = Vec::with_capacity(dword_count as usize);
	for _ in 0..dword_count {
		let word = data.get(cursor..cursor + 4)?;
		params.push(u32::from_le_bytes([word[0], word[1], word[2], word[3]]));
		cursor += 4;
	}

	let mut strings = Vec::with_capacity(string_count as usize);
	for _ in 0..string_count {
		let (text, new_cursor) = read_cp932_cstring(data, cursor)?;
		strings.push(text);
		cursor = new_cursor;
	}

	Some((
		Command {
			type_,
			params,
			strings,
		},
		cursor,
	))
}

/// Reads a CP932 (Shift-JIS) string terminated by a `NUL` byte, returning the decoded
/// text and the position just past the terminator.
fn read_cp932_cstring(data: &[u8], start: usize) -> Option<(String, usize)> {
	let nul_offset = data[start..].iter().position(|&b| b == 0)?;
	let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(&data[start..start + nul_offset]);
	Some((decoded.into_owned(), start + nul_offset + 1))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn packed_header(type_: u16, dword_count: u8, string_count: u8) -> [u8; 4] {
		let packed = (type_ as u32) | ((dword_count as u32) << 16) | ((string_count as u32) << 24);
		packed.to_le_bytes()
	}

	#[test]
	fn parses_a_single_command_with_params_and_strings() {
		let mut data = Vec::new();
		data.extend_from_slice(&packed_header(types::MESSAGE, 1, 1));
		data.extend_from_slice(&42u32.to_le_bytes());
		let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode("こんにちは");
		data.extend_from_slice(&encoded);
		data.push(0);

		let commands = parse_commands(&data, 0, 1);
		assert_eq!(commands.len(), 1);
		assert_eq!(commands[0].type_, types::MESSAGE);
		assert_eq!(commands[0].params, vec![42]);
		assert_eq!(commands[0].strings, vec!["こんにちは".to_string()]);
	}

	#[test]
	fn stops_on_bounds_violation() {
		let data = packed_header(0x2000, 0, 0).to_vec();
		let commands = parse_commands(&data, 0, 5);
		assert!(commands.is_empty());
	}

	#[test]
	fn stops_on_truncated_input() {
		let data = packed_header(types::MESSAGE, 2, 0)[..3].to_vec();
		let commands = parse_commands(&data, 0, 5);
		assert!(commands.is_empty());
	}

	#[test]
	fn zero_commands_is_not_an_error() {
		let commands = parse_commands(&[0u8; 16], 0, 0);
		assert!(commands.is_empty());
	}
}
