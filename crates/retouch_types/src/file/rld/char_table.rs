//! Character-ID-to-name table, populated from `defChara.rld`'s `CREATECHARACTER` commands.

use std::collections::HashMap;

use regex::Regex;
use std::sync::OnceLock;

use super::command::{Command, types};

fn entry_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^(\d+),[^,]*,[^,]*,(\S[^,]*),").unwrap())
}

/// Maps non-negative character IDs to their display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharTable {
	names: HashMap<u32, String>,
}

impl CharTable {
	/// Builds a table from `defChara.rld`'s already-decrypted, already-parsed commands.
	pub fn from_commands(commands: &[Command]) -> Self {
		let mut names = HashMap::new();
		for command in commands {
			if command.type_ != types::CREATECHARACTER {
				continue;
			}
			let Some(first) = command.strings.first() else {
				continue;
			};
			if let Some(captures) = entry_pattern().captures(first) {
				let id: u32 = captures[1].parse().unwrap_or(u32::MAX);
				names.insert(id, captures[2].to_string());
			}
		}
		Self { names }
	}

	/// Looks up a character's display name by ID.
	pub fn get(&self, id: u32) -> Option<&str> {
		self.names.get(&id).map(String::as_str)
	}

	/// Returns all registered `(id, name)` pairs.
	pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
		self.names.iter().map(|(&id, name)| (id, name.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn command(type_: u16, strings: &[&str]) -> Command {
		Command {
			type_,
			params: vec![],
			strings: strings.iter().map(std::string::ToString::to_string).collect(),
		}
	}

	#[test]
	fn registers_matching_create_character_commands() {
		let commands = vec![command(types::CREATECHARACTER, &["5,_,_,鈴木,extra"])];
		let table = CharTable::from_commands(&commands);
		assert_eq!(table.get(5), Some("鈴木"));
	}

	#[test]
	fn ignores_non_matching_or_other_command_types() {
		let commands = vec![
			command(types::MESSAGE, &["5,_,_,鈴木,extra"]),
			command(types::CREATECHARACTER, &["not,a,match"]),
		];
		let table = CharTable::from_commands(&commands);
		assert_eq!(table.get(5), None);
	}
}
