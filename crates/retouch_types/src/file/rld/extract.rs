//! Translatable-text extraction with branch-flow tracking (§4.E).

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::char_table::CharTable;
use super::command::{Command, types};
use crate::file::text_filter::TextFilterConfig;

fn branch_label_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^R(\d+)[＝=](\d+)$").unwrap())
}

/// Where an entry came from, preserved for reinjection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
	/// Source `RLD` filename this entry was extracted from.
	pub file: String,
	/// Index of the originating command within that file's decrypted command stream.
	pub command_index: usize,
}

/// One extracted translation entry or structural marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TranslationEntry {
	/// A spoken line, with optional speaker and enclosing branch label.
	#[serde(rename = "MESSAGE")]
	Message {
		/// Speaking character, if the command named one.
		speaker: Option<String>,
		/// The message text itself.
		text: String,
		/// Enclosing branch label, if this message sits inside a choice branch.
		branch: Option<String>,
		/// Where this entry was extracted from.
		source: Source,
	},
	/// A scenario label.
	#[serde(rename = "LABEL")]
	Label {
		/// Label text.
		text: String,
		/// Where this entry was extracted from.
		source: Source,
	},
	/// One option of a question/choice command.
	#[serde(rename = "CHOICE")]
	Choice {
		/// Index of the enclosing question command.
		question: u32,
		/// Index of this option within the question.
		option: u32,
		/// Option text.
		text: String,
		/// Where this entry was extracted from.
		source: Source,
	},
	/// Marks the start of a named choice branch in the command stream.
	#[serde(rename = "BRANCH_START")]
	BranchStart {
		/// Branch label this marker opens.
		branch_id: String,
		/// Where this entry was extracted from.
		source: Source,
	},
	/// Marks a branch-merge point (all open branches close here).
	#[serde(rename = "MERGE")]
	Merge {
		/// Where this entry was extracted from.
		source: Source,
	},
	/// A jump to another branch label within the same scenario.
	#[serde(rename = "JUMP")]
	Jump {
		/// Branch label being jumped to.
		target: String,
		/// Enclosing branch label, if any.
		branch: Option<String>,
		/// Where this entry was extracted from.
		source: Source,
	},
	/// A jump to a different scenario file.
	#[serde(rename = "GOTO_FILE")]
	GotoFile {
		/// Target scenario filename.
		target: String,
		/// Where this entry was extracted from.
		source: Source,
	},
}

/// Walks `commands` in order, extracting translatable entries and tracking choice-branch
/// flow. `file` is the source filename, recorded on every entry for reinjection.
pub fn extract(
	file: &str,
	commands: &[Command],
	char_table: &CharTable,
	filter: &TextFilterConfig,
) -> Vec<TranslationEntry> {
	let mut entries = Vec::new();
	let mut current_branch: Option<String> = None;

	for (index, command) in commands.iter().enumerate() {
		let source = || Source {
			file: file.to_string(),
			command_index: index,
		};

		match command.type_ {
			types::MESSAGE => {
				let speaker = message_speaker(command, char_table);
				let Some(text) = command.strings.last() else {
					continue;
				};
				if filter.is_translatable(text) {
					entries.push(TranslationEntry::Message {
						speaker,
						text: text.clone(),
						branch: current_branch.clone(),
						source: source(),
					});
				}
			}

			types::BLOCK => {
				if let Some(last) = command.strings.last() {
					handle_block(last, filter, &mut current_branch, &mut entries, source());
				}
			}

			types::JUMP => {
				if let Some(target) = command.strings.first() {
					entries.push(TranslationEntry::Jump {
						target: target.clone(),
						branch: current_branch.clone(),
						source: source(),
					});
				}
			}

			types::QUESTION => {
				for (j, option) in command.strings.iter().enumerate() {
					let mut k = 1u32;
					for field in option.split('\t') {
						if !is_choice_candidate(field, filter) {
							continue;
						}
						entries.push(TranslationEntry::Choice {
							question: j as u32,
							option: k,
							text: field.to_string(),
							source: source(),
						});
						k += 1;
					}
				}
			}

			types::CHANGESCENARIO => {
				if let Some(target) = command.strings.first() {
					entries.push(TranslationEntry::GotoFile {
						target: target.clone(),
						source: source(),
					});
				}
				current_branch = None;
			}

			_ => {}
		}
	}

	entries
}

fn message_speaker(command: &Command, char_table: &CharTable) -> Option<String> {
	if let Some(first) = command.strings.first()
		&& !first.is_empty() && first != "*" && command.strings.len() >= 2 {
			return Some(first.clone());
		}
	let id = *command.params.first()?;
	if id >= 3 {
		char_table.get(id).map(str::to_string)
	} else {
		None
	}
}

fn handle_block(
	last: &str,
	filter: &TextFilterConfig,
	current_branch: &mut Option<String>,
	entries: &mut Vec<TranslationEntry>,
	source: Source,
) {
	let fields: Vec<&str> = last.split(',').collect();
	let block_name = fields.get(3).copied().unwrap_or("");

	if let Some(captures) = branch_label_pattern().captures(block_name) {
		let branch_id = format!("CHOICE_{}_{}", &captures[1], &captures[2]);
		*current_branch = Some(branch_id.clone());
		entries.push(TranslationEntry::BranchStart { branch_id, source });
		return;
	}

	if block_name == "*" && current_branch.is_some() {
		entries.push(TranslationEntry::Merge { source });
		*current_branch = None;
		return;
	}

	if let Some(label) = fields
		.iter()
		.rev()
		.find(|field| **field != "*" && filter.contains_japanese(field))
		&& filter.is_translatable(label) {
			entries.push(TranslationEntry::Label {
				text: label.to_string(),
				source,
			});
			*current_branch = None;
		}
}

fn is_choice_candidate(field: &str, filter: &TextFilterConfig) -> bool {
	if field.is_empty() || field == "*" {
		return false;
	}
	if field.chars().all(|c| c.is_ascii_digit()) {
		return false;
	}
	if looks_like_filename(field) {
		return false;
	}
	filter.contains_japanese(field)
}

/// A bare heuristic for "`name.ext`"-shaped fields the original tool skips as asset
/// references rather than dialogue.
fn looks_like_filename(field: &str) -> bool {
	match field.rsplit_once('.') {
		Some((stem, ext)) => {
			!stem.is_empty()
				&& (2..=4).contains(&ext.len())
				&& ext.chars().all(|c| c.is_ascii_alphanumeric())
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn command(type_: u16, params: Vec<u32>, strings: &[&str]) -> Command {
		Command {
			type_,
			params,
			strings: strings.iter().map(std::string::ToString::to_string).collect(),
		}
	}

	#[test]
	fn message_uses_string_speaker_override() {
		let commands = vec![command(types::MESSAGE, vec![5], &["鈴木", "こんにちは"])];
		let entries = extract("scene01.rld", &commands, &CharTable::default(), &TextFilterConfig::default());
		assert_eq!(
			entries[0],
			TranslationEntry::Message {
				speaker: Some("鈴木".to_string()),
				text: "こんにちは".to_string(),
				branch: None,
				source: Source {
					file: "scene01.rld".to_string(),
					command_index: 0
				},
			}
		);
	}

	#[test]
	fn message_falls_back_to_char_table() {
		let table = CharTable::from_commands(&[command(types::CREATECHARACTER, vec![], &["5,_,_,鈴木,x"])]);
		let commands = vec![command(types::MESSAGE, vec![5], &["こんにちは"])];
		let entries = extract("scene01.rld", &commands, &table, &TextFilterConfig::default());
		let TranslationEntry::Message { speaker, .. } = &entries[0] else {
			panic!("expected MESSAGE");
		};
		assert_eq!(speaker.as_deref(), Some("鈴木"));
	}

	#[test]
	fn block_opens_a_named_branch() {
		let commands = vec![command(types::BLOCK, vec![], &["12,0,13,R100＝2,*"])];
		let entries = extract("scene01.rld", &commands, &CharTable::default(), &TextFilterConfig::default());
		assert_eq!(
			entries[0],
			TranslationEntry::BranchStart {
				branch_id: "CHOICE_100_2".to_string(),
				source: Source {
					file: "scene01.rld".to_string(),
					command_index: 0
				},
			}
		);
	}

	#[test]
	fn block_merge_closes_open_branch() {
		let commands = vec![
			command(types::BLOCK, vec![], &["12,0,13,R1=1,*"]),
			command(types::BLOCK, vec![], &["12,0,13,*,*"]),
		];
		let entries = extract("scene01.rld", &commands, &CharTable::default(), &TextFilterConfig::default());
		assert!(matches!(entries[1], TranslationEntry::Merge { .. }));
	}

	#[test]
	fn question_emits_surviving_tab_fields() {
		let commands = vec![command(types::QUESTION, vec![], &["はい\t*\t1\tいいえ"])];
		let entries = extract("scene01.rld", &commands, &CharTable::default(), &TextFilterConfig::default());
		assert_eq!(entries.len(), 2);
		assert_eq!(
			entries[0],
			TranslationEntry::Choice {
				question: 0,
				option: 1,
				text: "はい".to_string(),
				source: Source {
					file: "scene01.rld".to_string(),
					command_index: 0
				},
			}
		);
		assert_eq!(
			entries[1],
			TranslationEntry::Choice {
				question: 0,
				option: 2,
				text: "いいえ".to_string(),
				source: Source {
					file: "scene01.rld".to_string(),
					command_index: 0
				},
			}
		);
	}

	#[test]
	fn changescenario_emits_goto_and_closes_branch() {
		let commands = vec![
			command(types::BLOCK, vec![], &["12,0,13,R1=1,*"]),
			command(types::CHANGESCENARIO, vec![], &["scene02.rld"]),
		];
		let entries = extract("scene01.rld", &commands, &CharTable::default(), &TextFilterConfig::default());
		assert_eq!(
			entries[1],
			TranslationEntry::GotoFile {
				target: "scene02.rld".to_string(),
				source: Source {
					file: "scene01.rld".to_string(),
					command_index: 1
				},
			}
		);
	}
}
