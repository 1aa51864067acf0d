//! TSV/JSON rendering of extracted translation entries (§6 external interfaces).

use std::collections::BTreeSet;

use super::char_table::CharTable;
use super::extract::TranslationEntry;

const TSV_HEADER: &str = "FILE\tINDEX\tTYPE\tORIGINAL\tTRANSLATION";

fn escape(text: &str) -> String {
	text.replace('\t', "\\t").replace('\n', "\\n")
}

/// Renders `translation.tsv`: a banner comment, the column header, one row per
/// translatable string (`NAME`/`TEXT`/`LABEL`/`CHOICE_j_k`), and comment lines for
/// structural markers (`BRANCH_START`/`MERGE`/`JUMP`/`GOTO_FILE`) interleaved for
/// readability — comments are never parsed back on reinjection.
pub fn render_translation_tsv<'a>(files: impl IntoIterator<Item = (&'a str, &'a [TranslationEntry])>) -> String {
	let mut out = String::new();
	out.push_str("# translation.tsv — generated by retouch-rs; comment lines are for readability only\n");
	out.push_str(TSV_HEADER);
	out.push('\n');

	for (file, entries) in files {
		out.push_str(&format!("# --- {file} ---\n"));
		for entry in entries {
			render_entry(&mut out, file, entry);
		}
	}

	out
}

fn render_entry(out: &mut String, file: &str, entry: &TranslationEntry) {
	match entry {
		TranslationEntry::Message {
			speaker,
			text,
			source,
			..
		} => {
			if let Some(speaker) = speaker {
				push_row(out, file, source.command_index, "NAME", speaker);
			}
			push_row(out, file, source.command_index, "TEXT", text);
		}
		TranslationEntry::Label { text, source } => {
			push_row(out, file, source.command_index, "LABEL", text);
		}
		TranslationEntry::Choice {
			question,
			option,
			text,
			source,
		} => {
			let kind = format!("CHOICE_{question}_{option}");
			push_row(out, file, source.command_index, &kind, text);
		}
		TranslationEntry::BranchStart { branch_id, source } => {
			out.push_str(&format!("# [{}] BRANCH_START {branch_id}\n", source.command_index));
		}
		TranslationEntry::Merge { source } => {
			out.push_str(&format!("# [{}] MERGE\n", source.command_index));
		}
		TranslationEntry::Jump { target, source, .. } => {
			out.push_str(&format!("# [{}] JUMP -> {target}\n", source.command_index));
		}
		TranslationEntry::GotoFile { target, source } => {
			out.push_str(&format!("# [{}] GOTO_FILE -> {target}\n", source.command_index));
		}
	}
}

fn push_row(out: &mut String, file: &str, index: usize, kind: &str, original: &str) {
	out.push_str(&format!("{file}\t{index}\t{kind}\t{}\t\n", escape(original)));
}

/// Renders `translation.json`: every entry, with its tag, as a JSON array.
pub fn render_translation_json(entries: &[TranslationEntry]) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(entries)
}

/// Renders `unique_names.tsv`: the deduplicated, sorted union of speaker names seen
/// during extraction and the names registered in the character table.
pub fn render_unique_names_tsv(entries: &[TranslationEntry], char_table: &CharTable) -> String {
	let mut names: BTreeSet<&str> = BTreeSet::new();
	for entry in entries {
		if let TranslationEntry::Message {
			speaker: Some(speaker),
			..
		} = entry
		{
			names.insert(speaker.as_str());
		}
	}
	for (_, name) in char_table.entries() {
		names.insert(name);
	}

	let mut out = String::from("ORIGINAL\tTRANSLATION\n");
	for name in names {
		out.push_str(name);
		out.push('\t');
		out.push('\n');
	}
	out
}

/// Renders `char_table.tsv`: `id\tname`, sorted ascending by ID.
pub fn render_char_table_tsv(char_table: &CharTable) -> String {
	let mut entries: Vec<(u32, &str)> = char_table.entries().collect();
	entries.sort_by_key(|(id, _)| *id);

	let mut out = String::new();
	for (id, name) in entries {
		out.push_str(&format!("{id}\t{name}\n"));
	}
	out
}
