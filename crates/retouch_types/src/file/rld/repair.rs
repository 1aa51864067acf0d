//! TSV-repair: given a folder of `RLD`s and a working translation TSV, re-extract
//! pristine originals and reconcile the ORIGINAL column without disturbing anything a
//! translator has already written.

use std::collections::HashMap;

/// Key identifying a translation row for repair purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
	/// Source `RLD` filename.
	pub file: String,
	/// Command index within that file.
	pub index: usize,
	/// Entry kind, e.g. `MESSAGE`/`CHOICE`/`LABEL`.
	pub kind: String,
}

/// One row of a working TSV, verbatim except for the parsed key/original pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
	/// A comment or blank line, preserved exactly.
	Verbatim(String),
	/// A data row: `FILE\tINDEX\tTYPE\tORIGINAL\tTRANSLATION`.
	Data {
		/// File/index/kind identifying which pristine string this row corresponds to.
		key: RowKey,
		/// Current ORIGINAL column value, replaced during repair if stale.
		original: String,
		/// Every column after ORIGINAL, kept verbatim (translation and beyond).
		rest: String,
	},
}

/// Parses a working TSV into rows, splitting each data line at the first four tabs and
/// keeping everything after as `rest` (so the TRANSLATION column, and any columns beyond
/// it, survive untouched).
pub fn parse_tsv(text: &str) -> Vec<Row> {
	text.lines()
		.map(|line| {
			if line.starts_with('#') || line.trim().is_empty() || line.starts_with("FILE\t") {
				return Row::Verbatim(line.to_string());
			}
			let mut parts = line.splitn(5, '\t');
			let (Some(file), Some(index), Some(kind), Some(original), rest) =
				(parts.next(), parts.next(), parts.next(), parts.next(), parts.next())
			else {
				return Row::Verbatim(line.to_string());
			};
			let Ok(index) = index.parse::<usize>() else {
				return Row::Verbatim(line.to_string());
			};
			Row::Data {
				key: RowKey {
					file: file.to_string(),
					index,
					kind: kind.to_string(),
				},
				original: original.to_string(),
				rest: rest.unwrap_or("").to_string(),
			}
		})
		.collect()
}

/// Overwrites each data row's ORIGINAL column with the pristine value from
/// `pristine_by_key`, when the key is known; rows whose key is absent from the pristine
/// set (stale entries) are left untouched. Comment lines, blank lines, and the
/// TRANSLATION column are never modified. No rows are inserted or deleted.
pub fn repair(rows: &[Row], pristine_by_key: &HashMap<RowKey, String>) -> Vec<String> {
	rows.iter()
		.map(|row| match row {
			Row::Verbatim(line) => line.clone(),
			Row::Data { key, original, rest } => {
				let repaired = pristine_by_key.get(key).map(String::as_str).unwrap_or(original);
				format!("{}\t{}\t{}\t{}\t{}", key.file, key.index, key.kind, repaired, rest)
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn preserves_comments_and_translation_column() {
		let tsv = "# banner\nFILE\tINDEX\tTYPE\tORIGINAL\tTRANSLATION\nscene01.rld\t0\tTEXT\told\ttranslated\n";
		let rows = parse_tsv(tsv);
		let mut pristine = HashMap::new();
		pristine.insert(
			RowKey {
				file: "scene01.rld".to_string(),
				index: 0,
				kind: "TEXT".to_string(),
			},
			"new".to_string(),
		);
		let repaired = repair(&rows, &pristine);
		assert_eq!(repaired[0], "# banner");
		assert_eq!(repaired[1], "FILE\tINDEX\tTYPE\tORIGINAL\tTRANSLATION");
		assert_eq!(repaired[2], "scene01.rld\t0\tTEXT\tnew\ttranslated");
	}

	#[test]
	fn leaves_stale_rows_original_untouched() {
		let tsv = "scene01.rld\t0\tTEXT\told\ttranslated\n";
		let rows = parse_tsv(tsv);
		let repaired = repair(&rows, &HashMap::new());
		assert_eq!(repaired[0], "scene01.rld\t0\tTEXT\told\ttranslated");
	}

	#[test]
	fn never_changes_row_count() {
		let tsv = "# a\n\nscene01.rld\t0\tTEXT\tx\ty\n# b\n";
		let rows = parse_tsv(tsv);
		let repaired = repair(&rows, &HashMap::new());
		assert_eq!(repaired.len(), 4);
	}
}
