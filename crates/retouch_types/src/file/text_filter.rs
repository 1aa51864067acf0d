//! Heuristic filter deciding which extracted `RLD` strings are worth translating.
//!
//! The Japanese/fullwidth code-point ranges and the ignored-prefix set are lifted out of
//! the extraction logic and into [`TextFilterConfig`] so a different engine's heuristics
//! can be supplied from a TOML file instead of requiring a code change.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::file::error::RetouchError;

/// Inclusive code-point range, serializable as a `[start, end]` pair in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRange(pub u32, pub u32);

impl CodePointRange {
	fn contains(&self, c: char) -> bool {
		(self.0..=self.1).contains(&(c as u32))
	}
}

impl From<CodePointRange> for RangeInclusive<u32> {
	fn from(r: CodePointRange) -> Self {
		r.0..=r.1
	}
}

/// Parameters for the translatable-text heuristic used during `RLD` string extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFilterConfig {
	/// Code-point ranges that mark a string as translatable outright.
	pub japanese_ranges: Vec<CodePointRange>,
	/// Minimum run of consecutive ASCII letters that also marks a string translatable.
	pub min_ascii_run: usize,
	/// Minimum string length; anything shorter is rejected.
	pub min_len: usize,
	/// Prefixes that reject a string unless it also contains Japanese text.
	pub ignored_prefixes: Vec<String>,
}

impl Default for TextFilterConfig {
	fn default() -> Self {
		Self {
			japanese_ranges: vec![
				CodePointRange(0x3040, 0x309F),
				CodePointRange(0x30A0, 0x30FF),
				CodePointRange(0x4E00, 0x9FFF),
				CodePointRange(0xFF00, 0xFFEF),
			],
			min_ascii_run: 3,
			min_len: 2,
			ignored_prefixes: [
				"-1,", "0,", "1,", "10,", "100,", "101,", "102,", "2000,",
			]
			.into_iter()
			.map(String::from)
			.collect(),
		}
	}
}

impl TextFilterConfig {
	/// Loads overrides from a TOML file, falling back to [`Self::default`] for any field
	/// the file omits.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RetouchError> {
		let settings = config::Config::builder()
			.add_source(config::Config::try_from(&Self::default())?)
			.add_source(config::File::from(path.as_ref()))
			.build()?;
		Ok(settings.try_deserialize()?)
	}

	fn has_japanese(&self, text: &str) -> bool {
		text.chars()
			.any(|c| self.japanese_ranges.iter().any(|r| r.contains(c)))
	}

	/// Returns whether `text` contains at least one Japanese/fullwidth code point, per
	/// [`Self::japanese_ranges`]. Exposed for branch-label scanning (§4.E `BLOCK`).
	pub fn contains_japanese(&self, text: &str) -> bool {
		self.has_japanese(text)
	}

	fn has_ascii_run(&self, text: &str) -> bool {
		let mut run = 0usize;
		for c in text.chars() {
			if c.is_ascii_alphabetic() {
				run += 1;
				if run >= self.min_ascii_run {
					return true;
				}
			} else {
				run = 0;
			}
		}
		false
	}

	/// Returns whether `text` is worth surfacing for translation, per §4.E's filter.
	pub fn is_translatable(&self, text: &str) -> bool {
		if text.chars().count() < self.min_len {
			return false;
		}

		let japanese = self.has_japanese(text);

		if is_numeric_punctuation_only(text) {
			return false;
		}

		if !japanese
			&& let Some(prefix) = self
				.ignored_prefixes
				.iter()
				.find(|p| text.starts_with(p.as_str()))
			{
				let _ = prefix;
				return false;
			}

		japanese || self.has_ascii_run(text)
	}
}

/// Matches `^[\d,\-.\* ;:&|=<>\[\]\(\)RQLSrqls]+$` without pulling in the `regex` crate for
/// a single fixed character class.
fn is_numeric_punctuation_only(text: &str) -> bool {
	!text.is_empty()
		&& text.chars().all(|c| {
			c.is_ascii_digit()
				|| matches!(
					c,
					',' | '-'
						| '.' | '*' | ' '
						| ';' | ':' | '&'
						| '|' | '=' | '<'
						| '>' | '[' | ']'
						| '(' | ')' | 'R'
						| 'Q' | 'L' | 'S'
						| 'r' | 'q' | 'l'
						| 's'
				)
		})
}
