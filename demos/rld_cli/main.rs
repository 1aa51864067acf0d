//! RLD Scenario Format CLI Utility
//!
//! A command-line tool for extracting translatable text from `RLD` scenario files, and
//! for repairing a working translation TSV against freshly re-extracted originals.
//!
//! # Usage
//!
//! ```bash
//! # Extract every .rld file in a folder to translation.tsv/.json
//! cargo run --example rld_cli extract scenes/ -o out/
//!
//! # Reconcile a working TSV's ORIGINAL column against the current .rld files
//! cargo run --example rld_cli fix scenes/ working.tsv out/fixed.tsv
//! ```

use clap::{Parser, Subcommand};
use retouch_rs::prelude::file::rld::{export, repair};
use retouch_rs::prelude::{CharTable, RldFile, TextFilterConfig};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rld_cli")]
#[command(author = "retouch-rs project")]
#[command(version = "1.0")]
#[command(about = "RLD scenario utility - extract translatable text and repair working TSVs", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Extract translatable text from a folder of RLD files
	Extract {
		/// Directory of .rld files
		#[arg(value_name = "RLD_DIR")]
		rld_dir: PathBuf,

		/// Output directory for translation.tsv/.json, `unique_names.tsv`, `char_table.tsv`
		#[arg(short, long, value_name = "OUT")]
		output: PathBuf,
	},

	/// Reconcile a working translation TSV's ORIGINAL column against current RLD files
	Fix {
		/// Directory of .rld files
		#[arg(value_name = "RLD_DIR")]
		rld_dir: PathBuf,

		/// Working translation TSV to repair
		#[arg(value_name = "TSV")]
		tsv: PathBuf,

		/// Output path for the repaired TSV (defaults to overwriting the input)
		#[arg(value_name = "OUT_TSV")]
		out_tsv: Option<PathBuf>,
	},
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	match cli.command {
		Commands::Extract { rld_dir, output } => extract(&rld_dir, &output),
		Commands::Fix {
			rld_dir,
			tsv,
			out_tsv,
		} => fix(&rld_dir, &tsv, out_tsv.as_deref()),
	}
}

fn rld_files(dir: &std::path::Path) -> Vec<PathBuf> {
	walkdir::WalkDir::new(dir)
		.into_iter()
		.filter_map(Result::ok)
		.map(walkdir::DirEntry::into_path)
		.filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("rld")))
		.collect()
}

fn load_all(rld_dir: &std::path::Path) -> Vec<(String, RldFile)> {
	let mut loaded = Vec::new();
	for path in rld_files(rld_dir) {
		match RldFile::open(&path) {
			Ok(file) => {
				let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string();
				loaded.push((name, file));
			}
			Err(error) => log::error!("skipping {}: {error}", path.display()),
		}
	}
	loaded
}

/// Builds the character table from `defChara.rld` alone, matching the engine's own
/// once-per-run resolution; falls back to an empty table if the directory has no such
/// file.
fn char_table_from(loaded: &[(String, RldFile)]) -> CharTable {
	loaded
		.iter()
		.find(|(name, _)| name.eq_ignore_ascii_case("defChara.rld"))
		.map(|(_, file)| CharTable::from_commands(file.commands()))
		.unwrap_or_default()
}

fn extract(rld_dir: &std::path::Path, output: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
	std::fs::create_dir_all(output)?;

	let loaded = load_all(rld_dir);

	let char_table = char_table_from(&loaded);
	let filter = TextFilterConfig::default();

	let mut per_file = Vec::new();
	for (name, file) in &loaded {
		let entries = file.extract(name, &char_table, &filter);
		per_file.push((name.as_str(), entries));
	}

	let tsv_input: Vec<(&str, &[_])> = per_file.iter().map(|(name, entries)| (*name, entries.as_slice())).collect();
	let tsv = export::render_translation_tsv(tsv_input);
	std::fs::write(output.join("translation.tsv"), tsv)?;

	let all_entries: Vec<_> = per_file.iter().flat_map(|(_, entries)| entries.iter().cloned()).collect();
	let json = export::render_translation_json(&all_entries)?;
	std::fs::write(output.join("translation.json"), json)?;

	std::fs::write(output.join("unique_names.tsv"), export::render_unique_names_tsv(&all_entries, &char_table))?;
	std::fs::write(output.join("char_table.tsv"), export::render_char_table_tsv(&char_table))?;

	log::info!("extracted {} file(s), {} entries", loaded.len(), all_entries.len());
	Ok(())
}

fn fix(
	rld_dir: &std::path::Path,
	tsv: &std::path::Path,
	out_tsv: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
	let loaded = load_all(rld_dir);
	let char_table = char_table_from(&loaded);
	let filter = TextFilterConfig::default();

	let mut pristine = HashMap::new();
	for (name, file) in &loaded {
		for entry in file.extract(name, &char_table, &filter) {
			for (kind, index, original) in pristine_rows(&entry) {
				pristine.insert(
					repair::RowKey {
						file: name.clone(),
						index,
						kind,
					},
					original,
				);
			}
		}
	}

	let working = std::fs::read_to_string(tsv)?;
	let rows = repair::parse_tsv(&working);
	let repaired = repair::repair(&rows, &pristine).join("\n");

	let out_path = out_tsv.unwrap_or(tsv);
	std::fs::write(out_path, repaired)?;
	log::info!("repaired {} -> {}", tsv.display(), out_path.display());
	Ok(())
}

/// Flattens a single [`retouch_rs::prelude::TranslationEntry`] into the `(kind, index,
/// original)` rows [`export::render_translation_tsv`] would have emitted for it.
fn pristine_rows(
	entry: &retouch_rs::prelude::TranslationEntry,
) -> Vec<(String, usize, String)> {
	use retouch_rs::prelude::TranslationEntry as E;
	match entry {
		E::Message {
			speaker,
			text,
			source,
			..
		} => {
			let mut rows = Vec::new();
			if let Some(speaker) = speaker {
				rows.push(("NAME".to_string(), source.command_index, speaker.clone()));
			}
			rows.push(("TEXT".to_string(), source.command_index, text.clone()));
			rows
		}
		E::Label { text, source } => vec![("LABEL".to_string(), source.command_index, text.clone())],
		E::Choice {
			question,
			option,
			text,
			source,
		} => vec![(format!("CHOICE_{question}_{option}"), source.command_index, text.clone())],
		E::BranchStart { .. } | E::Merge { .. } | E::Jump { .. } | E::GotoFile { .. } => Vec::new(),
	}
}
