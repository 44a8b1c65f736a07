use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use modeline_core::RegionMode;
use modeline_core::config::keys;
use modeline_primitives::{MemorySettingsStore, SettingsStore, Value};
use serde_json::Map;

#[derive(Parser, Debug)]
#[command(name = "modeline")]
#[command(about = "Report the editor settings declared by file modelines")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Files to inspect
	#[arg(required = true, value_name = "FILES")]
	pub files: Vec<PathBuf>,

	/// JSON settings file (modeline_region, modeline_region_size, mode_map_default, mode_map)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Which end of each file to scan: top, bottom or both
	#[arg(long, value_name = "REGION")]
	pub region: Option<RegionMode>,

	/// Number of lines scanned per region
	#[arg(long, value_name = "N")]
	pub region_size: Option<u64>,

	/// Extra user alias, e.g. `--alias rs=rust` (repeatable)
	#[arg(long = "alias", short = 'a', value_name = "NAME=TARGET", value_parser = parse_alias)]
	pub aliases: Vec<(String, String)>,

	/// Directory searched for .tmLanguage and .sublime-syntax files (repeatable)
	#[arg(long = "syntax-dir", short = 's', value_name = "DIR")]
	pub syntax_dirs: Vec<PathBuf>,

	/// Print reports as JSON
	#[arg(long)]
	pub json: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Builds the plugin configuration store: the `--config` file, then
	/// command-line overrides on top.
	pub fn settings_store(&self) -> anyhow::Result<MemorySettingsStore> {
		let mut store = match &self.config {
			Some(path) => {
				let text = std::fs::read_to_string(path)
					.with_context(|| format!("failed to read {}", path.display()))?;
				MemorySettingsStore::from_json(&text)
					.with_context(|| format!("{} is not a JSON settings object", path.display()))?
			}
			None => MemorySettingsStore::new(),
		};

		if let Some(region) = self.region {
			store.set(keys::MODELINE_REGION, Value::from(region.as_str()));
		}
		if let Some(size) = self.region_size {
			store.set(keys::MODELINE_REGION_SIZE, Value::from(size));
		}

		if !self.aliases.is_empty() {
			let mut mode_map = match store.get(keys::MODE_MAP, Value::Null) {
				Value::Object(map) => map,
				Value::Null => Map::new(),
				other => bail!("'{}' must be an object, found {other}", keys::MODE_MAP),
			};
			for (name, target) in &self.aliases {
				mode_map.insert(name.clone(), Value::from(target.as_str()));
			}
			store.set(keys::MODE_MAP, Value::Object(mode_map));
		}

		Ok(store)
	}
}

fn parse_alias(arg: &str) -> Result<(String, String), String> {
	let (name, target) = arg
		.split_once('=')
		.ok_or_else(|| format!("expected NAME=TARGET, got '{arg}'"))?;
	let (name, target) = (name.trim(), target.trim());
	if name.is_empty() || target.is_empty() {
		return Err(format!("alias name and target must be non-empty: '{arg}'"));
	}
	Ok((name.to_string(), target.to_string()))
}
