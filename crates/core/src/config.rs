//! Modeline configuration.
//!
//! Read from the plugin's settings store:
//!
//! ```json
//! {
//!     "modeline_region": "both",
//!     "modeline_region_size": 5,
//!     "mode_map_default": { "sh": "shell-unix-generic" },
//!     "mode_map": { "c": "c++" }
//! }
//! ```
//!
//! Missing keys take their defaults; present keys must be well-formed.

use std::fmt;
use std::str::FromStr;

use modeline_language::AliasMap;
use modeline_primitives::SettingsStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Name of the plugin's settings file, without extension.
pub const SETTINGS_NAME: &str = "Modeline";

/// Settings keys read by [`ModelineConfig::from_store`].
pub mod keys {
	pub const MODELINE_REGION: &str = "modeline_region";
	pub const MODELINE_REGION_SIZE: &str = "modeline_region_size";
	pub const MODE_MAP_DEFAULT: &str = "mode_map_default";
	pub const MODE_MAP: &str = "mode_map";
}

pub const DEFAULT_REGION: RegionMode = RegionMode::Top;
pub const DEFAULT_REGION_SIZE: usize = 5;

/// Which end(s) of a document are scanned for a modeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionMode {
	/// First N lines.
	#[default]
	Top,
	/// Last N lines.
	Bottom,
	/// First N lines, then last N lines.
	Both,
}

impl RegionMode {
	#[inline]
	pub fn scans_top(self) -> bool {
		self != Self::Bottom
	}

	#[inline]
	pub fn scans_bottom(self) -> bool {
		self != Self::Top
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Bottom => "bottom",
			Self::Both => "both",
		}
	}
}

impl fmt::Display for RegionMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RegionMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"top" => Ok(Self::Top),
			"bottom" => Ok(Self::Bottom),
			"both" => Ok(Self::Both),
			_ => Err(ConfigError::InvalidRegion(s.to_string())),
		}
	}
}

/// Loaded modeline preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelineConfig {
	/// Where to look for a modeline.
	pub region: RegionMode,
	/// How many lines each region spans.
	pub region_size: usize,
	/// Aliases shipped with the plugin.
	pub mode_map_default: AliasMap,
	/// User aliases, applied after the defaults.
	pub mode_map: AliasMap,
}

impl Default for ModelineConfig {
	fn default() -> Self {
		Self {
			region: DEFAULT_REGION,
			region_size: DEFAULT_REGION_SIZE,
			mode_map_default: AliasMap::new(),
			mode_map: AliasMap::new(),
		}
	}
}

impl ModelineConfig {
	/// Reads the configuration from `store`.
	///
	/// # Errors
	///
	/// Returns a [`ConfigError`] for the first malformed key.
	pub fn from_store(store: &dyn SettingsStore) -> Result<Self> {
		let region = match store.get(keys::MODELINE_REGION, Value::Null) {
			Value::Null => DEFAULT_REGION,
			Value::String(s) => s.parse()?,
			other => return Err(ConfigError::InvalidRegion(other.to_string())),
		};

		let region_size = match store.get(keys::MODELINE_REGION_SIZE, Value::Null) {
			Value::Null => DEFAULT_REGION_SIZE,
			other => parse_region_size(&other)?,
		};

		Ok(Self {
			region,
			region_size,
			mode_map_default: parse_mode_map(store, keys::MODE_MAP_DEFAULT)?,
			mode_map: parse_mode_map(store, keys::MODE_MAP)?,
		})
	}
}

/// Accepts a positive integer or a string holding one.
fn parse_region_size(value: &Value) -> Result<usize> {
	let size = match value {
		Value::Number(n) => n.as_u64(),
		Value::String(s) => s.trim().parse::<u64>().ok(),
		_ => None,
	};

	size.filter(|&n| n > 0)
		.and_then(|n| usize::try_from(n).ok())
		.ok_or_else(|| ConfigError::InvalidRegionSize(value.to_string()))
}

fn parse_mode_map(store: &dyn SettingsStore, key: &'static str) -> Result<AliasMap> {
	let object = match store.get(key, Value::Null) {
		Value::Null => return Ok(AliasMap::new()),
		Value::Object(object) => object,
		other => {
			return Err(ConfigError::InvalidModeMap {
				key,
				reason: format!("expected an object, got {other}"),
			});
		}
	};

	object
		.into_iter()
		.map(|(alias, target)| match target {
			Value::String(target) => Ok((alias, target)),
			other => Err(ConfigError::InvalidModeMap {
				key,
				reason: format!("alias '{alias}' must map to a syntax name, got {other}"),
			}),
		})
		.collect()
}
