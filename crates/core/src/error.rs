//! Error types for configuration loading and option resolution.

use thiserror::Error;

/// Errors that can occur when reading modeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// `modeline_region` is not one of `top`, `bottom`, `both`.
	#[error("invalid modeline region: '{0}' (expected 'top', 'bottom' or 'both')")]
	InvalidRegion(String),

	/// `modeline_region_size` is not a positive integer.
	#[error("invalid modeline region size: {0} (expected a positive integer)")]
	InvalidRegionSize(String),

	/// A mode map is not an object of string → string.
	#[error("invalid mode map '{key}': {reason}")]
	InvalidModeMap {
		/// Settings key holding the map.
		key: &'static str,
		/// What was wrong with it.
		reason: String,
	},
}

/// A single modeline option that could not be applied.
///
/// These never abort resolution; they are collected as warnings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
	/// The value could not be turned into the type the key needs.
	#[error("cannot coerce value '{value}' for '{key}': {reason}")]
	ValueCoercion {
		/// Option key (without vendor prefix).
		key: String,
		/// Raw value text.
		value: String,
		/// Why coercion failed.
		reason: String,
	},

	/// The key has no built-in meaning.
	#[error("unrecognized modeline key '{key}'")]
	UnrecognizedKey {
		/// Option key.
		key: String,
	},
}

impl OptionError {
	pub(crate) fn coercion(key: &str, value: &str, reason: impl Into<String>) -> Self {
		Self::ValueCoercion {
			key: key.to_string(),
			value: value.to_string(),
			reason: reason.into(),
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
