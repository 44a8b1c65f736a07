//! Turns modeline options into settings.
//!
//! # Key semantics
//!
//! | Key                | Effect                                          |
//! |--------------------|-------------------------------------------------|
//! | `coding`           | line endings from a `-unix`/`-dos`/`-mac` tail  |
//! | `indent-tabs-mode` | `nil`/`0` → translate tabs to spaces            |
//! | `mode`             | syntax from the mode registry                   |
//! | `tab-width`        | tab size                                        |
//! | `st-<key>` etc.    | `<key>` set verbatim, value coerced as a literal |
//! | bare token         | syntax from the mode registry                   |
//!
//! `indent-tabs-mode` only recognizes `nil` and `0`; every other value,
//! including typos, disables tab translation.

use std::sync::LazyLock;

use modeline_language::ModeRegistry;
use modeline_primitives::{LineEnding, Setting};
use regex::Regex;
use tracing::trace;

use crate::coerce::coerce_value;
use crate::error::OptionError;
use crate::options::{ModelineOption, parse_options};


/// Trailing end-of-line qualifier of an Emacs coding system.
static EOL_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:.+-)?(unix|dos|mac)$").expect("coding regex is valid"));

/// Settings and warnings produced from one modeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
	/// Settings in emission order; apply in order so the last duplicate wins.
	pub settings: Vec<Setting>,
	/// Options that were skipped.
	pub warnings: Vec<OptionError>,
}

impl Resolution {
	/// Returns the setting that ends up applied for `name`.
	pub fn effective(&self, name: &str) -> Option<&Setting> {
		self.settings.iter().rev().find(|s| s.name() == name)
	}

	/// Returns true if nothing was emitted and nothing was skipped.
	pub fn is_empty(&self) -> bool {
		self.settings.is_empty() && self.warnings.is_empty()
	}
}

/// Resolves the captured text of a modeline against `registry`.
///
/// Never fails: options that cannot be applied are reported in
/// [`Resolution::warnings`] and the rest are still processed.
pub fn resolve(text: &str, registry: &ModeRegistry) -> Resolution {
	let mut resolution = Resolution::default();

	for option in parse_options(text) {
		trace!(?option, "resolving modeline option");
		match resolve_option(&option, registry) {
			Ok(Some(setting)) => resolution.settings.push(setting),
			Ok(None) => {}
			Err(warning) => resolution.warnings.push(warning),
		}
	}

	resolution
}

fn resolve_option(option: &ModelineOption, registry: &ModeRegistry) -> Result<Option<Setting>, OptionError> {
	match option {
		ModelineOption::KeyValue {
			vendor: true,
			key,
			value,
		} => {
			let value = coerce_value(value).map_err(|reason| OptionError::coercion(key, value, reason))?;
			Ok(Some(Setting::Raw {
				key: key.clone(),
				value,
			}))
		}
		ModelineOption::KeyValue {
			vendor: false,
			key,
			value,
		} => resolve_key(key, value, registry),
		ModelineOption::Bare(name) => Ok(syntax_for(registry, name)),
	}
}

fn resolve_key(key: &str, value: &str, registry: &ModeRegistry) -> Result<Option<Setting>, OptionError> {
	match key {
		"coding" => line_ending_for(value)
			.map(|ending| Some(Setting::LineEndings(ending)))
			.ok_or_else(|| OptionError::coercion(key, value, "no unix/dos/mac end-of-line qualifier")),
		"indent-tabs-mode" => Ok(Some(Setting::TranslateTabsToSpaces(matches!(value, "nil" | "0")))),
		"mode" => Ok(syntax_for(registry, value)),
		"tab-width" => parse_tab_width(value)
			.map(|size| Some(Setting::TabSize(size)))
			.map_err(|reason| OptionError::coercion(key, value, reason)),
		_ => Err(OptionError::UnrecognizedKey { key: key.to_string() }),
	}
}

/// Unknown modes are skipped without a warning.
fn syntax_for(registry: &ModeRegistry, name: &str) -> Option<Setting> {
	let resource = registry.lookup(name);
	if resource.is_none() {
		trace!(mode = name, "unknown mode");
	}
	resource.map(|r| Setting::Syntax(r.to_string()))
}

/// Extracts the line ending from a coding system such as `utf-8-unix`.
pub fn line_ending_for(coding: &str) -> Option<LineEnding> {
	EOL_RE
		.captures(coding)
		.and_then(|caps| LineEnding::from_eol_qualifier(&caps[1]))
}

/// Zero and negative widths are passed through unchanged.
fn parse_tab_width(value: &str) -> Result<i64, String> {
	value.parse::<i64>().map_err(|_| format!("invalid integer: '{value}'"))
}
