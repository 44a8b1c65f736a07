use std::fmt;

use serde_json::Value;

use crate::line_ending::LineEnding;

/// Names under which settings are written to a [`SettingsStore`](crate::SettingsStore).
pub mod names {
	pub const SYNTAX: &str = "syntax";
	pub const TAB_SIZE: &str = "tab_size";
	pub const TRANSLATE_TABS_TO_SPACES: &str = "translate_tabs_to_spaces";
	pub const LINE_ENDINGS: &str = "line_endings";
}

/// A single settings mutation produced from a modeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
	/// Assign the syntax resource used to highlight the document.
	Syntax(String),
	/// Tab width in columns, as written in the modeline.
	TabSize(i64),
	/// Whether tab presses insert spaces.
	TranslateTabsToSpaces(bool),
	/// Line-ending convention for the document.
	LineEndings(LineEnding),
	/// Editor-specific setting passed through untouched.
	Raw { key: String, value: Value },
}

impl Setting {
	/// Returns the settings-store key this mutation writes.
	pub fn name(&self) -> &str {
		match self {
			Self::Syntax(_) => names::SYNTAX,
			Self::TabSize(_) => names::TAB_SIZE,
			Self::TranslateTabsToSpaces(_) => names::TRANSLATE_TABS_TO_SPACES,
			Self::LineEndings(_) => names::LINE_ENDINGS,
			Self::Raw { key, .. } => key,
		}
	}

	/// Returns the value written to the settings store.
	pub fn value(&self) -> Value {
		match self {
			Self::Syntax(resource) => Value::String(resource.clone()),
			Self::TabSize(size) => Value::from(*size),
			Self::TranslateTabsToSpaces(on) => Value::Bool(*on),
			Self::LineEndings(ending) => Value::String(ending.as_str().to_string()),
			Self::Raw { value, .. } => value.clone(),
		}
	}
}

impl fmt::Display for Setting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {}", self.name(), self.value())
	}
}
