use std::fmt;

use serde::{Deserialize, Serialize};

/// Line-ending convention applied to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
	/// `\n`
	Unix,
	/// `\r\n`
	Windows,
	/// `\r` only.
	Cr,
}

impl LineEnding {
	/// Maps an Emacs coding-system end-of-line qualifier (`unix`, `dos`, `mac`).
	pub fn from_eol_qualifier(qualifier: &str) -> Option<Self> {
		match qualifier {
			"unix" => Some(Self::Unix),
			"dos" => Some(Self::Windows),
			"mac" => Some(Self::Cr),
			_ => None,
		}
	}

	/// Returns the value stored under the `line_endings` setting.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unix => "unix",
			Self::Windows => "windows",
			Self::Cr => "cr",
		}
	}
}

impl fmt::Display for LineEnding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
