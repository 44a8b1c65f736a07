//! Tokenizes the inner text of a modeline into options.

use std::sync::LazyLock;

use regex::Regex;

/// Prefixes marking an option as an editor-specific passthrough setting.
///
/// Order matters: `sublime-text-` must be tried before `sublime-`.
pub const VENDOR_PREFIXES: &[&str] = &["st-", "sublime-text-", "sublime-", "sublimetext-"];

/// `[prefix]key: value` on an already lowercased, trimmed token. The key ends
/// at the first colon, so `mode: a:b` has the value `a:b`.
static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
	let prefixes = VENDOR_PREFIXES
		.iter()
		.map(|p| regex::escape(p))
		.collect::<Vec<_>>()
		.join("|");
	Regex::new(&format!(r"^({prefixes})?([^:]+?)\s*:\s*(.+)$")).expect("option regex is valid")
});

/// One `;`-separated entry of a modeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelineOption {
	/// `key: value`, optionally vendor-prefixed.
	KeyValue {
		/// Whether the key carried one of [`VENDOR_PREFIXES`].
		vendor: bool,
		/// Key with the prefix removed.
		key: String,
		/// Raw value text.
		value: String,
	},
	/// A token without `key: value` shape, treated as a syntax name.
	Bare(String),
}

impl ModelineOption {
	/// Parses a single trimmed, lowercased token.
	pub fn parse(token: &str) -> Self {
		match OPTION_RE.captures(token) {
			Some(caps) => Self::KeyValue {
				vendor: caps.get(1).is_some(),
				key: caps[2].to_string(),
				value: caps[3].to_string(),
			},
			None => Self::Bare(token.to_string()),
		}
	}
}

/// Splits modeline text into options.
///
/// The text is lowercased, split on `;`, and each piece trimmed; empty pieces
/// are dropped.
pub fn parse_options(text: &str) -> Vec<ModelineOption> {
	text.to_lowercase()
		.split(';')
		.map(str::trim)
		.filter(|token| !token.is_empty())
		.map(ModelineOption::parse)
		.collect()
}
