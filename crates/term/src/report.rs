//! Per-file output.

use std::fmt::Write as _;
use std::path::Path;

use modeline_primitives::Value;
use modeline_worker::Evaluation;
use serde::Serialize;
use serde_json::Map;

/// What the modeline of one file resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
	pub path: String,
	/// One-based line number of the modeline.
	pub line: Option<usize>,
	pub modeline: Option<String>,
	/// Effective settings, later duplicates overriding earlier ones.
	pub settings: Map<String, Value>,
	pub warnings: Vec<String>,
}

impl FileReport {
	pub fn new(path: &Path, evaluation: &Evaluation) -> Self {
		let mut settings = Map::new();
		for setting in &evaluation.resolution.settings {
			settings.insert(setting.name().to_string(), setting.value());
		}

		Self {
			path: path.display().to_string(),
			line: evaluation.modeline.as_ref().map(|m| m.line + 1),
			modeline: evaluation.modeline.as_ref().map(|m| m.line_text.trim_end().to_string()),
			settings,
			warnings: evaluation.resolution.warnings.iter().map(ToString::to_string).collect(),
		}
	}

	pub fn render_text(&self) -> String {
		let mut out = String::new();
		match (self.line, &self.modeline) {
			(Some(line), Some(text)) => {
				let _ = writeln!(out, "{}:{line}: {text}", self.path);
			}
			_ => {
				let _ = writeln!(out, "{}: no modeline", self.path);
			}
		}
		for (name, value) in &self.settings {
			let _ = writeln!(out, "    {name} = {value}");
		}
		for warning in &self.warnings {
			let _ = writeln!(out, "    warning: {warning}");
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use modeline_core::{ModelineMatch, OptionError, Resolution};
	use modeline_primitives::{DocumentId, Setting};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn evaluation() -> Evaluation {
		Evaluation {
			document: DocumentId(0),
			submissions: 1,
			modeline: Some(ModelineMatch {
				line: 2,
				line_text: "# -*- tab-width: 2; tab-width: 8; fill-column: 80 -*-".into(),
				options: "tab-width: 2; tab-width: 8; fill-column: 80".into(),
			}),
			resolution: Resolution {
				settings: vec![Setting::TabSize(2), Setting::TabSize(8)],
				warnings: vec![OptionError::UnrecognizedKey {
					key: "fill-column".into(),
				}],
			},
		}
	}

	#[test]
	fn test_text_report() {
		let report = FileReport::new(Path::new("src/a.py"), &evaluation());
		assert_eq!(
			report.render_text(),
			"src/a.py:3: # -*- tab-width: 2; tab-width: 8; fill-column: 80 -*-\n    tab_size = 8\n    warning: unrecognized modeline key 'fill-column'\n"
		);
	}

	#[test]
	fn test_json_report() {
		let report = FileReport::new(Path::new("src/a.py"), &evaluation());
		assert_eq!(
			serde_json::to_value(&report).expect("serialize"),
			json!({
				"path": "src/a.py",
				"line": 3,
				"modeline": "# -*- tab-width: 2; tab-width: 8; fill-column: 80 -*-",
				"settings": { "tab_size": 8 },
				"warnings": ["unrecognized modeline key 'fill-column'"],
			})
		);
	}

	#[test]
	fn test_no_modeline() {
		let evaluation = Evaluation {
			document: DocumentId(0),
			submissions: 1,
			modeline: None,
			resolution: Resolution::default(),
		};
		let report = FileReport::new(Path::new("README"), &evaluation);
		assert_eq!(report.render_text(), "README: no modeline\n");
	}
}
