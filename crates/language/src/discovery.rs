//! Filesystem discovery of syntax definition files.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::DiscoveryError;
use crate::language::SyntaxResource;

/// File extensions recognized as syntax definitions.
pub const SYNTAX_EXTENSIONS: &[&str] = &["tmLanguage", "sublime-syntax"];

/// Collects syntax resources below each of `roots`.
///
/// Hidden files and ignore rules are not honored; every matching file is
/// reported. Results are sorted by resource id so registry seeding is stable
/// across runs.
pub fn discover_syntax_resources(roots: &[PathBuf]) -> Result<Vec<SyntaxResource>, DiscoveryError> {
	let mut found = Vec::new();

	for root in roots {
		if !root.is_dir() {
			return Err(DiscoveryError::MissingRoot(root.clone()));
		}

		let walker = WalkBuilder::new(root)
			.standard_filters(false)
			.follow_links(true)
			.build();

		for entry in walker {
			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					tracing::warn!(error = %err, "syntax discovery entry error");
					continue;
				}
			};

			if !entry.file_type().is_some_and(|ft| ft.is_file()) {
				continue;
			}
			if !is_syntax_file(entry.path()) {
				continue;
			}

			found.push(SyntaxResource::from_resource_path(resource_id(entry.path())));
		}
	}

	found.sort_by(|a, b| a.resource_id.cmp(&b.resource_id));
	tracing::debug!(count = found.len(), "discovered syntax resources");
	Ok(found)
}

fn is_syntax_file(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| SYNTAX_EXTENSIONS.contains(&ext))
}

/// Resource ids always use `/` separators.
fn resource_id(path: &Path) -> String {
	path.to_string_lossy().replace('\\', "/")
}
