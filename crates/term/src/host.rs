//! Filesystem host: syntax definitions found on disk, documents read from
//! files.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use modeline_language::{DiscoveryError, SyntaxResource, discover_syntax_resources};
use modeline_primitives::{DocumentSnapshot, MemorySettingsStore, Rope, SettingsStore};
use modeline_worker::{Document, ModelineHost};
use tracing::info;

/// Host whose syntax list is discovered once at startup.
#[derive(Debug, Clone, Default)]
pub struct FsHost {
	syntaxes: Vec<SyntaxResource>,
}

impl FsHost {
	pub fn discover(roots: &[PathBuf]) -> Result<Self, DiscoveryError> {
		let syntaxes = discover_syntax_resources(roots)?;
		info!(roots = roots.len(), syntaxes = syntaxes.len(), "syntax definitions discovered");
		Ok(Self { syntaxes })
	}
}

impl ModelineHost for FsHost {
	fn list_syntax_resources(&self) -> Vec<SyntaxResource> {
		self.syntaxes.clone()
	}
}

/// A file loaded into a rope, with its own view settings.
#[derive(Debug)]
pub struct FileDocument {
	text: Rope,
	settings: MemorySettingsStore,
}

impl FileDocument {
	/// Reads `path` as UTF-8.
	pub fn open(path: &Path) -> io::Result<Self> {
		let text = Rope::from_reader(BufReader::new(File::open(path)?))?;
		Ok(Self {
			text,
			settings: MemorySettingsStore::new(),
		})
	}
}

impl DocumentSnapshot for FileDocument {
	fn line_count(&self) -> usize {
		self.text.line_count()
	}

	fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
		self.text.line_text(line)
	}
}

impl Document for FileDocument {
	fn settings(&mut self) -> &mut dyn SettingsStore {
		&mut self.settings
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_file_document_lines() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("script.py");
		fs::write(&path, "#!/usr/bin/env python\r\n# -*- mode: python -*-\r\n").expect("write");

		let doc = FileDocument::open(&path).expect("open");
		assert_eq!(doc.line_text(1).as_deref(), Some("# -*- mode: python -*-"));
	}

	#[test]
	fn test_non_utf8_file_is_an_error() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("latin1.txt");
		fs::write(&path, [0x66, 0x6f, 0xe9, 0x0a]).expect("write");

		assert!(FileDocument::open(&path).is_err());
	}

	#[test]
	fn test_discover_host() {
		let dir = tempfile::tempdir().expect("temp dir");
		fs::create_dir(dir.path().join("Rust")).expect("mkdir");
		fs::write(dir.path().join("Rust/Rust.sublime-syntax"), "").expect("write");

		let host = FsHost::discover(&[dir.path().to_path_buf()]).expect("discover");
		let names: Vec<_> = host.list_syntax_resources().into_iter().map(|s| s.name).collect();
		assert_eq!(names, vec!["Rust".to_string()]);
	}
}
