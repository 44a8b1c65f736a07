//! Syntax resource identity.

use std::path::Path;

/// A syntax definition installed in the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxResource {
	/// Display name, usually the file stem (e.g., "Python").
	pub name: String,
	/// Opaque identifier the host uses to load the syntax
	/// (e.g., "Packages/Python/Python.tmLanguage").
	pub resource_id: String,
}

impl SyntaxResource {
	pub fn new(name: impl Into<String>, resource_id: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			resource_id: resource_id.into(),
		}
	}

	/// Creates a resource named after the file stem of `resource_id`.
	pub fn from_resource_path(resource_id: impl Into<String>) -> Self {
		let resource_id = resource_id.into();
		let name = Path::new(&resource_id)
			.file_stem()
			.and_then(|stem| stem.to_str())
			.unwrap_or(&resource_id)
			.to_string();
		Self { name, resource_id }
	}

	/// Returns the registry key for this resource.
	pub fn key(&self) -> String {
		self.name.to_lowercase()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_resource_path() {
		let res = SyntaxResource::from_resource_path("Packages/Python/Python.tmLanguage");
		assert_eq!(res.name, "Python");
		assert_eq!(res.key(), "python");
		assert_eq!(res.resource_id, "Packages/Python/Python.tmLanguage");
	}

	#[test]
	fn test_stem_keeps_inner_dots() {
		let res = SyntaxResource::from_resource_path("Packages/C++/C++.sublime-syntax");
		assert_eq!(res.key(), "c++");

		let res = SyntaxResource::from_resource_path("Packages/JS/JavaScript.next.tmLanguage");
		assert_eq!(res.key(), "javascript.next");
	}
}
