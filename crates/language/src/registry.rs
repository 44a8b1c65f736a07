//! Lowercase mode name → syntax resource map.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{RegistryError, Result};
use crate::language::SyntaxResource;

/// Alias name → target syntax name, applied in insertion order.
pub type AliasMap = IndexMap<String, String>;

/// Which alias map an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasLayer {
	/// Aliases shipped with the default configuration.
	Default,
	/// Aliases from the user's configuration.
	User,
}

impl fmt::Display for AliasLayer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Default => "default",
			Self::User => "user",
		})
	}
}

/// Maps mode names to syntax resource identifiers.
///
/// Keys are always stored lowercased and lookups fold case, so `Python`,
/// `python` and `PYTHON` resolve identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRegistry {
	modes: IndexMap<String, String>,
}

impl ModeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a registry from discovered resources and two alias layers.
	///
	/// Resources seed the map keyed by lowercased name (a later resource with
	/// the same name replaces an earlier one). `default_aliases` are applied
	/// next, then `user_aliases`, each entry binding its lowercased alias to
	/// whatever its target currently resolves to. Targets are looked up in the
	/// registry built so far, so an alias may point at an earlier alias.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::UnknownSyntaxReference`] for the first alias
	/// whose target is not present.
	pub fn build(
		discovered: impl IntoIterator<Item = SyntaxResource>,
		default_aliases: &AliasMap,
		user_aliases: &AliasMap,
	) -> Result<Self> {
		let mut registry = Self::new();
		for resource in discovered {
			trace!(name = %resource.name, resource = %resource.resource_id, "seeding mode");
			registry.modes.insert(resource.key(), resource.resource_id);
		}

		registry.apply_aliases(AliasLayer::Default, default_aliases)?;
		registry.apply_aliases(AliasLayer::User, user_aliases)?;

		debug!(modes = registry.len(), "mode registry built");
		Ok(registry)
	}

	fn apply_aliases(&mut self, layer: AliasLayer, aliases: &AliasMap) -> Result<()> {
		for (alias, target) in aliases {
			let Some(resource) = self.modes.get(&target.to_lowercase()).cloned() else {
				return Err(RegistryError::UnknownSyntaxReference {
					layer,
					alias: alias.clone(),
					target: target.clone(),
				});
			};
			trace!(%layer, %alias, %target, "aliasing mode");
			self.modes.insert(alias.to_lowercase(), resource);
		}
		Ok(())
	}

	/// Returns the resource bound to `name`, ignoring case.
	pub fn lookup(&self, name: &str) -> Option<&str> {
		self.modes.get(&name.to_lowercase()).map(String::as_str)
	}

	/// Returns true if `name` is bound, ignoring case.
	pub fn contains(&self, name: &str) -> bool {
		self.lookup(name).is_some()
	}

	/// Returns the number of bound names.
	pub fn len(&self) -> usize {
		self.modes.len()
	}

	/// Returns true if no names are bound.
	pub fn is_empty(&self) -> bool {
		self.modes.is_empty()
	}

	/// Iterates `(name, resource)` pairs in binding order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.modes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
