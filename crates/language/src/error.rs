//! Error types for registry construction and resource discovery.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::AliasLayer;

/// Errors raised while building a [`ModeRegistry`](crate::ModeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// An alias points at a syntax name the registry does not know.
	#[error("{layer} alias '{alias}' references unknown syntax '{target}'")]
	UnknownSyntaxReference {
		/// Alias map the entry came from.
		layer: AliasLayer,
		/// Alias being defined.
		alias: String,
		/// Syntax name it points at.
		target: String,
	},
}

/// Errors raised while scanning for syntax resources.
#[derive(Debug, Error)]
pub enum DiscoveryError {
	/// A search root does not exist or is not a directory.
	#[error("syntax search root is not a directory: {0}")]
	MissingRoot(PathBuf),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
