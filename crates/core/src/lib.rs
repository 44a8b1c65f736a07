//! Modeline engine.
//!
//! Finds an Emacs-style `-*- key: value; ... -*-` directive near the top or
//! bottom of a document and turns it into editor settings.
//!
//! - **Locate**: [`locate`] scans the configured regions of a
//!   [`DocumentSnapshot`] and returns the first matching line.
//! - **Tokenize**: [`parse_options`] splits the captured text into
//!   [`ModelineOption`]s.
//! - **Resolve**: [`resolve`] applies per-key semantics, consulting a
//!   [`ModeRegistry`] for mode names, and returns a [`Resolution`].
//!
//! Resolution never fails as a whole. A bad option becomes an
//! [`OptionError`] warning and the remaining options still apply.
//!
//! ```
//! use modeline_core::{ModelineConfig, scan};
//! use modeline_language::{AliasMap, ModeRegistry, SyntaxResource};
//! use modeline_primitives::{Setting, TextSnapshot};
//!
//! let registry = ModeRegistry::build(
//! 	[SyntaxResource::new("Python", "Python.tmLanguage")],
//! 	&AliasMap::new(),
//! 	&AliasMap::new(),
//! )
//! .unwrap();
//! let doc = TextSnapshot::new("#!/usr/bin/env python\n# -*- mode: python; tab-width: 4 -*-\n");
//!
//! let (found, resolution) = scan(&doc, &ModelineConfig::default(), &registry).unwrap();
//! assert_eq!(found.line, 1);
//! assert_eq!(
//! 	resolution.settings,
//! 	vec![Setting::Syntax("Python.tmLanguage".into()), Setting::TabSize(4)]
//! );
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod locator;
pub mod options;
pub mod resolver;

pub use config::{DEFAULT_REGION, DEFAULT_REGION_SIZE, ModelineConfig, RegionMode};
pub use error::{ConfigError, OptionError};
pub use locator::{ModelineMatch, candidate_regions, locate, match_line};
pub use modeline_language::ModeRegistry;
pub use modeline_primitives::DocumentSnapshot;
pub use options::{ModelineOption, VENDOR_PREFIXES, parse_options};
pub use resolver::{Resolution, resolve};

/// Locates a modeline in `snapshot` and resolves it.
///
/// Returns `None` when no candidate line matches; the resolver is not run.
pub fn scan(
	snapshot: &dyn DocumentSnapshot,
	config: &ModelineConfig,
	registry: &ModeRegistry,
) -> Option<(ModelineMatch, Resolution)> {
	let found = locate(snapshot, config.region, config.region_size)?;
	let resolution = resolve(&found.options, registry);
	Some((found, resolution))
}
