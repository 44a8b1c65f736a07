//! Mode-name registry
//!
//! Maps the symbolic mode names found in modelines (`python`, `c++`, `sh`)
//! to concrete syntax resources installed in the host editor.
//!
//! # Architecture
//!
//! * [`language`]: Syntax resource identity
//! * [`registry`]: Lowercase name → resource map, layered with alias maps
//! * [`discovery`]: Filesystem scan for syntax definition files
//! * [`error`]: Build and discovery errors
//!
//! # Layering
//!
//! A registry is seeded with one entry per discovered resource, then overlaid
//! with the default alias map, then with the user alias map. Each alias must
//! point at a name already present when it is applied.

pub mod discovery;
pub mod error;
pub mod language;
pub mod registry;

pub use discovery::{SYNTAX_EXTENSIONS, discover_syntax_resources};
pub use error::{DiscoveryError, RegistryError};
pub use language::SyntaxResource;
pub use registry::{AliasLayer, AliasMap, ModeRegistry};
