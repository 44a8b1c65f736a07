//! Core types shared by the modeline crates: document snapshots, line
//! regions, typed settings, and the settings-store capability.

/// Line-addressable document snapshots and scan regions.
pub mod document;
/// Line-ending conventions.
pub mod line_ending;
/// Rope-backed document snapshots.
pub mod rope;
/// Typed settings mutations emitted by modeline resolution.
pub mod setting;
/// Settings-store capability and an in-memory implementation.
pub mod settings;

pub use document::{DocumentId, DocumentSnapshot, Region, TextSnapshot};
pub use line_ending::LineEnding;
pub use ropey::Rope;
pub use serde_json::Value;
pub use setting::Setting;
pub use settings::{ChangeCallback, MemorySettingsStore, SettingsStore, apply_settings};
