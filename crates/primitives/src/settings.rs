//! Settings-store capability.
//!
//! Hosts hand out one store per document/view (where resolved modeline
//! settings land) and one for plugin configuration (where the modeline
//! options are read from). Both speak [`serde_json::Value`], the value model
//! of JSON settings files.

use std::fmt;

use serde_json::{Map, Value};

use crate::setting::Setting;

/// Callback invoked after a store's contents change.
pub type ChangeCallback = Box<dyn Fn() + Send + Sync>;

/// Key/value settings storage with change notification.
pub trait SettingsStore {
	/// Returns the value stored under `key`, or `default` if unset.
	fn get(&self, key: &str, default: Value) -> Value;

	/// Stores `value` under `key`.
	fn set(&mut self, key: &str, value: Value);

	/// Registers a callback fired after every change.
	fn on_change(&mut self, callback: ChangeCallback);

	/// Returns true if `key` has a value.
	fn has(&self, key: &str) -> bool {
		!self.get(key, Value::Null).is_null()
	}
}

/// Writes `settings` to `store` in order, so later duplicates win.
pub fn apply_settings(store: &mut dyn SettingsStore, settings: &[Setting]) {
	for setting in settings {
		store.set(setting.name(), setting.value());
	}
}

/// In-memory [`SettingsStore`].
#[derive(Default)]
pub struct MemorySettingsStore {
	values: Map<String, Value>,
	callbacks: Vec<ChangeCallback>,
}

impl MemorySettingsStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store holding the entries of a JSON object.
	pub fn from_map(values: Map<String, Value>) -> Self {
		Self {
			values,
			callbacks: Vec::new(),
		}
	}

	/// Parses a JSON object into a store.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text).map(Self::from_map)
	}

	/// Returns the stored entries in insertion order.
	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	fn notify(&self) {
		for callback in &self.callbacks {
			callback();
		}
	}
}

impl fmt::Debug for MemorySettingsStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemorySettingsStore")
			.field("values", &self.values)
			.field("callbacks", &self.callbacks.len())
			.finish()
	}
}

impl SettingsStore for MemorySettingsStore {
	fn get(&self, key: &str, default: Value) -> Value {
		self.values.get(key).cloned().unwrap_or(default)
	}

	fn set(&mut self, key: &str, value: Value) {
		self.values.insert(key.to_string(), value);
		self.notify();
	}

	fn on_change(&mut self, callback: ChangeCallback) {
		self.callbacks.push(callback);
	}
}
