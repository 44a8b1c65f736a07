//! Application context owning the mode registry and pending work.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use modeline_core::{ConfigError, ModelineConfig, ModelineMatch, Resolution, scan};
use modeline_language::{ModeRegistry, RegistryError, SyntaxResource};
use modeline_primitives::{DocumentId, DocumentSnapshot, SettingsStore, apply_settings};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::queue::{PendingQueue, QueueOutcome};

/// Services the host editor provides to the context.
pub trait ModelineHost {
	/// Lists installed syntax definitions. Called once per registry build.
	fn list_syntax_resources(&self) -> Vec<SyntaxResource>;
}

/// A host document: readable text plus the settings store results land in.
pub trait Document: DocumentSnapshot {
	/// Returns the document/view settings store.
	fn settings(&mut self) -> &mut dyn SettingsStore;
}

/// Document lifecycle events that trigger an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
	Loaded,
	Activated,
	Saved,
}

impl fmt::Display for DocumentEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Loaded => "loaded",
			Self::Activated => "activated",
			Self::Saved => "saved",
		})
	}
}

/// Failure to (re)load configuration. Surfaced to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Registry(#[from] RegistryError),
}

/// Record of one document evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
	/// Evaluated document.
	pub document: DocumentId,
	/// Submissions coalesced into this evaluation.
	pub submissions: usize,
	/// The modeline found, if any.
	pub modeline: Option<ModelineMatch>,
	/// Settings applied and options skipped.
	pub resolution: Resolution,
}

/// Long-lived context tying configuration, registry, and pending documents.
///
/// Evaluations wait until the registry has been built by [`initialize`];
/// events arriving earlier are queued (coalesced per document) and drained
/// once it is ready. A change notification from the configuration store marks
/// the context stale so the next event rebuilds first. A failed rebuild is
/// kept for the host to report via [`take_error`].
///
/// [`take_error`]: ModelineContext::take_error
/// [`initialize`]: ModelineContext::initialize
pub struct ModelineContext<H, S, D> {
	host: H,
	store: S,
	config: ModelineConfig,
	registry: Option<ModeRegistry>,
	queue: PendingQueue<D>,
	stale: Arc<AtomicBool>,
	last_error: Option<ContextError>,
}

impl<H, S, D> ModelineContext<H, S, D>
where
	H: ModelineHost,
	S: SettingsStore,
	D: Document,
{
	/// Creates a context reading its configuration from `store`.
	pub fn new(host: H, mut store: S) -> Self {
		let stale = Arc::new(AtomicBool::new(false));
		let flag = Arc::clone(&stale);
		store.on_change(Box::new(move || flag.store(true, Ordering::SeqCst)));

		Self {
			host,
			store,
			config: ModelineConfig::default(),
			registry: None,
			queue: PendingQueue::new(),
			stale,
			last_error: None,
		}
	}

	/// Builds the registry and evaluates everything queued so far.
	///
	/// # Errors
	///
	/// Returns the configuration or registry error; the context then stays
	/// not ready and keeps queueing until a later reload succeeds.
	pub fn initialize(&mut self) -> Result<Vec<Evaluation>, ContextError> {
		self.reload()?;
		info!(modes = self.registry.as_ref().map_or(0, ModeRegistry::len), "modeline initialized");
		Ok(self.drain())
	}

	/// Re-reads configuration and rebuilds the registry.
	///
	/// On failure the previous configuration and registry stay in place.
	pub fn reload(&mut self) -> Result<(), ContextError> {
		self.stale.store(false, Ordering::SeqCst);

		let result = ModelineConfig::from_store(&self.store)
			.map_err(ContextError::from)
			.and_then(|config| {
				let registry = ModeRegistry::build(
					self.host.list_syntax_resources(),
					&config.mode_map_default,
					&config.mode_map,
				)?;
				Ok((config, registry))
			});

		match result {
			Ok((config, registry)) => {
				debug!(region = %config.region, size = config.region_size, modes = registry.len(), "modeline configuration loaded");
				self.config = config;
				self.registry = Some(registry);
				self.last_error = None;
				Ok(())
			}
			Err(error) => {
				warn!(%error, ready = self.is_ready(), "modeline configuration rejected");
				self.last_error = Some(error.clone());
				Err(error)
			}
		}
	}

	/// Handles a document lifecycle event.
	///
	/// Returns the evaluations run as a result: none while the registry is
	/// not ready, otherwise this document plus anything still queued. A rebuild
	/// triggered by a configuration change that fails leaves its error in
	/// [`take_error`](Self::take_error).
	pub fn on_document_event(&mut self, id: DocumentId, event: DocumentEvent, document: D) -> Vec<Evaluation> {
		match self.queue.submit(id, document) {
			QueueOutcome::Enqueued => debug!(doc = %id, %event, "document queued"),
			QueueOutcome::Coalesced { submissions } => {
				debug!(doc = %id, %event, submissions, "document coalesced")
			}
		}

		if self.stale.load(Ordering::SeqCst) {
			// Kept in `last_error`; the previous registry stays usable.
			let _ = self.reload();
		}

		if !self.is_ready() {
			debug!(doc = %id, pending = self.queue.len(), "registry not ready, deferring");
			return Vec::new();
		}

		self.drain()
	}

	/// Drops the registry and pending work, returning to the not-ready state.
	pub fn teardown(&mut self) {
		debug!(dropped = self.queue.len(), "modeline context torn down");
		self.registry = None;
		self.queue.clear();
		self.last_error = None;
	}

	/// Returns true once a registry has been built.
	pub fn is_ready(&self) -> bool {
		self.registry.is_some()
	}

	/// Returns true if the configuration changed since the last reload.
	pub fn is_stale(&self) -> bool {
		self.stale.load(Ordering::SeqCst)
	}

	pub fn registry(&self) -> Option<&ModeRegistry> {
		self.registry.as_ref()
	}

	pub fn config(&self) -> &ModelineConfig {
		&self.config
	}

	/// Returns the number of documents waiting for evaluation.
	pub fn pending(&self) -> usize {
		self.queue.len()
	}

	/// Takes the error from the most recent failed reload, if no reload has
	/// succeeded since.
	pub fn take_error(&mut self) -> Option<ContextError> {
		self.last_error.take()
	}

	/// Returns the configuration store; writes mark the context stale.
	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	fn drain(&mut self) -> Vec<Evaluation> {
		let mut evaluations = Vec::with_capacity(self.queue.len());
		while let Some((id, pending)) = self.queue.pop_front() {
			evaluations.push(self.evaluate(id, pending.item, pending.submissions));
		}
		evaluations
	}

	fn evaluate(&self, id: DocumentId, mut document: D, submissions: usize) -> Evaluation {
		let mut evaluation = Evaluation {
			document: id,
			submissions,
			modeline: None,
			resolution: Resolution::default(),
		};
		let Some(registry) = self.registry.as_ref() else {
			return evaluation;
		};

		debug!(doc = %id, submissions, "evaluating document");
		let Some((modeline, resolution)) = scan(&document, &self.config, registry) else {
			return evaluation;
		};

		for warning in &resolution.warnings {
			warn!(doc = %id, line = modeline.line, error = %warning, "modeline option skipped");
		}
		apply_settings(document.settings(), &resolution.settings);

		evaluation.modeline = Some(modeline);
		evaluation.resolution = resolution;
		evaluation
	}
}
