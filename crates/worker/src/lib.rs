//! Event-driven modeline evaluation.
//!
//! [`ModelineContext`] is the long-lived object a host keeps around. It owns
//! the plugin configuration store, the [`ModeRegistry`](modeline_language::ModeRegistry)
//! built from it, and a [`PendingQueue`] of documents waiting for the
//! registry. Hosts forward load/activate/save events to
//! [`ModelineContext::on_document_event`]; resolved settings are written to
//! each document's own settings store.
//!
//! Everything runs on the caller's thread. An evaluation reads one snapshot
//! and applies its settings before the next one starts.

pub mod context;
pub mod queue;

pub use context::{ContextError, Document, DocumentEvent, Evaluation, ModelineContext, ModelineHost};
pub use queue::{Pending, PendingQueue, QueueOutcome};
