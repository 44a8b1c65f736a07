//! Pending-work queue keyed by document.
//!
//! Submitting a document that is already queued replaces the queued handle
//! and bumps its submission count; the entry keeps its original position.
//! Draining is FIFO by first submission.

use indexmap::IndexMap;
use modeline_primitives::DocumentId;

/// A queued document handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<T> {
	/// Most recently submitted handle.
	pub item: T,
	/// Number of submissions coalesced into this entry.
	pub submissions: usize,
}

/// Outcome from submitting to a [`PendingQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOutcome {
	/// The document was not queued before.
	Enqueued,
	/// An existing entry was replaced.
	Coalesced {
		/// Submissions now folded into the entry.
		submissions: usize,
	},
}

/// Latest-wins, FIFO work queue keyed by [`DocumentId`].
#[derive(Debug, Clone)]
pub struct PendingQueue<T> {
	entries: IndexMap<DocumentId, Pending<T>>,
}

impl<T> Default for PendingQueue<T> {
	fn default() -> Self {
		Self {
			entries: IndexMap::new(),
		}
	}
}

impl<T> PendingQueue<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues `item` for `id`, coalescing with an existing entry.
	pub fn submit(&mut self, id: DocumentId, item: T) -> QueueOutcome {
		match self.entries.get_mut(&id) {
			Some(existing) => {
				existing.item = item;
				existing.submissions += 1;
				QueueOutcome::Coalesced {
					submissions: existing.submissions,
				}
			}
			None => {
				self.entries.insert(id, Pending { item, submissions: 1 });
				QueueOutcome::Enqueued
			}
		}
	}

	/// Removes the entry queued first.
	pub fn pop_front(&mut self) -> Option<(DocumentId, Pending<T>)> {
		self.entries.shift_remove_index(0)
	}

	/// Returns the submission count for `id`, if queued.
	pub fn submissions(&self, id: DocumentId) -> Option<usize> {
		self.entries.get(&id).map(|p| p.submissions)
	}

	/// Returns true if `id` is queued.
	pub fn contains(&self, id: DocumentId) -> bool {
		self.entries.contains_key(&id)
	}

	/// Returns the number of queued documents.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drops every queued entry.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Iterates queued document ids in drain order.
	pub fn ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
		self.entries.keys().copied()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const A: DocumentId = DocumentId(1);
	const B: DocumentId = DocumentId(2);
	const C: DocumentId = DocumentId(3);

	#[test]
	fn test_fifo_by_first_submission() {
		let mut queue = PendingQueue::new();
		assert_eq!(queue.submit(B, "b1"), QueueOutcome::Enqueued);
		assert_eq!(queue.submit(A, "a1"), QueueOutcome::Enqueued);
		assert_eq!(queue.submit(C, "c1"), QueueOutcome::Enqueued);
		assert_eq!(queue.submit(B, "b2"), QueueOutcome::Coalesced { submissions: 2 });

		assert_eq!(queue.ids().collect::<Vec<_>>(), vec![B, A, C]);
		let (id, pending) = queue.pop_front().expect("entry");
		assert_eq!(id, B);
		assert_eq!(pending, Pending { item: "b2", submissions: 2 });
	}

	#[test]
	fn test_latest_submission_wins() {
		let mut queue = PendingQueue::new();
		for rev in 1..=4 {
			queue.submit(A, rev);
		}
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.submissions(A), Some(4));
		assert_eq!(queue.pop_front().map(|(_, p)| p.item), Some(4));
		assert!(queue.is_empty());
	}

	#[test]
	fn test_resubmit_after_pop_restarts_count() {
		let mut queue = PendingQueue::new();
		queue.submit(A, ());
		queue.submit(A, ());
		queue.pop_front();
		assert_eq!(queue.submit(A, ()), QueueOutcome::Enqueued);
		assert_eq!(queue.submissions(A), Some(1));
	}

	#[test]
	fn test_clear() {
		let mut queue = PendingQueue::new();
		queue.submit(A, ());
		queue.submit(B, ());
		queue.clear();
		assert!(!queue.contains(A));
		assert_eq!(queue.pop_front(), None);
	}
}
