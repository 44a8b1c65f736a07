use std::borrow::Cow;
use std::fmt;

/// Host-assigned identity of an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "doc#{}", self.0)
	}
}

/// A half-open interval of line numbers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
	/// First line in the region.
	pub start: usize,
	/// One past the last line in the region.
	pub end: usize,
}

impl Region {
	/// Creates a region. An inverted interval collapses to an empty one at `start`.
	pub fn new(start: usize, end: usize) -> Self {
		Self {
			start,
			end: end.max(start),
		}
	}

	/// Returns the number of lines covered.
	#[inline]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// Returns true if the region covers no lines.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Clips the region to a document of `line_count` lines.
	pub fn clip(self, line_count: usize) -> Self {
		Self::new(self.start.min(line_count), self.end.min(line_count))
	}

	/// Iterates the line indices in the region, top to bottom.
	pub fn lines(&self) -> std::ops::Range<usize> {
		self.start..self.end
	}
}

/// Read-only, line-addressable view of a document.
///
/// Line text never includes the line terminator. The host owns the snapshot;
/// scanners only borrow it for the duration of a single pass.
pub trait DocumentSnapshot {
	/// Returns the number of lines in the document.
	fn line_count(&self) -> usize;

	/// Returns the text of `line`, or `None` past the end of the document.
	fn line_text(&self, line: usize) -> Option<Cow<'_, str>>;

	/// Returns `(text, index)` pairs for every line of `region` inside the document.
	fn line_range(&self, region: Region) -> Vec<(Cow<'_, str>, usize)> {
		region
			.clip(self.line_count())
			.lines()
			.filter_map(|line| self.line_text(line).map(|text| (text, line)))
			.collect()
	}
}

impl<T: DocumentSnapshot + ?Sized> DocumentSnapshot for &T {
	fn line_count(&self) -> usize {
		(**self).line_count()
	}

	fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
		(**self).line_text(line)
	}
}

impl<T: DocumentSnapshot + ?Sized> DocumentSnapshot for Box<T> {
	fn line_count(&self) -> usize {
		(**self).line_count()
	}

	fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
		(**self).line_text(line)
	}
}

/// Snapshot over a borrowed string.
///
/// Lines are split on `\n` with a trailing `\r` removed, so a trailing newline
/// yields a final empty line, matching [`ropey::Rope`] line counting.
#[derive(Debug, Clone)]
pub struct TextSnapshot<'a> {
	lines: Vec<&'a str>,
}

impl<'a> TextSnapshot<'a> {
	pub fn new(text: &'a str) -> Self {
		let lines = text
			.split('\n')
			.map(|line| line.strip_suffix('\r').unwrap_or(line))
			.collect();
		Self { lines }
	}
}

impl DocumentSnapshot for TextSnapshot<'_> {
	fn line_count(&self) -> usize {
		self.lines.len()
	}

	fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
		self.lines.get(line).map(|text| Cow::Borrowed(*text))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_region_clip() {
		assert_eq!(Region::new(0, 5).clip(3), Region::new(0, 3));
		assert_eq!(Region::new(4, 9).clip(3), Region::new(3, 3));
		assert!(Region::new(4, 9).clip(3).is_empty());
	}

	#[test]
	fn test_region_inverted_is_empty() {
		let region = Region::new(7, 2);
		assert!(region.is_empty());
		assert_eq!(region.len(), 0);
	}

	#[test]
	fn test_text_snapshot_lines() {
		let snapshot = TextSnapshot::new("one\r\ntwo\nthree\n");
		assert_eq!(snapshot.line_count(), 4);
		assert_eq!(snapshot.line_text(0).as_deref(), Some("one"));
		assert_eq!(snapshot.line_text(2).as_deref(), Some("three"));
		assert_eq!(snapshot.line_text(3).as_deref(), Some(""));
		assert_eq!(snapshot.line_text(4), None);
	}

	#[test]
	fn test_empty_text_has_one_line() {
		let snapshot = TextSnapshot::new("");
		assert_eq!(snapshot.line_count(), 1);
		assert_eq!(snapshot.line_text(0).as_deref(), Some(""));
	}

	#[test]
	fn test_line_range_clips_to_document() {
		let snapshot = TextSnapshot::new("a\nb\nc");
		let lines: Vec<(String, usize)> = snapshot
			.line_range(Region::new(1, 10))
			.into_iter()
			.map(|(text, idx)| (text.into_owned(), idx))
			.collect();
		assert_eq!(lines, vec![("b".to_string(), 1), ("c".to_string(), 2)]);
	}
}
