//! [`DocumentSnapshot`] for ropes.

use std::borrow::Cow;

use ropey::{Rope, RopeSlice};

use crate::document::DocumentSnapshot;

/// Returns true for every character ropey treats as (part of) a line break.
#[inline]
fn is_line_break(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
	)
}

/// Returns the text of a rope line without its terminator.
pub fn line_without_ending(line: RopeSlice<'_>) -> Cow<'_, str> {
	let text: Cow<'_, str> = line.into();
	match text {
		Cow::Borrowed(s) => Cow::Borrowed(s.trim_end_matches(is_line_break)),
		Cow::Owned(s) => Cow::Owned(s.trim_end_matches(is_line_break).to_string()),
	}
}

impl DocumentSnapshot for Rope {
	/// Counts the empty line after a trailing newline.
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
		(line < self.len_lines()).then(|| line_without_ending(self.line(line)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::{Region, TextSnapshot};

	#[test]
	fn test_no_trailing_newline() {
		let text = Rope::from("hello\nworld");
		assert_eq!(text.line_count(), 2);
		assert_eq!(text.line_text(1).as_deref(), Some("world"));
	}

	#[test]
	fn test_trailing_newline() {
		let text = Rope::from("hello\nworld\n");
		assert_eq!(text.line_count(), 3);
		assert_eq!(text.line_text(2).as_deref(), Some(""));
	}

	#[test]
	fn test_crlf_stripped() {
		let text = Rope::from("# -*- mode: c -*-\r\nint x;\r\n");
		assert_eq!(text.line_text(0).as_deref(), Some("# -*- mode: c -*-"));
	}

	#[test]
	fn test_empty() {
		let text = Rope::from("");
		assert_eq!(text.line_count(), 1);
		assert_eq!(text.line_text(0).as_deref(), Some(""));
		assert_eq!(text.line_text(1), None);
	}

	#[test]
	fn test_matches_text_snapshot() {
		let source = "alpha\nbeta\r\n\ngamma\n";
		let rope = Rope::from(source);
		let text = TextSnapshot::new(source);
		assert_eq!(rope.line_count(), text.line_count());
		let region = Region::new(0, rope.line_count());
		let from_rope: Vec<_> = rope
			.line_range(region)
			.into_iter()
			.map(|(line, idx)| (line.into_owned(), idx))
			.collect();
		let from_text: Vec<_> = text
			.line_range(region)
			.into_iter()
			.map(|(line, idx)| (line.into_owned(), idx))
			.collect();
		assert_eq!(from_rope, from_text);
	}
}
