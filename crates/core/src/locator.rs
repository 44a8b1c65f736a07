//! Finds the modeline line in a document.

use std::sync::LazyLock;

use modeline_primitives::{DocumentSnapshot, Region};
use regex::Regex;
use tracing::{debug, trace};

use crate::config::RegionMode;

/// Matches `-*- ... -*-` anywhere on a line, capturing the trimmed inner text.
///
/// The leading greedy `.*` makes the last opening marker with a closing marker
/// after it win, and the lazy capture stops at the nearest closing marker.
static MODELINE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^.*-\*-\s*(.+?)\s*-\*-").expect("modeline regex is valid"));

/// A modeline found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelineMatch {
	/// Zero-based line index.
	pub line: usize,
	/// Full text of the line.
	pub line_text: String,
	/// Text between the delimiters, whitespace-trimmed.
	pub options: String,
}

/// Returns the inner text if `line` carries a modeline.
pub fn match_line(line: &str) -> Option<&str> {
	MODELINE_RE
		.captures(line)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str())
}

/// Computes the regions to scan, top region first.
///
/// Both regions are clipped to the document. On documents shorter than twice
/// `size` the regions of [`RegionMode::Both`] overlap; lines in the overlap are
/// scanned twice.
pub fn candidate_regions(line_count: usize, mode: RegionMode, size: usize) -> Vec<Region> {
	if line_count == 0 {
		return Vec::new();
	}

	let mut regions = Vec::with_capacity(2);
	if mode.scans_top() {
		regions.push(Region::new(0, size).clip(line_count));
	}
	if mode.scans_bottom() {
		regions.push(Region::new(line_count.saturating_sub(size), line_count));
	}
	regions
}

/// Returns the first line of the candidate regions that carries a modeline.
pub fn locate(
	snapshot: &dyn DocumentSnapshot,
	mode: RegionMode,
	size: usize,
) -> Option<ModelineMatch> {
	let regions = candidate_regions(snapshot.line_count(), mode, size);
	trace!(?regions, %mode, size, "scanning for modeline");

	for region in regions {
		for (text, line) in snapshot.line_range(region) {
			if let Some(options) = match_line(&text) {
				debug!(line, options, "modeline found");
				return Some(ModelineMatch {
					line,
					options: options.to_string(),
					line_text: text.into_owned(),
				});
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use modeline_primitives::{Rope, TextSnapshot};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn numbered(count: usize) -> String {
		(0..count).map(|i| format!("line {i}\n")).collect()
	}

	#[rstest]
	#[case("# -*- mode: python -*-", Some("mode: python"))]
	#[case("/* -*-   tab-width: 4;   -*- */", Some("tab-width: 4;"))]
	#[case("-*-mode:c-*-", Some("mode:c"))]
	#[case("# -*- a -*- b -*-", Some("b"))]
	#[case("# -*- mode: python", None)]
	#[case("# -*--*-", None)]
	#[case("plain text", None)]
	fn test_match_line(#[case] line: &str, #[case] expected: Option<&str>) {
		assert_eq!(match_line(line), expected);
	}

	#[test]
	fn test_candidate_regions() {
		assert_eq!(candidate_regions(100, RegionMode::Top, 5), vec![Region::new(0, 5)]);
		assert_eq!(candidate_regions(100, RegionMode::Bottom, 5), vec![Region::new(95, 100)]);
		assert_eq!(
			candidate_regions(100, RegionMode::Both, 5),
			vec![Region::new(0, 5), Region::new(95, 100)]
		);
	}

	#[test]
	fn test_candidate_regions_short_document_overlap() {
		assert_eq!(
			candidate_regions(3, RegionMode::Both, 5),
			vec![Region::new(0, 3), Region::new(0, 3)]
		);
		assert!(candidate_regions(0, RegionMode::Both, 5).is_empty());
	}

	#[test]
	fn test_locate_top() {
		let doc = TextSnapshot::new("#!/bin/sh\n\n# -*- mode: python; tab-width: 4 -*-\nbody\n");
		let found = locate(&doc, RegionMode::Top, 5).expect("modeline");
		assert_eq!(found.line, 2);
		assert_eq!(found.options, "mode: python; tab-width: 4");
		assert_eq!(found.line_text, "# -*- mode: python; tab-width: 4 -*-");
	}

	#[test]
	fn test_locate_outside_top_region() {
		let text = format!("{}# -*- mode: c -*-\n", numbered(5));
		let doc = TextSnapshot::new(&text);
		assert_eq!(locate(&doc, RegionMode::Top, 5), None);
		assert_eq!(locate(&doc, RegionMode::Top, 6).map(|m| m.line), Some(5));
	}

	#[test]
	fn test_locate_bottom_only() {
		let text = format!("# -*- mode: c -*-\n{}# -*- mode: lisp -*-", numbered(20));
		let doc = Rope::from(text.as_str());
		let found = locate(&doc, RegionMode::Bottom, 5).expect("modeline");
		assert_eq!(found.line, 21);
		assert_eq!(found.options, "mode: lisp");
	}

	#[test]
	fn test_locate_both_prefers_top() {
		let text = format!("# -*- mode: c -*-\n{}# -*- mode: lisp -*-", numbered(20));
		let doc = Rope::from(text.as_str());
		let found = locate(&doc, RegionMode::Both, 5).expect("modeline");
		assert_eq!(found.options, "mode: c");
	}

	#[test]
	fn test_locate_bottom_counts_trailing_empty_line() {
		let text = format!("{}# -*- mode: c -*-\n", numbered(20));
		let doc = TextSnapshot::new(&text);
		assert_eq!(locate(&doc, RegionMode::Bottom, 1), None);
		assert_eq!(locate(&doc, RegionMode::Bottom, 2).map(|m| m.line), Some(20));
	}

	#[test]
	fn test_split_modeline_not_recognized() {
		let doc = TextSnapshot::new("# -*- mode: python;\n# tab-width: 4 -*-\n");
		assert_eq!(locate(&doc, RegionMode::Both, 5), None);
	}

	proptest! {
		#[test]
		fn prop_no_marker_no_match(lines in prop::collection::vec("[a-z +;:-]{0,30}", 0..40), size in 1usize..10) {
			let text = lines.join("\n");
			let doc = TextSnapshot::new(&text);
			prop_assert_eq!(locate(&doc, RegionMode::Both, size), None);
		}
	}
}
