//! Placeholder extraction from raw template text.
//!
//! A placeholder token is `{{` followed by one or more word characters
//! followed by `}}`. Anything else is inert content and passes through the
//! rest of the pipeline untouched.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// The token pattern. Non-overlapping, scanned left to right; whitespace
/// inside the braces disqualifies a match.
static PLACEHOLDER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern compiles"));

/// A single placeholder token found in template content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
	/// The captured name, delimiters stripped.
	pub name: &'a str,
	/// Byte range of the whole token, delimiters included.
	pub range: Range<usize>,
}

/// Find every placeholder token in `content`, in text order. Duplicate names
/// are reported once per occurrence; the substitution engine replaces each
/// occurrence through these spans.
pub fn scan(content: &str) -> Vec<PlaceholderMatch<'_>> {
	PLACEHOLDER
		.find_iter(content)
		.map(|found| {
			// The delimiters are fixed two-byte markers, so the name is the
			// interior slice of the match.
			let name = &content[found.start() + 2..found.end() - 2];
			PlaceholderMatch {
				name,
				range: found.range(),
			}
		})
		.collect()
}

/// Extract the unique placeholder names from `content`, preserving the order
/// of first occurrence. Returns an empty list when the text contains no
/// tokens; `TemplateStore::create` treats that as a validation failure.
///
/// Pure and idempotent: re-extracting the same content yields the same
/// sequence.
pub fn extract(content: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut names = Vec::new();

	for found in scan(content) {
		if seen.insert(found.name) {
			names.push(found.name.to_string());
		}
	}

	names
}
