//! Placeholder substitution.

use std::collections::HashMap;

use crate::Template;
use crate::extract;

/// Which placeholders one fill operation resolved, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillSummary {
	/// Names that received a non-empty value.
	pub filled: Vec<String>,
	/// Names left visible as tokens in the output.
	pub unfilled: Vec<String>,
}

impl FillSummary {
	/// True when no tokens remain in the output.
	pub fn is_complete(&self) -> bool {
		self.unfilled.is_empty()
	}
}

/// Replace every occurrence of each placeholder token in the template
/// content with its value from `values`.
///
/// A name with no entry, or with an empty-string entry, keeps its original
/// token (delimiters included) in the output so the missing field stays
/// visible to the reader.
///
/// This is a single pass over the original content: each token span is
/// either replaced or copied, and substituted values are never rescanned.
/// A value that itself contains `{{...}}`-shaped text is emitted literally,
/// and replacements for different names cannot interact. All bytes outside
/// the token spans are copied unchanged.
pub fn fill(template: &Template, values: &HashMap<String, String>) -> String {
	fill_with_summary(template, values).0
}

/// [`fill`], plus a report of which placeholders were resolved. Collaborators
/// use the report to tell the user how many fields were filled and which were
/// left blank.
pub fn fill_with_summary(
	template: &Template,
	values: &HashMap<String, String>,
) -> (String, FillSummary) {
	let content = template.content.as_str();
	let mut output = String::with_capacity(content.len());
	let mut cursor = 0;

	for found in extract::scan(content) {
		output.push_str(&content[cursor..found.range.start]);

		match values.get(found.name) {
			Some(value) if !value.is_empty() => output.push_str(value),
			_ => output.push_str(&content[found.range.clone()]),
		}

		cursor = found.range.end;
	}

	output.push_str(&content[cursor..]);

	let mut filled = Vec::new();
	let mut unfilled = Vec::new();

	for name in &template.placeholders {
		match values.get(name) {
			Some(value) if !value.is_empty() => filled.push(name.clone()),
			_ => unfilled.push(name.clone()),
		}
	}

	tracing::debug!(
		filled = filled.len(),
		unfilled = unfilled.len(),
		"filled template"
	);

	(output, FillSummary { filled, unfilled })
}
