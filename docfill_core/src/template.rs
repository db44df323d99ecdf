use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use derive_more::Display;
use serde::Serialize;

/// Opaque template identifier. Monotonic within one store, collision-free
/// for the lifetime of the process.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TemplateId(pub(crate) u64);

/// A named template: immutable source text plus its derived placeholder
/// list and display labels.
///
/// Records are created atomically by [`TemplateStore::create`] and never
/// modified afterwards; the store is the only owner.
///
/// [`TemplateStore::create`]: crate::TemplateStore::create
#[derive(Debug, Clone, Serialize)]
pub struct Template {
	/// Unique identifier assigned by the store.
	pub id: TemplateId,
	/// Human-readable template name.
	pub name: String,
	/// Raw template text, with `{{name}}` tokens marking fill points.
	pub content: String,
	/// Unique placeholder names in order of first occurrence in `content`.
	pub placeholders: Vec<String>,
	/// Display label for every name in `placeholders`. User overrides are
	/// stored verbatim, including blank ones.
	pub labels: HashMap<String, String>,
	/// Creation timestamp.
	pub created_at: DateTime<Utc>,
}

impl Template {
	/// The label to show for a placeholder. Blank stored labels fall back to
	/// the raw placeholder name, not the default dictionary.
	pub fn display_label<'a>(&'a self, placeholder: &'a str) -> &'a str {
		match self.labels.get(placeholder) {
			Some(label) if !label.trim().is_empty() => label,
			_ => placeholder,
		}
	}
}
