//! In-memory template storage.
//!
//! Templates live only for the lifetime of the hosting process. The store is
//! the exclusive owner of every [`Template`] record; callers get shared
//! references or clones and never mutate a stored record.

use std::collections::HashMap;

use chrono::Utc;

use crate::DocfillError;
use crate::DocfillResult;
use crate::Template;
use crate::TemplateId;
use crate::extract;
use crate::labels;

/// Insertion-ordered collection of templates. All operations are synchronous
/// and run on a single logical thread, so there is no internal locking.
#[derive(Debug, Default)]
pub struct TemplateStore {
	templates: Vec<Template>,
	next_id: u64,
}

impl TemplateStore {
	/// Create an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a template from a name, raw content, and label overrides, and
	/// commit it to the store.
	///
	/// Fails without mutating the store when the name or content is empty or
	/// whitespace-only, or when the content contains no placeholder tokens.
	/// Labels are seeded from the default dictionary, then overrides for
	/// known placeholder names are applied verbatim; overrides for names not
	/// in the template are dropped.
	pub fn create(
		&mut self,
		name: &str,
		content: &str,
		overrides: &HashMap<String, String>,
	) -> DocfillResult<Template> {
		if name.trim().is_empty() {
			return Err(DocfillError::EmptyTemplateName);
		}
		if content.trim().is_empty() {
			return Err(DocfillError::EmptyTemplateContent);
		}

		let placeholders = extract::extract(content);
		if placeholders.is_empty() {
			return Err(DocfillError::NoPlaceholders);
		}

		let mut labels = labels::default_labels(&placeholders);
		for (placeholder, label) in overrides {
			if let Some(entry) = labels.get_mut(placeholder) {
				entry.clone_from(label);
			}
		}

		self.next_id += 1;
		let template = Template {
			id: TemplateId(self.next_id),
			name: name.to_string(),
			content: content.to_string(),
			placeholders,
			labels,
			created_at: Utc::now(),
		};

		tracing::debug!(
			id = %template.id,
			fields = template.placeholders.len(),
			"created template"
		);

		self.templates.push(template.clone());
		Ok(template)
	}

	/// Look up a template by id.
	pub fn get(&self, id: TemplateId) -> Option<&Template> {
		self.templates.iter().find(|template| template.id == id)
	}

	/// Delete a template by id. Returns whether a record was removed;
	/// deleting an id that is not present is a successful no-op.
	pub fn delete(&mut self, id: TemplateId) -> bool {
		let before = self.templates.len();
		self.templates.retain(|template| template.id != id);
		let removed = self.templates.len() < before;

		if removed {
			tracing::debug!(%id, "deleted template");
		}

		removed
	}

	/// All templates, in insertion order.
	pub fn list(&self) -> &[Template] {
		&self.templates
	}

	/// Number of stored templates.
	pub fn len(&self) -> usize {
		self.templates.len()
	}

	/// Whether the store holds no templates.
	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}
