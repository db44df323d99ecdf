//! Export rendering: filled text to a deliverable artifact.

use serde::Serialize;

use crate::DocfillResult;
use crate::layout;
use crate::pdf;

/// Output formats for a filled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	/// Raw bytes of the filled text, no transformation.
	Text,
	/// Paginated A4 document (PDF).
	Document,
}

/// The kind of bytes an [`Artifact`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
	Text,
	Document,
}

/// A rendered artifact: bytes to deliver plus a suggested filename.
///
/// Transient and never stored; the actual save-to-disk or download action
/// belongs to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
	pub bytes: Vec<u8>,
	pub filename: String,
	pub kind: ArtifactKind,
}

/// Render filled text into an artifact. `template_name` seeds the suggested
/// filename.
///
/// Empty text still renders a valid artifact — an empty file for the text
/// format, a single blank page for the document format — never an error.
/// The reserved failure path is catastrophic serialization only; it is
/// fatal to the one export attempt and touches no other state.
#[allow(clippy::unnecessary_wraps)]
pub fn render(template_name: &str, text: &str, format: ExportFormat) -> DocfillResult<Artifact> {
	let artifact = match format {
		ExportFormat::Text => Artifact {
			bytes: text.as_bytes().to_vec(),
			filename: format!("{template_name}_filled.txt"),
			kind: ArtifactKind::Text,
		},
		ExportFormat::Document => {
			let pages = layout::paginate(text);

			tracing::debug!(pages = pages.len(), "laid out document");

			Artifact {
				bytes: pdf::write_document(&pages),
				filename: format!("{template_name}_filled.pdf"),
				kind: ArtifactKind::Document,
			}
		}
	};

	Ok(artifact)
}
