//! `docfill_core` is the engine behind [docfill](https://github.com/docfill/docfill):
//! define a reusable text template with `{{name}}` placeholders, supply
//! values for the placeholders, and export the filled text as a plain-text
//! file or a paginated PDF document.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw template text
//!   → Extractor (scans `{{name}}` tokens, dedups in first-occurrence order)
//!   → Label resolver (default display label per placeholder, overridable)
//!   → Template store (validates, assigns id + timestamp, owns the record)
//! Fill request
//!   → Substitution engine (single pass over the original content)
//!   → Export renderer (raw text, or wrapped + paginated PDF)
//!   → Artifact (bytes + suggested filename, delivered by the caller)
//! ```
//!
//! ## Modules
//!
//! - [`extract`] — Placeholder token scanning and extraction.
//! - [`labels`] — Default display labels for common field names.
//! - [`store`] — In-memory, insertion-ordered template storage.
//! - [`engine`] — Placeholder substitution over template content.
//! - [`render`] — Export rendering to text or paginated document bytes.
//! - [`layout`] — Word wrap and A4 pagination for the document format.
//!
//! ## Key Types
//!
//! - [`Template`] — Immutable source text plus derived placeholders and
//!   labels.
//! - [`TemplateStore`] — The exclusive owner of all template records for
//!   one session.
//! - [`Artifact`] — Rendered bytes with a suggested filename, handed to a
//!   delivery collaborator.
//! - [`DocfillError`] — Typed failures; validation errors never leave a
//!   partial template behind.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use docfill_core::ExportFormat;
//! use docfill_core::TemplateStore;
//!
//! let mut store = TemplateStore::new();
//! let template = store
//! 	.create(
//! 		"Contract",
//! 		"Agreement between {{company_name}} and {{client_name}}.",
//! 		&HashMap::new(),
//! 	)
//! 	.unwrap();
//!
//! let values = HashMap::from([("client_name".to_string(), "Acme LLC".to_string())]);
//! let filled = docfill_core::fill(&template, &values);
//! assert_eq!(filled, "Agreement between {{company_name}} and Acme LLC.");
//!
//! let artifact = docfill_core::render(&template.name, &filled, ExportFormat::Text).unwrap();
//! assert_eq!(artifact.filename, "Contract_filled.txt");
//! ```

pub use engine::*;
pub use error::*;
pub use extract::*;
pub use labels::*;
pub use render::*;
pub use store::*;
pub use template::*;

pub mod engine;
mod error;
pub mod extract;
pub(crate) mod font;
pub mod labels;
pub mod layout;
pub(crate) mod pdf;
pub mod render;
pub mod store;
mod template;
