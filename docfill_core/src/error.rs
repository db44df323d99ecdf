use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocfillError {
	#[error(transparent)]
	#[diagnostic(code(docfill::io_error))]
	Io(#[from] std::io::Error),

	#[error("template name is empty")]
	#[diagnostic(
		code(docfill::empty_name),
		help("give the template a non-empty name")
	)]
	EmptyTemplateName,

	#[error("template content is empty")]
	#[diagnostic(
		code(docfill::empty_content),
		help("provide the template text before creating it")
	)]
	EmptyTemplateContent,

	#[error("no placeholders found in template content")]
	#[diagnostic(
		code(docfill::no_placeholders),
		help("mark fill points with `{{{{name}}}}` tokens, e.g. `Dear {{{{client_name}}}}`")
	)]
	NoPlaceholders,

	#[error("document rendering failed: {0}")]
	#[diagnostic(code(docfill::render))]
	Render(String),
}

pub type DocfillResult<T> = Result<T, DocfillError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
