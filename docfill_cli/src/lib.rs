use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Fill reusable text templates and export the result as a document.",
	long_about = "docfill turns a plain-text template with {{name}} placeholders into a finished \
	              document.\n\nPlaceholders are discovered automatically, each one gets a \
	              human-readable label, and the filled text is exported as a text file or a \
	              paginated PDF.\n\nQuick start:\n  docfill fields contract.txt           Show the \
	              fillable fields\n  docfill fill contract.txt \\\n    --set client_name=\"Acme \
	              LLC\" \\\n    --set date=2026-08-06           Fill and export"
)]
pub struct DocfillCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Show the fillable fields of a template.
	///
	/// Reads the template file, extracts every `{{name}}` placeholder in
	/// order of first occurrence, and prints each field with its default
	/// display label. Fails when the file contains no placeholders.
	Fields {
		/// Path to the template file.
		template: PathBuf,

		/// Output format. Use `text` for a human-readable table or `json`
		/// for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Fill a template and export the result.
	///
	/// Creates the template, substitutes the supplied values, and writes
	/// the rendered artifact to disk, all within one invocation (templates
	/// are never persisted between runs).
	///
	/// Fields without a value, or with an empty value, keep their
	/// `{{name}}` token in the output so missing data stays visible.
	Fill {
		/// Path to the template file.
		template: PathBuf,

		/// Template name. Defaults to the template file's stem; also seeds
		/// the exported filename.
		#[arg(long, short)]
		name: Option<String>,

		/// A fill value, as `name=value`. Repeatable.
		#[arg(long = "set", value_name = "NAME=VALUE")]
		set: Vec<String>,

		/// A display-label override, as `name=label`. Repeatable.
		#[arg(long = "label", value_name = "NAME=LABEL")]
		label: Vec<String>,

		/// Export format for the rendered document.
		#[arg(long, value_enum, default_value_t = ExportKind::Pdf)]
		format: ExportKind,

		/// Output path. Defaults to the artifact's suggested filename in
		/// the current directory.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption. Emits one object per
	/// field with its name and default label.
	Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportKind {
	/// Paginated A4 PDF document.
	Pdf,
	/// Plain text file, bytes unchanged.
	Txt,
}

impl From<ExportKind> for docfill_core::ExportFormat {
	fn from(kind: ExportKind) -> Self {
		match kind {
			ExportKind::Pdf => docfill_core::ExportFormat::Document,
			ExportKind::Txt => docfill_core::ExportFormat::Text,
		}
	}
}
