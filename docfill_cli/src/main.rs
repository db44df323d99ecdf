use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use docfill_cli::Commands;
use docfill_cli::DocfillCli;
use docfill_cli::ExportKind;
use docfill_cli::OutputFormat;
use docfill_core::DocfillError;
use docfill_core::TemplateStore;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let mut args = DocfillCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.try_init();

	// Take the subcommand out so `args` stays borrowable for the runners.
	let result = match args.command.take() {
		Some(Commands::Fields { template, format }) => run_fields(&args, &template, format),
		Some(Commands::Fill {
			template,
			name,
			set,
			label,
			format,
			output,
		}) => run_fill(&args, &template, name, &set, &label, format, output),
		None => {
			eprintln!("No subcommand specified. Run `docfill --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<DocfillError>() {
			Ok(core_err) => {
				let report: miette::Report = (*core_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run_fields(
	args: &DocfillCli,
	template: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let content = std::fs::read_to_string(template)?;
	let placeholders = docfill_core::extract(&content);

	if placeholders.is_empty() {
		return Err(DocfillError::NoPlaceholders.into());
	}

	match format {
		OutputFormat::Json => {
			let fields: Vec<serde_json::Value> = placeholders
				.iter()
				.map(|name| {
					serde_json::json!({
						"name": name,
						"label": docfill_core::default_label(name),
					})
				})
				.collect();
			println!("{}", serde_json::json!({ "fields": fields }));
		}
		OutputFormat::Text => {
			if args.verbose {
				println!("Template file: {}", template.display());
			}

			println!("{}", colored!("Fields:", bold));
			for name in &placeholders {
				println!("  {name:<24} {}", docfill_core::default_label(name));
			}

			println!();
			println!("{} field(s) found", placeholders.len());
		}
	}

	Ok(())
}

fn run_fill(
	args: &DocfillCli,
	template_path: &Path,
	name: Option<String>,
	set: &[String],
	label: &[String],
	format: ExportKind,
	output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
	let content = std::fs::read_to_string(template_path)?;
	let name = name.unwrap_or_else(|| template_file_stem(template_path));
	let values = parse_pairs(set, "NAME=VALUE")?;
	let overrides = parse_pairs(label, "NAME=LABEL")?;

	// One store per invocation: templates live only for the lifetime of
	// the process.
	let mut store = TemplateStore::new();
	let template = store.create(&name, &content, &overrides)?;

	if args.verbose {
		println!(
			"Template `{}`: {} field(s)",
			template.name,
			template.placeholders.len()
		);
		for placeholder in &template.placeholders {
			println!("  {placeholder:<24} {}", template.display_label(placeholder));
		}
	}

	let (filled, summary) = docfill_core::fill_with_summary(&template, &values);

	for placeholder in &summary.unfilled {
		eprintln!(
			"{} field `{placeholder}` ({}) left unfilled",
			colored!("warning:", yellow),
			template.display_label(placeholder)
		);
	}

	let artifact = docfill_core::render(&template.name, &filled, format.into())?;
	let output = output.unwrap_or_else(|| PathBuf::from(&artifact.filename));
	std::fs::write(&output, &artifact.bytes)?;

	println!(
		"Filled {} of {} field(s).",
		colored!(summary.filled.len(), green),
		template.placeholders.len()
	);
	println!("Wrote {} ({} bytes)", output.display(), artifact.bytes.len());

	Ok(())
}

/// Default template name: the file stem of the template path.
fn template_file_stem(path: &Path) -> String {
	path.file_stem().map_or_else(
		|| "template".to_string(),
		|stem| stem.to_string_lossy().into_owned(),
	)
}

/// Parse repeated `key=value` flags into a map. Later duplicates win.
fn parse_pairs(
	pairs: &[String],
	expected: &str,
) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
	let mut map = HashMap::new();

	for pair in pairs {
		let Some((key, value)) = pair.split_once('=') else {
			return Err(format!("invalid {expected} pair: `{pair}`").into());
		};
		map.insert(key.to_string(), value.to_string());
	}

	Ok(map)
}
