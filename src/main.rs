mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::ThemeWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	themelink::logging::initialize();
	if !cli.ignored.is_empty() {
		tracing::debug!(arguments = ?cli.ignored, "ignoring positional arguments");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.reset {
		return ThemeWorkflow::from_config(resolved).reset();
	}

	if cli.list_themes {
		return list_themes(cli.output, resolved);
	}

	ThemeWorkflow::from_config(resolved).run_interactive()
}

/// Print the discovered themes in the chosen format without prompting.
fn list_themes(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let catalog = ThemeWorkflow::from_config(settings).catalog()?;

	match format {
		OutputFormat::Plain => print_plain(&catalog),
		OutputFormat::Json => print_json(&catalog)?,
	}

	Ok(())
}
