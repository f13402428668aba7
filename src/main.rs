mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use msel::ui::theme;
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Some(log_path) = msel::logging::initialize() {
		tracing::debug!(path = %log_path.display(), "starting msel");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_selection(cli.output, resolved)
}

/// Run the dropdown and print the final selection in the chosen format.
fn run_selection(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = msel::ui::run(settings.app_config()).context("dropdown session failed")?;
	tracing::info!(
		accepted = outcome.accepted,
		selected = outcome.selection.len(),
		"session finished"
	);

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
