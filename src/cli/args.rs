use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use msel::app_dirs;

/// Version banner including the config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("msel {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "msel",
	version,
	long_version = long_version(),
	about = "Pick several options from a searchable dropdown",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `msel` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MSEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "JSON array of {name, value} options, or - for stdin (default: built-in departments)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'd',
		long = "default",
		value_name = "VALUE",
		action = ArgAction::Append,
		help = "Preselect the option with this value; repeatable (default: none)"
	)]
	pub(crate) defaults: Vec<String>,
	#[arg(
		short = 'f',
		long = "field-name",
		value_name = "NAME",
		help = "Form field name used in the output (default: selection)"
	)]
	pub(crate) field_name: Option<String>,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Text shown while nothing is selected (default: Choose...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "search-placeholder",
		value_name = "TEXT",
		help = "Text shown in the empty search input (default: Search...)"
	)]
	pub(crate) search_placeholder: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn on the control border (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for the final selection"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before starting"
	)]
	pub(crate) print_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_valid() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_are_repeatable() {
		let cli = CliArgs::parse_from(["msel", "-d", "it", "--default", "sales", "-o", "json"]);
		assert_eq!(cli.defaults, ["it", "sales"]);
		assert_eq!(cli.output, OutputFormat::Json);
		assert!(cli.catalog.is_none());
	}
}
