use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `tickq` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tickq",
	version,
	about = "Interactive terminal stock quote finder"
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TICKQ_CONFIG",
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
		short = 'k',
		long = "api-key",
		value_name = "KEY",
		env = "TICKQ_API_KEY",
		help = "API token for the quote service (default: from configuration)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Base URL of the quote service (default: world trading data v1)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "up-color",
		value_name = "COLOR",
		help = "Accent color for a non-negative day change (default: theme value)"
	)]
	pub(crate) up_color: Option<String>,
	#[arg(
		long = "down-color",
		value_name = "COLOR",
		help = "Accent color for a negative day change (default: theme value)"
	)]
	pub(crate) down_color: Option<String>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value = "plain",
		help = "Format for the final quote printed on exit (default: plain)"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "File log level: off, error, warn, info, debug, trace (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(long = "list-themes", help = "List available theme names and exit")]
	pub(crate) list_themes: bool,
}

/// Output formats for the quote printed on exit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Parse the process arguments.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
