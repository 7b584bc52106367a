mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tickq::{App, WorldTradingData};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tickq::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let settings = settings::load(&cli)?;
	tickq::logging::initialize(settings.log_level)?;

	run(cli.output, settings)
}

/// Run the interactive session and print the final quote in the chosen format.
fn run(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let source = WorldTradingData::new(settings.base_url.as_str(), settings.api_key.as_str())?;
	let mut app = App::new(source, settings.theme, settings.initial_query);

	let quote = app.run()?;
	if let Some(quote) = quote {
		match format {
			OutputFormat::Plain => print_plain(&quote),
			OutputFormat::Json => print_json(&quote)?,
		}
	}

	Ok(())
}
