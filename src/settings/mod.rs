//! Configuration loading and resolution.
//!
//! Settings are merged from the default configuration files, any files named
//! on the command line, `TICKQ__*` environment variables and finally the CLI
//! flags themselves. `load` is the entry point and returns the
//! [`ResolvedConfig`] the application runs with.

mod raw;
mod sources;

use std::str::FromStr;

use anyhow::{Result, anyhow};
use log::LevelFilter;
use tickq::Theme;

use crate::cli::CliArgs;
use raw::RawConfig;

/// Default endpoint of the quote service.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.worldtradingdata.com/api/v1";

/// Application-ready configuration derived from config files, environment
/// variables, CLI flags and defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) api_key: String,
	pub(crate) base_url: String,
	pub(crate) theme: Theme,
	pub(crate) initial_query: String,
	pub(crate) log_level: LevelFilter,
}

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = sources::build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn parse_log_level(value: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(value)
		.map_err(|_| anyhow!("unknown log level {value:?} (expected off, error, warn, info, debug or trace)"))
}
