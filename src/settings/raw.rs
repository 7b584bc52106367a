use std::str::FromStr;

use anyhow::{Result, anyhow, ensure};
use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;

use tickq::theme;

use crate::cli::CliArgs;

use super::{DEFAULT_BASE_URL, ResolvedConfig, parse_log_level};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api_key: Option<String>,
	base_url: Option<String>,
	ui: UiSection,
	log_level: Option<String>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	up_color: Option<String>,
	down_color: Option<String>,
	initial_query: Option<String>,
}

impl RawConfig {
	/// Overlay CLI flags on top of whatever the files and environment said.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(api_key) = &cli.api_key {
			self.api_key = Some(api_key.clone());
		}
		if let Some(base_url) = &cli.base_url {
			self.base_url = Some(base_url.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(up_color) = &cli.up_color {
			self.ui.up_color = Some(up_color.clone());
		}
		if let Some(down_color) = &cli.down_color {
			self.ui.down_color = Some(down_color.clone());
		}
		if let Some(initial_query) = &cli.initial_query {
			self.ui.initial_query = Some(initial_query.clone());
		}
		if let Some(log_level) = &cli.log_level {
			self.log_level = Some(log_level.clone());
		}
	}

	/// Validate and produce the configuration the application runs with.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let api_key = self.api_key.unwrap_or_default();
		ensure!(
			!api_key.trim().is_empty(),
			"no API token configured; pass --api-key, set TICKQ_API_KEY, or add api_key to the config file"
		);

		let mut theme = match &self.ui.theme {
			Some(name) => theme::by_name(name)
				.ok_or_else(|| anyhow!("unknown theme {name:?} (see --list-themes)"))?,
			None => theme::default_theme(),
		};
		if let Some(spec) = &self.ui.up_color {
			theme = theme.with_up_color(parse_color(spec)?);
		}
		if let Some(spec) = &self.ui.down_color {
			theme = theme.with_down_color(parse_color(spec)?);
		}

		let log_level = match &self.log_level {
			Some(value) => parse_log_level(value)?,
			None => LevelFilter::Warn,
		};

		Ok(ResolvedConfig {
			api_key,
			base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			log_level,
		})
	}
}

fn parse_color(spec: &str) -> Result<Color> {
	Color::from_str(spec).map_err(|_| anyhow!("invalid color {spec:?} (expected a name or #rrggbb)"))
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn raw_with_key() -> RawConfig {
		RawConfig {
			api_key: Some("token".into()),
			..RawConfig::default()
		}
	}

	#[test]
	fn missing_api_key_is_rejected() {
		let err = RawConfig::default().resolve().unwrap_err();
		assert!(err.to_string().contains("API token"));
	}

	#[test]
	fn defaults_fill_in_when_only_the_key_is_given() {
		let resolved = raw_with_key().resolve().unwrap();
		assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
		assert_eq!(resolved.theme, theme::default_theme());
		assert_eq!(resolved.log_level, LevelFilter::Warn);
		assert!(resolved.initial_query.is_empty());
	}

	#[test]
	fn accent_overrides_are_parsed() {
		let mut raw = raw_with_key();
		raw.ui.up_color = Some("#00ff00".into());
		raw.ui.down_color = Some("red".into());
		let resolved = raw.resolve().unwrap();
		assert_eq!(resolved.theme.up.fg, Some(Color::Rgb(0, 255, 0)));
		assert_eq!(resolved.theme.down.fg, Some(Color::Red));
	}

	#[test]
	fn unknown_theme_name_is_rejected() {
		let mut raw = raw_with_key();
		raw.ui.theme = Some("neon".into());
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn cli_overrides_win_over_file_values() {
		let mut raw = raw_with_key();
		raw.base_url = Some("https://files.example/api".into());

		let mut cli = crate::cli::CliArgs::try_parse_from(["tickq", "--base-url", "https://cli.example/api"])
			.unwrap();
		cli.api_key = None;
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve().unwrap();
		assert_eq!(resolved.base_url, "https://cli.example/api");
	}
}
