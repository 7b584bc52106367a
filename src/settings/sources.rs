use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use tickq::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("tickq")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".tickq.toml"));
		files.push(current_dir.join("tickq.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;

	use clap::Parser;

	use super::*;

	fn cli_for(config: &Path) -> CliArgs {
		CliArgs::try_parse_from([
			"tickq",
			"--no-config",
			"--config",
			config.to_str().unwrap(),
		])
		.unwrap()
	}

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".tickq.toml")));
		assert!(files.iter().any(|path| path.ends_with("tickq.toml")));
	}

	#[test]
	fn explicit_config_file_is_loaded() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(&path, "api_key = \"from-file\"\n[ui]\ntheme = \"slate\"\n").unwrap();

		let config = build_config(&cli_for(&path)).unwrap();
		let api_key: String = config.get("api_key").unwrap();
		assert_eq!(api_key, "from-file");
		let theme: String = config.get("ui.theme").unwrap();
		assert_eq!(theme, "slate");
	}

	#[test]
	fn missing_explicit_config_file_errors() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		assert!(build_config(&cli_for(&path)).is_err());
	}
}
