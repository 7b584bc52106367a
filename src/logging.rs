//! File-backed logging setup.
//!
//! The terminal runs in raw mode, so diagnostics go to a log file under the
//! data directory instead of stderr. Request failures are the main traffic;
//! they are logged and never surfaced in the UI.

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::app_dirs;

const LOG_FILE: &str = "tickq.log";

/// Install the file logger at `level`. `LevelFilter::Off` skips installation.
pub fn initialize(level: LevelFilter) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	let dir = app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	WriteLogger::init(level, Config::default(), file)?;
	log::info!("logging initialized at {level}");
	Ok(())
}
