//! File logging for the terminal front-end.
//!
//! The terminal is owned by the UI, so events go to `msel.log` in the data
//! directory. `MSEL_LOG` takes an `EnvFilter` directive string and defaults
//! to `warn`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "MSEL_LOG";
const LOG_FILE: &str = "msel.log";

/// Install the global subscriber and return the log file path.
///
/// Logging is optional: when the log file cannot be opened a note goes to
/// stderr and the program runs without a subscriber.
pub fn initialize() -> Option<PathBuf> {
	let result = app_dirs::get_data_dir().and_then(|dir| initialize_in(&dir));
	match result {
		Ok(path) => Some(path),
		Err(err) => {
			eprintln!("msel: logging disabled: {err:#}");
			None
		}
	}
}

/// Log to `msel.log` under `dir`, creating the directory if needed.
///
/// A subscriber installed earlier (by a test harness, say) is left in place.
pub fn initialize_in(dir: &Path) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create data directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.is_ok();
	if installed {
		tracing::info!(path = %path.display(), "logging initialised");
	}

	Ok(path)
}
