//! Log file setup.
//!
//! The terminal belongs to the UI while the explorer runs, so events go to a
//! file: `country-explorer.log` in the data directory unless another path is
//! configured.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "country-explorer.log";
pub const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
	/// Filter directive such as `debug` or `country_explorer=trace`. Falls back
	/// to `RUST_LOG`, then to [`DEFAULT_LEVEL`].
	pub level: Option<String>,
	pub file: Option<PathBuf>,
}

impl LogOptions {
	/// Configured file, or the default file inside the data directory.
	pub fn resolve_file(&self) -> Result<PathBuf> {
		match &self.file {
			Some(file) => Ok(file.clone()),
			None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		}
	}

	fn filter(&self) -> Result<EnvFilter> {
		match self.level.as_deref() {
			Some(level) => EnvFilter::try_new(level)
				.with_context(|| format!("invalid log filter `{level}`")),
			None => Ok(EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
		}
	}
}

/// Install the global subscriber. Returns the log file path.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(options: &LogOptions) -> Result<PathBuf> {
	let path = options.resolve_file()?;
	let file = open_log_file(&path)?;
	let filter = options.filter()?;

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init();
	if installed.is_err() {
		tracing::debug!("tracing subscriber already installed");
	}

	tracing::info!(
		version = env!("CARGO_PKG_VERSION"),
		log_file = %path.display(),
		"logging initialised"
	);
	Ok(path)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_file_is_used_verbatim() {
		let options = LogOptions {
			level: None,
			file: Some(PathBuf::from("/tmp/explorer.log")),
		};
		assert_eq!(
			options.resolve_file().expect("path"),
			PathBuf::from("/tmp/explorer.log")
		);
	}

	#[test]
	fn invalid_level_is_reported() {
		let options = LogOptions {
			level: Some("country_explorer=loudest".into()),
			file: None,
		};
		assert!(options.filter().is_err());
	}

	#[test]
	fn log_file_and_parents_are_created() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		open_log_file(&path).expect("open");
		assert!(path.exists());
	}
}
