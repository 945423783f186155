use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use country_explorer::LoaderOptions;
use country_explorer::data::loader::DEFAULT_ENDPOINT;
use country_explorer::logging::LogOptions;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod ui;

use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	endpoint: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = &cli.endpoint {
			self.api.endpoint = Some(endpoint.clone());
		}
		if let Some(timeout) = cli.timeout_secs {
			self.api.timeout_secs = Some(timeout);
		}
		if let Some(level) = &cli.log_level {
			self.logging.level = Some(level.clone());
		}
		self.ui.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.api.endpoint.is_some(),
				"COUNTRY_EXPLORER__API__ENDPOINT",
				"--endpoint",
				"api.endpoint",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.api.timeout_secs.is_some(),
				"COUNTRY_EXPLORER__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"COUNTRY_EXPLORER__UI__THEME",
				"--theme",
				"ui.theme",
			),
			thousands_separator: detect_source(
				false,
				self.ui.thousands_separator.is_some(),
				"COUNTRY_EXPLORER__UI__THOUSANDS_SEPARATOR",
				"",
				"ui.thousands_separator",
			),
		};

		let timeout_secs = self.api.timeout_secs;
		let loader = LoaderOptions {
			endpoint: self
				.api
				.endpoint
				.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			timeout: timeout_secs.map(Duration::from_secs),
		};
		let logging = LogOptions {
			level: self.logging.level,
			file: self.logging.file,
		};
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			loader,
			timeout_secs,
			initial_query: ui.initial_query,
			theme: ui.theme,
			thousands_separator: ui.thousands_separator,
			labels: ui.labels,
			logging,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
