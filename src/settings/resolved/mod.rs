use country_explorer::logging::LogOptions;
use country_explorer::{Grouping, LoaderOptions, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub loader: LoaderOptions,
	/// Timeout as configured, kept for validation and the summary.
	pub timeout_secs: Option<u64>,
	pub initial_query: String,
	pub theme: Option<String>,
	pub thousands_separator: String,
	pub labels: UiLabels,
	pub logging: LogOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Number grouping for the configured separator.
	pub fn grouping(&self) -> Grouping {
		self.thousands_separator
			.chars()
			.next()
			.map(Grouping::with_separator)
			.unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		loader: LoaderOptions::default(),
		timeout_secs: None,
		initial_query: String::new(),
		theme: None,
		thousands_separator: ",".into(),
		labels: UiLabels::default(),
		logging: LogOptions::default(),
	}
}
