use country_explorer::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let endpoint = config.loader.endpoint.as_str();
	if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"api.endpoint",
			endpoint,
			sources.source_for_endpoint(),
			"must be an http:// or https:// URL",
		));
	}

	if let Some(timeout) = config.timeout_secs
		&& timeout == 0
	{
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.thousands_separator.chars().count() != 1 {
		return Err(ConfigError::invalid(
			"ui.thousands_separator",
			config.thousands_separator.as_str(),
			sources.source_for_separator(),
			"must be exactly one character",
		));
	}

	if let Some(theme) = config.theme.as_deref()
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme,
			sources.source_for_theme(),
			format!("unknown theme; available: {}", style::names().join(", ")),
		));
	}

	Ok(())
}
