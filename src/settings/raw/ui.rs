use country_explorer::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_SEPARATOR: &str = ",";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) thousands_separator: Option<String>,
	pub(super) labels: LabelSection,
}

/// Optional replacements for the built-in English labels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LabelSection {
	pub(super) title: Option<String>,
	pub(super) subtitle: Option<String>,
	pub(super) search_placeholder: Option<String>,
	pub(super) prompt: Option<String>,
	pub(super) no_results: Option<String>,
	pub(super) loading: Option<String>,
	pub(super) countries: Option<String>,
	pub(super) matches: Option<String>,
	pub(super) browse_hints: Option<String>,
	pub(super) modal_hints: Option<String>,
	pub(super) official_name: Option<String>,
	pub(super) capital: Option<String>,
	pub(super) region: Option<String>,
	pub(super) subregion: Option<String>,
	pub(super) population: Option<String>,
	pub(super) area: Option<String>,
	pub(super) languages: Option<String>,
	pub(super) currencies: Option<String>,
	pub(super) flag: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) initial_query: String,
	pub(super) thousands_separator: String,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = &cli.theme {
			self.theme = Some(theme.clone());
		}
		if let Some(query) = &cli.initial_query {
			self.initial_query = Some(query.clone());
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			theme: self.theme,
			initial_query: self.initial_query.unwrap_or_default(),
			thousands_separator: self
				.thousands_separator
				.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
			labels: self.labels.merge_into(UiLabels::default()),
		}
	}
}

impl LabelSection {
	fn merge_into(self, mut labels: UiLabels) -> UiLabels {
		let overrides = [
			(self.title, &mut labels.title),
			(self.subtitle, &mut labels.subtitle),
			(self.search_placeholder, &mut labels.search_placeholder),
			(self.prompt, &mut labels.prompt),
			(self.no_results, &mut labels.no_results),
			(self.loading, &mut labels.loading),
			(self.countries, &mut labels.countries),
			(self.matches, &mut labels.matches),
			(self.browse_hints, &mut labels.browse_hints),
			(self.modal_hints, &mut labels.modal_hints),
			(self.official_name, &mut labels.official_name),
			(self.capital, &mut labels.capital),
			(self.region, &mut labels.region),
			(self.subregion, &mut labels.subregion),
			(self.population, &mut labels.population),
			(self.area, &mut labels.area),
			(self.languages, &mut labels.languages),
			(self.currencies, &mut labels.currencies),
			(self.flag, &mut labels.flag),
		];
		for (value, slot) in overrides {
			if let Some(value) = value {
				*slot = value;
			}
		}
		labels
	}
}
