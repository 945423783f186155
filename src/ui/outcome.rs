use serde::Serialize;

use crate::data::Country;

/// How the explorer was closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerOutcome {
	/// `true` when the user picked a country from the detail view.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Country>,
}

impl ExplorerOutcome {
	pub(crate) fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	pub(crate) fn chosen(query: impl Into<String>, country: Country) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(country),
		}
	}
}
