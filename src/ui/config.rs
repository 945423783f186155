/// Text rendered around the search box, card grid and modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub title: String,
	pub subtitle: String,
	/// Placeholder shown in the empty search box.
	pub search_placeholder: String,
	/// Shown when nothing has been typed yet.
	pub prompt: String,
	/// Shown when the search term matches no country.
	pub no_results: String,
	pub loading: String,
	/// Noun after the catalogue size in the search box.
	pub countries: String,
	/// Noun after the match count in the footer.
	pub matches: String,
	/// Footer key hints while browsing the grid.
	pub browse_hints: String,
	/// Footer key hints while the modal is open.
	pub modal_hints: String,
	pub official_name: String,
	pub capital: String,
	pub region: String,
	pub subregion: String,
	pub population: String,
	pub area: String,
	pub languages: String,
	pub currencies: String,
	pub flag: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Country Explorer".to_string(),
			subtitle: "Discover information about countries around the world".to_string(),
			search_placeholder: "Search for a country...".to_string(),
			prompt: "Type a country name to start searching".to_string(),
			no_results: "No countries found".to_string(),
			loading: "Loading countries...".to_string(),
			countries: "countries".to_string(),
			matches: "matches".to_string(),
			browse_hints: "↑↓/tab move · enter details · esc quit".to_string(),
			modal_hints: "enter choose · esc close".to_string(),
			official_name: "Official name".to_string(),
			capital: "Capital".to_string(),
			region: "Region".to_string(),
			subregion: "Subregion".to_string(),
			population: "Population".to_string(),
			area: "Area".to_string(),
			languages: "Languages".to_string(),
			currencies: "Currencies".to_string(),
			flag: "Flag".to_string(),
		}
	}
}
