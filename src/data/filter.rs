use super::Country;

/// Return the indices of `countries` whose common name contains `term`,
/// compared case-insensitively, in source order.
///
/// A term that is blank after trimming matches nothing: the explorer shows
/// a prompt rather than the full catalogue.
pub fn filter_countries(countries: &[Country], term: &str) -> Vec<usize> {
	if term.trim().is_empty() {
		return Vec::new();
	}

	let needle = term.to_lowercase();
	countries
		.iter()
		.enumerate()
		.filter(|(_, country)| country.common_name().to_lowercase().contains(&needle))
		.map(|(index, _)| index)
		.collect()
}
