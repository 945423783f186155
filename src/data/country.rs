//! Country records as delivered by the REST Countries API.
//!
//! Only the fields rendered by the explorer are modelled, and only
//! `name.common` is mandatory. Missing or `null` fields fall back to empty
//! values so that sparse records (territories without a capital, for
//! example) still deserialize. Language and currency maps keep the order the
//! API sent them in.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown wherever a record lacks a value.
pub const MISSING: &str = "N/A";

/// A single country as received from the API. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Country {
	pub name: CountryName,
	#[serde(default)]
	pub cca3: Option<String>,
	#[serde(default, deserialize_with = "null_default")]
	pub capital: Vec<String>,
	#[serde(default, deserialize_with = "null_default")]
	pub population: u64,
	#[serde(default, deserialize_with = "null_default")]
	pub region: String,
	#[serde(default)]
	pub subregion: Option<String>,
	#[serde(default)]
	pub area: Option<f64>,
	#[serde(default)]
	pub languages: Option<IndexMap<String, String>>,
	#[serde(default)]
	pub currencies: Option<IndexMap<String, Currency>>,
	#[serde(default)]
	pub flag: Option<String>,
	#[serde(default, deserialize_with = "null_default")]
	pub flags: Flags,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountryName {
	pub common: String,
	#[serde(default, deserialize_with = "null_default")]
	pub official: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Currency {
	#[serde(default, deserialize_with = "null_default")]
	pub name: String,
	#[serde(default)]
	pub symbol: Option<String>,
}

/// Flag image locations. The terminal cannot draw the image, so the URL is
/// displayed alongside the emoji flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flags {
	#[serde(default)]
	pub png: Option<String>,
	#[serde(default)]
	pub svg: Option<String>,
	#[serde(default)]
	pub alt: Option<String>,
}

/// Treat an explicit `null` like an absent field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Country {
	/// Construct a minimal record. Mostly useful for tests and embedders.
	#[must_use]
	pub fn new(common: impl Into<String>, official: impl Into<String>) -> Self {
		Self {
			name: CountryName {
				common: common.into(),
				official: official.into(),
			},
			cca3: None,
			capital: Vec::new(),
			population: 0,
			region: String::new(),
			subregion: None,
			area: None,
			languages: None,
			currencies: None,
			flag: None,
			flags: Flags::default(),
		}
	}

	pub fn common_name(&self) -> &str {
		&self.name.common
	}

	/// First listed capital or the placeholder.
	pub fn first_capital(&self) -> &str {
		self.capital
			.first()
			.map(String::as_str)
			.filter(|capital| !capital.is_empty())
			.unwrap_or(MISSING)
	}

	pub fn subregion_or_missing(&self) -> &str {
		self.subregion
			.as_deref()
			.filter(|subregion| !subregion.is_empty())
			.unwrap_or(MISSING)
	}

	/// Comma-joined language display names, or the placeholder when the
	/// record has no language map.
	pub fn language_list(&self) -> String {
		match &self.languages {
			Some(languages) => languages
				.values()
				.map(String::as_str)
				.collect::<Vec<_>>()
				.join(", "),
			None => MISSING.to_string(),
		}
	}

	/// Comma-joined currency display names, or the placeholder. Currencies
	/// without a name are skipped.
	pub fn currency_list(&self) -> String {
		let names: Vec<&str> = self
			.currencies
			.iter()
			.flat_map(|currencies| currencies.values())
			.map(|currency| currency.name.as_str())
			.filter(|name| !name.is_empty())
			.collect();
		if names.is_empty() {
			MISSING.to_string()
		} else {
			names.join(", ")
		}
	}

	/// Emoji flag when present, otherwise an empty string.
	pub fn flag_symbol(&self) -> &str {
		self.flag.as_deref().unwrap_or("")
	}

	pub fn flag_url(&self) -> &str {
		self.flags
			.png
			.as_deref()
			.or(self.flags.svg.as_deref())
			.unwrap_or(MISSING)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FRANCE: &str = r#"{
		"name": {"common": "France", "official": "French Republic"},
		"cca3": "FRA",
		"capital": ["Paris"],
		"population": 67391582,
		"region": "Europe",
		"subregion": "Western Europe",
		"area": 551695.0,
		"languages": {"fra": "French"},
		"currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
		"flag": "🇫🇷",
		"flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"}
	}"#;

	#[test]
	fn deserializes_full_record() {
		let country: Country = serde_json::from_str(FRANCE).expect("parse");
		assert_eq!(country.common_name(), "France");
		assert_eq!(country.name.official, "French Republic");
		assert_eq!(country.first_capital(), "Paris");
		assert_eq!(country.language_list(), "French");
		assert_eq!(country.currency_list(), "Euro");
		assert_eq!(country.flag_url(), "https://flagcdn.com/w320/fr.png");
	}

	#[test]
	fn sparse_record_uses_placeholders() {
		let country: Country =
			serde_json::from_str(r#"{"name": {"common": "Nowhere"}}"#).expect("parse");
		assert_eq!(country.first_capital(), MISSING);
		assert_eq!(country.subregion_or_missing(), MISSING);
		assert_eq!(country.language_list(), MISSING);
		assert_eq!(country.currency_list(), MISSING);
		assert_eq!(country.flag_url(), MISSING);
		assert_eq!(country.population, 0);
	}

	#[test]
	fn null_fields_fall_back_to_placeholders() {
		let country: Country = serde_json::from_str(
			r#"{
				"name": {"common": "Bouvet Island", "official": null},
				"capital": null,
				"population": null,
				"region": null,
				"subregion": null,
				"languages": null,
				"currencies": null,
				"flag": null,
				"flags": null
			}"#,
		)
		.expect("parse");
		assert_eq!(country.common_name(), "Bouvet Island");
		assert_eq!(country.name.official, "");
		assert_eq!(country.first_capital(), MISSING);
		assert_eq!(country.population, 0);
		assert_eq!(country.region, "");
		assert_eq!(country.language_list(), MISSING);
		assert_eq!(country.flag_url(), MISSING);
	}

	#[test]
	fn currency_without_name_is_tolerated() {
		let country: Country = serde_json::from_str(
			r#"{
				"name": {"common": "Somewhere"},
				"currencies": {"XXX": {"symbol": "x"}, "EUR": {"name": "Euro"}}
			}"#,
		)
		.expect("parse");
		assert_eq!(country.currency_list(), "Euro");

		let unnamed: Country = serde_json::from_str(
			r#"{"name": {"common": "Elsewhere"}, "currencies": {"XXX": {"name": null}}}"#,
		)
		.expect("parse");
		assert_eq!(unnamed.currency_list(), MISSING);
	}

	#[test]
	fn record_without_name_is_rejected() {
		let result = serde_json::from_str::<Country>(r#"{"region": "Europe"}"#);
		assert!(result.is_err());
	}

	#[test]
	fn multiple_languages_are_comma_joined() {
		let mut country = Country::new("Belgium", "Kingdom of Belgium");
		country.languages = Some(IndexMap::from([
			("deu".to_string(), "German".to_string()),
			("fra".to_string(), "French".to_string()),
			("nld".to_string(), "Dutch".to_string()),
		]));
		assert_eq!(country.language_list(), "German, French, Dutch");
		country.languages = Some(IndexMap::from([
			("nld".to_string(), "Dutch".to_string()),
			("deu".to_string(), "German".to_string()),
		]));
		assert_eq!(country.language_list(), "Dutch, German");
	}
}
