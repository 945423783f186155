use anyhow::Result;
use country_explorer::ExplorerOutcome;
use serde_json::json;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &ExplorerOutcome) {
	if !outcome.accepted {
		println!("Exploration cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(country) => match &country.cca3 {
			Some(code) => println!("{} ({code})", country.common_name()),
			None => println!("{}", country.common_name()),
		},
		None => println!("No selection"),
	}
}

pub(crate) fn format_outcome_json(outcome: &ExplorerOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(country) => json!({
			"name": country.common_name(),
			"official": country.name.official,
			"cca3": country.cca3,
			"capital": country.capital.first(),
			"region": country.region,
			"population": country.population,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &ExplorerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use country_explorer::Country;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_country_selection() {
		let mut country = Country::new("France", "French Republic");
		country.cca3 = Some("FRA".into());
		let outcome = ExplorerOutcome {
			accepted: true,
			query: "fra".into(),
			selection: Some(country),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["name"], "France");
		assert_eq!(value["selection"]["official"], "French Republic");
		assert_eq!(value["selection"]["cca3"], "FRA");
	}

	#[test]
	fn json_format_for_cancelled_run_has_null_selection() {
		let outcome = ExplorerOutcome {
			accepted: false,
			query: "xyz".into(),
			selection: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
