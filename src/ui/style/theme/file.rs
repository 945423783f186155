//! TOML schema of a bundled theme.
//!
//! ```toml
//! name = "atlas"
//! aliases = ["dark"]
//! default = true
//!
//! [styles.header]
//! fg = "#7dcfff"
//! modifiers = ["bold"]
//! ```
//!
//! Colours use ratatui's notation (`#rrggbb`, a colour name or a palette
//! index) and modifiers are `Modifier` flag names in any case.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::types::{Theme, ThemeDescriptor};

/// A parsed theme file.
pub(super) struct ThemeFile {
	pub(super) descriptor: ThemeDescriptor,
	pub(super) is_default: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: Styles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Styles {
	header: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	card: StyleSpec,
	card_selected: StyleSpec,
	label: StyleSpec,
	modal: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(colour(fg)?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(colour(bg)?);
		}
		for name in &self.modifiers {
			style = style.add_modifier(modifier(name)?);
		}
		Ok(style)
	}
}

fn colour(value: &str) -> Result<Color> {
	Color::from_str(value.trim()).map_err(|_| anyhow!("unknown colour `{value}`"))
}

fn modifier(value: &str) -> Result<Modifier> {
	Modifier::from_name(&value.trim().to_ascii_uppercase())
		.ok_or_else(|| anyhow!("unknown modifier `{value}`"))
}

/// Parse one theme file. `origin` names the file in error messages.
pub(super) fn parse(contents: &str, origin: &str) -> Result<ThemeFile> {
	let document: Document =
		toml::from_str(contents).with_context(|| format!("failed to parse {origin}"))?;

	let styles = &document.styles;
	let slot = |name: &str, spec: &StyleSpec| {
		spec.style()
			.with_context(|| format!("{origin}: styles.{name}"))
	};
	let theme = Theme {
		header: slot("header", &styles.header)?,
		prompt: slot("prompt", &styles.prompt)?,
		empty: slot("empty", &styles.empty)?,
		card: slot("card", &styles.card)?,
		card_selected: slot("card_selected", &styles.card_selected)?,
		label: slot("label", &styles.label)?,
		modal: slot("modal", &styles.modal)?,
	};

	let aliases = document
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.map(str::to_string)
		.collect();

	Ok(ThemeFile {
		descriptor: ThemeDescriptor {
			name: document.name.trim().to_string(),
			aliases,
			theme,
		},
		is_default: document.default,
	})
}
