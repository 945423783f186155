//! Lookup of the themes embedded in the binary.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, include_dir};

use super::file::{self, ThemeFile};
use super::types::{Theme, ThemeDescriptor};

const THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/ui/style/theme/themes");

/// Bundled themes sorted by name, with a case-insensitive index over names
/// and aliases.
#[derive(Debug)]
struct Catalogue {
	themes: Vec<ThemeDescriptor>,
	lookup: HashMap<String, usize>,
	default: usize,
}

impl Catalogue {
	fn build(files: Vec<ThemeFile>) -> Result<Self> {
		let defaults: Vec<String> = files
			.iter()
			.filter(|file| file.is_default)
			.map(|file| file.descriptor.name.clone())
			.collect();
		let default_name = match defaults.as_slice() {
			[name] => name,
			[] => bail!("no theme is marked as default"),
			many => bail!("several themes are marked as default: {}", many.join(", ")),
		};

		let mut themes: Vec<ThemeDescriptor> = files.into_iter().map(|file| file.descriptor).collect();
		themes.sort_by(|a, b| a.name.cmp(&b.name));

		let mut lookup = HashMap::new();
		for (index, descriptor) in themes.iter().enumerate() {
			for key in std::iter::once(&descriptor.name).chain(&descriptor.aliases) {
				if let Some(owner) = lookup.insert(lookup_key(key), index) {
					bail!(
						"`{key}` is claimed by both {} and {}",
						themes[owner].name,
						descriptor.name
					);
				}
			}
		}

		let default = themes
			.iter()
			.position(|descriptor| &descriptor.name == default_name)
			.context("default theme vanished while indexing")?;

		Ok(Self {
			themes,
			lookup,
			default,
		})
	}

	fn get(&self, name: &str) -> Option<&ThemeDescriptor> {
		self.lookup
			.get(&lookup_key(name))
			.and_then(|&index| self.themes.get(index))
	}

	fn default_theme(&self) -> Theme {
		self.themes[self.default].theme
	}
}

fn lookup_key(name: &str) -> String {
	name.trim().to_lowercase()
}

fn load(dir: &Dir) -> Result<Catalogue> {
	let mut files = Vec::new();
	for entry in dir.files() {
		let path = entry.path();
		if path.extension().is_none_or(|extension| extension != "toml") {
			continue;
		}
		let origin = path.display().to_string();
		let contents = entry
			.contents_utf8()
			.with_context(|| format!("{origin} is not valid UTF-8"))?;
		files.push(file::parse(contents, &origin)?);
	}
	Catalogue::build(files)
}

fn catalogue() -> &'static Catalogue {
	static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
	CATALOGUE.get_or_init(|| {
		load(&THEME_DIR).unwrap_or_else(|error| panic!("bundled themes are invalid: {error:#}"))
	})
}

/// Resolve a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	catalogue().get(name).map(|descriptor| descriptor.theme)
}

/// Theme names in alphabetical order, without aliases.
#[must_use]
pub fn names() -> Vec<String> {
	catalogue()
		.themes
		.iter()
		.map(|descriptor| descriptor.name.clone())
		.collect()
}

/// Every bundled theme in alphabetical order.
#[must_use]
pub fn descriptors() -> &'static [ThemeDescriptor] {
	&catalogue().themes
}

/// The bundled theme marked as default.
#[must_use]
pub fn default_theme() -> Theme {
	catalogue().default_theme()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::style::theme::file::tests::document;

	fn theme_file(name: &str, aliases: &[&str], is_default: bool) -> ThemeFile {
		let mut file = file::parse(&document(name, aliases, ""), name).expect("parse");
		file.is_default = is_default;
		file
	}

	#[test]
	fn bundled_themes_are_listed_alphabetically() {
		assert_eq!(names(), vec!["atlas", "mono", "parchment"]);
		let atlas = &descriptors()[0];
		assert_eq!(atlas.aliases, vec!["default", "dark"]);
	}

	#[test]
	fn aliases_resolve_ignoring_case() {
		assert_eq!(by_name("Dark"), by_name("atlas"));
		assert_eq!(by_name(" light "), by_name("parchment"));
		assert_eq!(by_name("no-colour"), by_name("mono"));
		assert!(by_name("sepia").is_none());
	}

	#[test]
	fn default_theme_is_the_flagged_one() {
		assert_eq!(Some(default_theme()), by_name("atlas"));
		assert_eq!(Theme::default(), default_theme());
	}

	#[test]
	fn alias_claimed_twice_is_rejected() {
		let err = Catalogue::build(vec![
			theme_file("night", &["dark"], true),
			theme_file("dusk", &["DARK"], false),
		])
		.unwrap_err();
		assert!(err.to_string().contains("dusk"), "{err}");
		assert!(err.to_string().contains("night"), "{err}");
	}

	#[test]
	fn exactly_one_default_is_required() {
		assert!(Catalogue::build(vec![theme_file("night", &[], false)]).is_err());
		assert!(
			Catalogue::build(vec![
				theme_file("night", &[], true),
				theme_file("dusk", &[], true),
			])
			.is_err()
		);

		let catalogue = Catalogue::build(vec![
			theme_file("night", &[], false),
			theme_file("dusk", &["evening"], true),
		])
		.expect("build");
		assert_eq!(catalogue.themes[catalogue.default].name, "dusk");
		assert_eq!(catalogue.get("Evening").map(|d| d.name.as_str()), Some("dusk"));
	}
}
