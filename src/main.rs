mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use country_explorer::ui::style;
use country_explorer::{App, ExplorerOutcome, HttpSource, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for descriptor in style::descriptors() {
			if descriptor.aliases.is_empty() {
				println!("{}", descriptor.name);
			} else {
				println!("{} ({})", descriptor.name, descriptor.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::init(&resolved.logging).context("failed to initialise logging")?;

	let outcome = explore(resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Build the explorer from the resolved settings and run it until exit.
fn explore(settings: ResolvedConfig) -> Result<ExplorerOutcome> {
	let source = HttpSource::new(&settings.loader).context("failed to build HTTP client")?;
	tracing::info!(endpoint = source.endpoint(), "fetching countries");

	let mut app = App::new();
	if let Some(name) = settings.theme.as_deref()
		&& let Some(theme) = style::by_name(name)
	{
		app.set_theme(theme);
	}
	app.set_grouping(settings.grouping());
	app.set_labels(settings.labels);
	app.set_query(settings.initial_query);
	app.start_loading(source);

	app.run()
}
