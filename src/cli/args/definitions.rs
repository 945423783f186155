use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `country-explorer` binary.
#[derive(Parser, Debug)]
#[command(
	name = "country-explorer",
	version,
	long_version = long_version(),
	about = "Search independent countries and inspect their details",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COUNTRY_EXPLORER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Fetch countries from this URL (default: REST Countries independent list)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 't',
		long = "timeout",
		value_name = "SECS",
		help = "Give up on the request after this many seconds (default: no timeout)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Start with this search term (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: atlas)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter such as `debug` (default: RUST_LOG or info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
