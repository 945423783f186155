//! Core crate exports for the `country-explorer` terminal interface.
//!
//! [`data`] fetches and filters country records, [`ui`] renders them as a
//! searchable card grid with a detail view. The common entry points are
//! re-exported here so embedders can run the explorer without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod data;
pub mod logging;
pub mod ui;

pub use data::{
	Country, CountrySource, Grouping, HttpSource, LoadError, LoaderOptions, filter_countries,
};
pub use ui::style::{Theme, ThemeDescriptor, default_theme};
pub use ui::{App, ExplorerOutcome, UiLabels, run};
