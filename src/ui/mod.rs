//! Interactive terminal UI for browsing countries.
//!
//! [`App`] holds the explorer state: the loaded records, the search term, the
//! highlighted card and the open detail view. The remaining submodules
//! implement input handling, rendering, the event loop and the widgets and
//! themes they draw with.

mod actions;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

pub use config::UiLabels;
pub use outcome::ExplorerOutcome;
pub use runtime::run;
pub use state::{App, ViewState};

#[cfg(test)]
mod tests;
