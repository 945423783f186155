//! Visual styling for the explorer.
//!
//! Themes are colour schemes loaded from TOML definitions bundled into the
//! binary and looked up by name or alias.

pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
