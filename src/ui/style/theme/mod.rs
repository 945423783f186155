mod catalogue;
mod file;
mod types;

pub use catalogue::{by_name, default_theme, descriptors, names};
pub use types::{Theme, ThemeDescriptor};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
