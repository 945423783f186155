use ratatui::style::{Color, Style};

/// Styles applied to the explorer's widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Application title and borders of the search box.
	pub header: Style,
	/// Search input text.
	pub prompt: Style,
	/// Placeholder, hints and empty-state messages.
	pub empty: Style,
	/// Card borders.
	pub card: Style,
	/// Border of the highlighted card.
	pub card_selected: Style,
	/// Field labels inside cards and the modal.
	pub label: Style,
	/// Modal border and close control.
	pub modal: Style,
}

impl Theme {
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Border colour derived from the header foreground.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A bundled theme with the names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}
