//! Single-line search box backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Editable search term.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![single_line(initial.into())]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.set_text(joined);
		}
		self.text() != before
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		*self = Self::new(text);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_newline(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

fn single_line(text: String) -> String {
	text.lines().collect::<Vec<_>>().concat()
}
