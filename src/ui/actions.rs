use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::outcome::ExplorerOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ExplorerOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(ExplorerOutcome::cancelled(self.query()));
		}

		// The search box is inert while the detail view is up.
		if self.is_modal_open() {
			match key.code {
				KeyCode::Esc => self.close_modal(),
				KeyCode::Enter => {
					if let Some(country) = self.selected.clone() {
						return Some(ExplorerOutcome::chosen(self.query(), country));
					}
				}
				_ => {}
			}
			return None;
		}

		match key.code {
			KeyCode::Esc => {
				return Some(ExplorerOutcome::cancelled(self.query()));
			}
			KeyCode::Enter => self.open_card(self.cursor),
			KeyCode::Up => self.move_cursor_by(-(self.columns() as isize)),
			KeyCode::Down => self.move_cursor_by(self.columns() as isize),
			KeyCode::BackTab => self.move_cursor_by(-1),
			KeyCode::Tab => self.move_cursor_by(1),
			KeyCode::PageUp => self.move_cursor_by(-(self.page_len() as isize)),
			KeyCode::PageDown => self.move_cursor_by(self.page_len() as isize),
			_ => {
				if self.search_input.input(key) {
					self.refresh_filter();
				}
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);

		if self.is_modal_open() {
			// Until the modal has been drawn there is no area to test against.
			if self.hits.modal.is_none() {
				return;
			}
			if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
				&& (self.hits.on_close_button(column, row) || !self.hits.in_modal(column, row))
			{
				self.close_modal();
			}
			return;
		}

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(position) = self.hits.card_at(column, row) {
					self.open_card(position);
				}
			}
			MouseEventKind::ScrollUp => self.move_cursor_by(-(self.columns() as isize)),
			MouseEventKind::ScrollDown => self.move_cursor_by(self.columns() as isize),
			_ => {}
		}
	}
}
