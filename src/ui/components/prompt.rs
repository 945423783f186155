use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the search box.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub placeholder: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the bordered search box with placeholder and status text. An
/// empty `status` leaves the right edge blank.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, status: &str) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	search_input.render(frame, inner);

	if search_input.text().is_empty() {
		render_placeholder(frame, inner, placeholder, theme);
	}

	render_status(frame, inner, status, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell for the cursor.
	let start_x = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	let display_text: String = text.chars().take(width as usize).collect();
	frame.buffer_mut().set_line(
		start_x,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		width,
	);
}

fn render_status(frame: &mut Frame, area: Rect, status: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || status.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(status.to_string(), theme.empty_style()));
	let line_width = line.width() as u16;

	let buffer = frame.buffer_mut();
	let input_row = area.top();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
