//! Grid of country cards.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::data::{Country, Grouping};
use crate::ui::UiLabels;
use crate::ui::style::Theme;

/// Narrowest a card may be before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 32;
/// Two border rows plus four field rows.
pub const CARD_HEIGHT: u16 = 6;

/// Column/row arrangement of the grid for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
	pub columns: usize,
	pub visible_rows: usize,
	pub card_width: u16,
}

impl GridMetrics {
	#[must_use]
	pub fn compute(area: Rect) -> Self {
		let columns = (area.width / CARD_MIN_WIDTH).max(1);
		let visible_rows = (area.height / CARD_HEIGHT).max(1);
		Self {
			columns: columns as usize,
			visible_rows: visible_rows as usize,
			card_width: area.width / columns,
		}
	}

	pub fn row_of(&self, position: usize) -> usize {
		position / self.columns
	}

	/// Smallest scroll offset (in rows) that keeps `cursor` on screen.
	pub fn scroll_for(&self, cursor: usize, scroll: usize) -> usize {
		let row = self.row_of(cursor);
		if row < scroll {
			row
		} else if row >= scroll + self.visible_rows {
			row + 1 - self.visible_rows
		} else {
			scroll
		}
	}
}

/// Argument bundle for [`render_grid`].
pub struct GridContext<'a> {
	pub countries: &'a [Country],
	pub filtered: &'a [usize],
	pub cursor: usize,
	pub scroll: usize,
	pub grouping: Grouping,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
}

/// Draw the visible slice of cards. Returns each card's rectangle paired with
/// its position in `filtered`.
pub fn render_grid(frame: &mut Frame, area: Rect, ctx: GridContext<'_>) -> Vec<(Rect, usize)> {
	let metrics = GridMetrics::compute(area);
	let first = ctx.scroll * metrics.columns;
	let last = (first + metrics.visible_rows * metrics.columns).min(ctx.filtered.len());
	let mut placed = Vec::with_capacity(last.saturating_sub(first));

	for position in first..last {
		let Some(country) = ctx.filtered.get(position).and_then(|&i| ctx.countries.get(i)) else {
			continue;
		};
		let offset = position - first;
		let column = (offset % metrics.columns) as u16;
		let row = (offset / metrics.columns) as u16;
		let card_area = Rect {
			x: area.x + column * metrics.card_width,
			y: area.y + row * CARD_HEIGHT,
			width: metrics.card_width,
			height: CARD_HEIGHT.min(area.bottom().saturating_sub(area.y + row * CARD_HEIGHT)),
		};
		if card_area.height < 3 {
			break;
		}

		render_card(frame, card_area, country, position == ctx.cursor, &ctx);
		placed.push((card_area, position));
	}

	placed
}

fn render_card(
	frame: &mut Frame,
	area: Rect,
	country: &Country,
	highlighted: bool,
	ctx: &GridContext<'_>,
) {
	let GridContext {
		grouping,
		labels,
		theme,
		..
	} = *ctx;
	let border_style = if highlighted {
		theme.card_selected
	} else {
		theme.card
	};
	let title_width = area.width.saturating_sub(4) as usize;
	let title = country_title(country, title_width);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style)
		.title(Span::styled(title, theme.header));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let width = inner.width as usize;
	let lines = vec![
		field_line(&labels.capital, country.first_capital(), width, theme),
		field_line(
			&labels.population,
			&grouping.integer(country.population),
			width,
			theme,
		),
		field_line(&labels.region, &country.region, width, theme),
		field_line(&labels.languages, &country.language_list(), width, theme),
	];
	frame.render_widget(Paragraph::new(lines), inner);
}

/// Padded title with the emoji flag when the record has one.
pub(crate) fn country_title(country: &Country, width: usize) -> String {
	let flag = country.flag_symbol();
	let text = if flag.is_empty() {
		format!(" {} ", country.common_name())
	} else {
		format!(" {flag} {} ", country.common_name())
	};
	fit(&text, width)
}

fn field_line(label: &str, value: &str, width: usize, theme: &Theme) -> Line<'static> {
	let label_text = format!("{label}: ");
	let remaining = width.saturating_sub(label_text.width());
	Line::from(vec![
		Span::styled(label_text, theme.label),
		Span::raw(fit(value, remaining)),
	])
}

/// Truncate to `width` columns, marking the cut with an ellipsis.
pub(crate) fn fit(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let (head, _) = text.unicode_truncate(width - 1);
	format!("{head}…")
}
