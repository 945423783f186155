//! Detail overlay for the selected country.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::cards::country_title;
use super::geometry::centered_rect;
use crate::data::{Country, Grouping, MISSING};
use crate::ui::UiLabels;
use crate::ui::style::Theme;

pub const MODAL_MAX_WIDTH: u16 = 76;
pub const MODAL_HEIGHT: u16 = 16;
pub const CLOSE_LABEL: &str = "[X]";

const LABEL_WIDTH: usize = 15;

/// Regions of the drawn modal, for click routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAreas {
	pub modal: Rect,
	pub close_button: Rect,
}

/// Draw the overlay centred in `area`.
pub fn render_modal(
	frame: &mut Frame,
	area: Rect,
	country: &Country,
	grouping: Grouping,
	labels: &UiLabels,
	theme: &Theme,
) -> ModalAreas {
	let modal = centered_rect(area, MODAL_MAX_WIDTH, MODAL_HEIGHT);
	frame.render_widget(Clear, modal);

	let title_width = modal.width.saturating_sub(10) as usize;
	let title = country_title(country, title_width);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::DOUBLE)
		.border_style(theme.modal)
		.title(Span::styled(title, theme.header));
	let inner = block.inner(modal);
	frame.render_widget(block, modal);

	let close_button = Rect {
		x: modal.right().saturating_sub(CLOSE_LABEL.len() as u16 + 2),
		y: modal.y,
		width: CLOSE_LABEL.len() as u16,
		height: 1,
	};
	frame.render_widget(Paragraph::new(CLOSE_LABEL).style(theme.modal), close_button);

	let area_text = country
		.area
		.map(|area| grouping.area(area))
		.unwrap_or_else(|| MISSING.to_string());
	let mut lines = vec![
		detail_line(&labels.official_name, &country.name.official, theme),
		detail_line(&labels.capital, country.first_capital(), theme),
		detail_line(&labels.region, &country.region, theme),
		detail_line(&labels.subregion, country.subregion_or_missing(), theme),
		detail_line(&labels.population, &grouping.integer(country.population), theme),
		detail_line(&labels.area, &area_text, theme),
		detail_line(&labels.languages, &country.language_list(), theme),
		detail_line(&labels.currencies, &country.currency_list(), theme),
		detail_line(&labels.flag, country.flag_url(), theme),
	];
	if let Some(alt) = country.flags.alt.as_deref().filter(|alt| !alt.is_empty()) {
		lines.push(Line::default());
		lines.push(Line::from(Span::styled(alt.to_string(), theme.empty_style())));
	}

	frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

	ModalAreas {
		modal,
		close_button,
	}
}

fn detail_line(label: &str, value: &str, theme: &Theme) -> Line<'static> {
	// Labels longer than the column still get a separating space.
	let label = format!("{label} ");
	Line::from(vec![
		Span::styled(format!("{label:<LABEL_WIDTH$}"), theme.label),
		Span::raw(value.to_string()),
	])
}
