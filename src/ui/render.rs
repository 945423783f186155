use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::App;
use super::components::{
	GridContext, GridMetrics, InputContext, centered_rect, render_grid,
	render_input, render_modal,
};
use super::state::ViewState;

const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 3;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.hits.clear();

		let screen = frame.area();
		let area = screen.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [header, input, body, footer] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_header(frame, header);

		self.search_input.set_style(self.theme.prompt);
		let status = if self.loading {
			String::new()
		} else {
			format!("{} {}", self.countries.len(), self.labels.countries)
		};
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: &self.labels.search_placeholder,
				area: input,
				theme: &self.theme,
			},
			&status,
		);

		match self.view_state() {
			ViewState::Loading => self.render_loading(frame, body),
			ViewState::Prompt => self.render_message(frame, body, &self.labels.prompt),
			ViewState::NoResults => self.render_message(frame, body, &self.labels.no_results),
			ViewState::Results => self.render_results(frame, body),
		}

		self.render_footer(frame, footer);

		if let Some(country) = self.selected.as_ref() {
			let areas = render_modal(
				frame,
				screen,
				country,
				self.grouping,
				&self.labels,
				&self.theme,
			);
			self.hits.modal = Some(areas.modal);
			self.hits.close_button = Some(areas.close_button);
		}
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![
			Line::from(Span::styled(self.labels.title.as_str(), self.theme.header)),
			Line::from(Span::styled(
				self.labels.subtitle.as_str(),
				self.theme.empty_style(),
			)),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_loading(&mut self, frame: &mut Frame, area: Rect) {
		let width = self.labels.loading.width() as u16 + 2;
		let target = centered_rect(area, width, 1);
		let throbber = Throbber::default()
			.label(self.labels.loading.as_str())
			.style(self.theme.empty_style())
			.throbber_style(self.theme.header);
		frame.render_stateful_widget(throbber, target, &mut self.throbber_state);
	}

	fn render_message(&self, frame: &mut Frame, area: Rect, text: &str) {
		let target = centered_rect(area, area.width, 1);
		let message = Paragraph::new(text)
			.alignment(Alignment::Center)
			.style(self.theme.empty_style());
		frame.render_widget(message, target);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let metrics = GridMetrics::compute(area);
		self.grid = Some(metrics);
		self.scroll = metrics.scroll_for(self.cursor, self.scroll);

		let placed = render_grid(
			frame,
			area,
			GridContext {
				countries: &self.countries,
				filtered: &self.filtered,
				cursor: self.cursor,
				scroll: self.scroll,
				grouping: self.grouping,
				labels: &self.labels,
				theme: &self.theme,
			},
		);
		self.hits.cards = placed;
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let hints = if self.is_modal_open() {
			&self.labels.modal_hints
		} else {
			&self.labels.browse_hints
		};
		let muted = self.theme.empty_style();
		frame.render_widget(Paragraph::new(Span::styled(hints.as_str(), muted)), area);

		if !self.loading {
			let count = format!(
				"{}/{} {}",
				self.filtered.len(),
				self.countries.len(),
				self.labels.matches
			);
			frame.render_widget(
				Paragraph::new(Span::styled(count, muted)).alignment(Alignment::Right),
				area,
			);
		}
	}
}
