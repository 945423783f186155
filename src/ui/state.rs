use std::sync::mpsc::{Receiver, TryRecvError};

use throbber_widgets_tui::ThrobberState;

use super::components::{GridMetrics, HitAreas};
use super::config::UiLabels;
use crate::data::{
	Country, CountrySource, Grouping, LoadHandle, LoadUpdate, filter_countries, loader,
};
use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// What the body of the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
	Loading,
	/// Nothing typed yet.
	Prompt,
	NoResults,
	Results,
}

pub struct App<'a> {
	pub countries: Vec<Country>,
	pub search_input: SearchInput<'a>,
	pub theme: Theme,
	pub(crate) filtered: Vec<usize>,
	pub(crate) selected: Option<Country>,
	pub(crate) loading: bool,
	/// Position of the highlighted card within `filtered`.
	pub(crate) cursor: usize,
	/// First visible grid row.
	pub(crate) scroll: usize,
	pub(crate) labels: UiLabels,
	pub(crate) grouping: Grouping,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) load_updates: Option<Receiver<LoadUpdate>>,
	pub(crate) hits: HitAreas,
	pub(crate) grid: Option<GridMetrics>,
	loader: Option<LoadHandle>,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		if let Some(loader) = self.loader.take() {
			loader.cancel();
		}
	}
}

impl Default for App<'_> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> App<'a> {
	/// A new explorer waiting for its data. Call [`App::start_loading`] or
	/// [`App::set_load_updates`] to feed it.
	pub fn new() -> Self {
		Self {
			countries: Vec::new(),
			search_input: SearchInput::default(),
			theme: Theme::default(),
			filtered: Vec::new(),
			selected: None,
			loading: true,
			cursor: 0,
			scroll: 0,
			labels: UiLabels::default(),
			grouping: Grouping::default(),
			throbber_state: ThrobberState::default(),
			load_updates: None,
			hits: HitAreas::default(),
			grid: None,
			loader: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	pub fn set_grouping(&mut self, grouping: Grouping) {
		self.grouping = grouping;
	}

	/// Replace the search term and refilter.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.refresh_filter();
	}

	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Fetch countries from `source` on a background thread.
	pub fn start_loading<S: CountrySource>(&mut self, source: S) {
		let (handle, updates) = loader::spawn(source);
		self.loader = Some(handle);
		self.set_load_updates(updates);
	}

	/// Attach a receiver that delivers the loaded country list.
	pub fn set_load_updates(&mut self, updates: Receiver<LoadUpdate>) {
		self.loading = true;
		self.load_updates = Some(updates);
	}

	pub(crate) fn pump_load_updates(&mut self) {
		let Some(updates) = self.load_updates.as_ref() else {
			return;
		};
		match updates.try_recv() {
			Ok(update) => {
				self.load_updates = None;
				self.loader = None;
				self.set_countries(update.countries);
			}
			Err(TryRecvError::Empty) => {}
			Err(TryRecvError::Disconnected) => {
				tracing::warn!("country loader exited without delivering a result");
				self.load_updates = None;
				self.loader = None;
				self.set_countries(Vec::new());
			}
		}
	}

	/// Install the source list and leave the loading state.
	pub fn set_countries(&mut self, countries: Vec<Country>) {
		self.countries = countries;
		self.loading = false;
		self.refresh_filter();
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub(crate) fn refresh_filter(&mut self) {
		self.filtered = filter_countries(&self.countries, self.search_input.text());
		self.cursor = 0;
		self.scroll = 0;
	}

	/// Countries currently matching the search term, in source order.
	pub fn filtered_countries(&self) -> impl Iterator<Item = &Country> {
		self.filtered.iter().filter_map(|&index| self.countries.get(index))
	}

	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	pub(crate) fn country_at(&self, position: usize) -> Option<&Country> {
		self.filtered
			.get(position)
			.and_then(|&index| self.countries.get(index))
	}

	/// Open the detail view for the card at `position` in the filtered list.
	pub(crate) fn open_card(&mut self, position: usize) {
		if let Some(country) = self.country_at(position).cloned() {
			self.cursor = position;
			tracing::debug!(country = country.common_name(), "opening details");
			self.selected = Some(country);
		}
	}

	pub(crate) fn close_modal(&mut self) {
		self.selected = None;
	}

	pub fn selected(&self) -> Option<&Country> {
		self.selected.as_ref()
	}

	pub fn is_modal_open(&self) -> bool {
		self.selected.is_some()
	}

	pub fn view_state(&self) -> ViewState {
		if self.loading {
			ViewState::Loading
		} else if self.search_input.text().is_empty() {
			ViewState::Prompt
		} else if self.filtered.is_empty() {
			ViewState::NoResults
		} else {
			ViewState::Results
		}
	}

	pub(crate) fn move_cursor_by(&mut self, delta: isize) {
		let len = self.filtered.len();
		if len == 0 {
			self.cursor = 0;
			return;
		}
		let target = self.cursor.saturating_add_signed(delta);
		self.cursor = target.min(len - 1);
	}

	pub(crate) fn columns(&self) -> usize {
		self.grid.map_or(1, |grid| grid.columns)
	}

	pub(crate) fn page_len(&self) -> usize {
		self.grid
			.map_or(1, |grid| grid.columns * grid.visible_rows)
	}
}
