use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Centre a `width` x `height` box inside `area`, clamped to its bounds.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	cell
}

/// Screen regions recorded during the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
	/// Card rectangles paired with their position in the filtered list.
	pub cards: Vec<(Rect, usize)>,
	pub modal: Option<Rect>,
	pub close_button: Option<Rect>,
}

impl HitAreas {
	pub fn clear(&mut self) {
		self.cards.clear();
		self.modal = None;
		self.close_button = None;
	}

	/// Filtered-list position of the card under the pointer.
	pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
		self.cards
			.iter()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, position)| *position)
	}

	pub fn in_modal(&self, column: u16, row: u16) -> bool {
		self.modal
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn on_close_button(&self, column: u16, row: u16) -> bool {
		self.close_button
			.is_some_and(|area| point_in_rect(column, row, area))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_in_rect_excludes_far_edges() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(5, 5, area));
		assert!(!point_in_rect(0, 0, Rect::default()));
	}

	#[test]
	fn centered_rect_is_clamped_to_area() {
		let area = Rect::new(0, 0, 40, 10);
		let inner = centered_rect(area, 20, 4);
		assert_eq!(inner, Rect::new(10, 3, 20, 4));
		let clamped = centered_rect(area, 100, 100);
		assert_eq!(clamped, area);
	}

	#[test]
	fn card_lookup_uses_recorded_areas() {
		let hits = HitAreas {
			cards: vec![(Rect::new(0, 0, 10, 5), 0), (Rect::new(10, 0, 10, 5), 1)],
			..HitAreas::default()
		};
		assert_eq!(hits.card_at(12, 2), Some(1));
		assert_eq!(hits.card_at(25, 2), None);
	}
}
