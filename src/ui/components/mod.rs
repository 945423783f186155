//! UI building blocks shared across rendering and state modules.

/// Country card grid.
pub mod cards;
/// Hit testing and layout helpers.
pub mod geometry;
/// Detail overlay.
pub mod modal;
/// Search box with status text.
pub mod prompt;

pub use cards::{CARD_HEIGHT, CARD_MIN_WIDTH, GridContext, GridMetrics, render_grid};
pub use geometry::{HitAreas, centered_rect, point_in_rect};
pub use modal::{ModalAreas, render_modal};
pub use prompt::{InputContext, render_input};
