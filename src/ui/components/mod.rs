//! UI building blocks shared across rendering and state modules.

/// Input prompt row with clear hint and busy throbber.
pub mod prompt;
/// Quote panel rendering.
pub mod quote;
/// Dropdown table of search results.
pub mod results;

pub use prompt::{PromptContext, render_prompt};
pub use quote::render_quote;
pub use results::render_results;

use ratatui::layout::Rect;

/// Whether a terminal cell lies inside `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
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
		assert!(!point_in_rect(2, 5, area));
	}
}
