use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::ui::components::point_in_rect;

impl App {
	/// Process a keyboard event. Returns `true` when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(true);
			}
			KeyCode::Esc => {
				self.clear_search();
			}
			KeyCode::Enter => {
				if self.dropdown_visible()
					&& let Some(entry) = self.current_selection()
				{
					let symbol = entry.symbol.clone();
					self.select_symbol(symbol);
				}
			}
			KeyCode::Up if self.dropdown_visible() => {
				self.move_selection_up();
			}
			KeyCode::Down if self.dropdown_visible() => {
				self.move_selection_down();
			}
			// Deleting the last character clears the search outright,
			// without issuing a request for the empty query.
			KeyCode::Backspace if self.search_input.len() <= 1 => {
				self.clear_search();
			}
			_ => {
				if self.search_input.input(key) {
					if self.search_input.is_empty() {
						self.results = None;
						self.api.cancel_search();
					} else {
						self.request_search();
					}
				}
			}
		}
		Ok(false)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left)
				if self.clear_hint_contains(mouse.column, mouse.row) =>
			{
				self.clear_search();
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(symbol) = self.select_result_at(mouse.column, mouse.row) {
					self.select_symbol(symbol);
				}
			}
			MouseEventKind::ScrollUp if self.dropdown_visible() => {
				self.move_selection_up();
			}
			MouseEventKind::ScrollDown if self.dropdown_visible() => {
				self.move_selection_down();
			}
			_ => {}
		}
	}

	fn clear_hint_contains(&self, column: u16, row: u16) -> bool {
		let Some(area) = self.clear_area else {
			return false;
		};
		point_in_rect(column, row, area)
	}
}
