//! Single-line text input state for the search prompt.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Owned text of the search prompt.
///
/// Only plain character insertion and backspace are handled; everything else
/// is left to the caller's key dispatch.
#[derive(Debug, Default, Clone)]
pub struct SearchInput {
	text: String,
}

impl SearchInput {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			text: initial.into(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Number of characters currently typed.
	pub fn len(&self) -> usize {
		self.text.chars().count()
	}

	pub fn clear(&mut self) {
		self.text.clear();
	}

	/// Apply a key event to the buffer. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.text.push(ch);
				true
			}
			KeyCode::Backspace => self.text.pop().is_some(),
			_ => false,
		}
	}
}
