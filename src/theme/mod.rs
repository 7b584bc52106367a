//! Color schemes applied to the terminal UI.
//!
//! A [`Theme`] bundles the styles used by the prompt, the result dropdown and
//! the quote panel. The up/down accents color the quote display by the sign
//! of the day change and can be overridden from configuration.

use ratatui::style::{Color, Modifier, Style};

mod builtins;

pub use builtins::{DEFAULT, LIGHT, SLATE};

/// A theme containing styles for the UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for borders and header elements.
	pub header: Style,
	/// Style for the highlighted result row.
	pub row_highlight: Style,
	/// Style for the prompt symbol and input text.
	pub prompt: Style,
	/// Style for placeholders and empty states.
	pub empty: Style,
	/// Accent applied when the day change is non-negative.
	pub up: Style,
	/// Accent applied when the day change is negative.
	pub down: Style,
}

impl Default for Theme {
	fn default() -> Self {
		DEFAULT
	}
}

impl Theme {
	/// Accent style selected by the sign of a day change.
	///
	/// Zero counts as non-negative and takes the up accent.
	#[must_use]
	pub fn change_style(&self, day_change: f64) -> Style {
		if day_change >= 0.0 { self.up } else { self.down }
	}

	/// Replace the up accent color, keeping the modifier set.
	#[must_use]
	pub fn with_up_color(mut self, color: Color) -> Self {
		self.up = self.up.fg(color);
		self
	}

	/// Replace the down accent color, keeping the modifier set.
	#[must_use]
	pub fn with_down_color(mut self, color: Color) -> Self {
		self.down = self.down.fg(color);
		self
	}
}

/// Return the default theme.
#[must_use]
pub fn default_theme() -> Theme {
	Theme::default()
}

/// Look up a builtin theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name.to_ascii_lowercase().as_str() {
		"default" | "dark" => Some(DEFAULT),
		"slate" => Some(SLATE),
		"light" => Some(LIGHT),
		_ => None,
	}
}

/// Names of the builtin themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	vec!["default", "slate", "light"]
}

/// Shared bold modifier for accents so overrides stay visually consistent.
pub(crate) const ACCENT_MODIFIER: Modifier = Modifier::BOLD;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_day_change_uses_up_accent() {
		let theme = Theme::default();
		assert_eq!(theme.change_style(0.0), theme.up);
		assert_eq!(theme.change_style(-1.2), theme.down);
	}

	#[test]
	fn every_listed_name_resolves() {
		for name in names() {
			assert!(by_name(name).is_some(), "missing builtin theme: {name}");
		}
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn color_overrides_replace_only_the_accent() {
		let theme = Theme::default()
			.with_up_color(Color::Magenta)
			.with_down_color(Color::Blue);
		assert_eq!(theme.up.fg, Some(Color::Magenta));
		assert_eq!(theme.down.fg, Some(Color::Blue));
		assert_eq!(theme.header, Theme::default().header);
	}
}
