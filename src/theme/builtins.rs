use ratatui::style::{Color, Style};

use super::{ACCENT_MODIFIER, Theme};

pub const DEFAULT: Theme = Theme {
	header: Style::new().fg(Color::Gray),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	up: Style::new().fg(Color::Green).add_modifier(ACCENT_MODIFIER),
	down: Style::new().fg(Color::Red).add_modifier(ACCENT_MODIFIER),
};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	up: Style::new()
		.fg(Color::Rgb(74, 222, 128))
		.add_modifier(ACCENT_MODIFIER),
	down: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(ACCENT_MODIFIER),
};

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Rgb(51, 65, 85)),
	row_highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(180, 83, 9)),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	up: Style::new()
		.fg(Color::Rgb(22, 101, 52))
		.add_modifier(ACCENT_MODIFIER),
	down: Style::new()
		.fg(Color::Rgb(153, 27, 27))
		.add_modifier(ACCENT_MODIFIER),
};
