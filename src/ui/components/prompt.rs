//! Search prompt row: input text, clear hint, busy throbber.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::input::SearchInput;

pub(crate) const PROMPT_SYMBOL: &str = "❯ ";
pub(crate) const CLEAR_HINT: &str = "✕ clear";
const CURSOR_BLOCK: &str = "█";
const THROBBER_WIDTH: u16 = 2;

pub struct PromptContext<'a> {
	pub input: &'a SearchInput,
	pub placeholder: &'a str,
	pub busy: bool,
	pub theme: &'a Theme,
}

/// Render the prompt row.
///
/// `clear_area` receives the cells occupied by the clear hint so the caller
/// can hit-test mouse presses against it; it is reset to `None` whenever the
/// hint is not shown.
pub fn render_prompt(
	frame: &mut Frame,
	area: Rect,
	ctx: PromptContext<'_>,
	throbber_state: &ThrobberState,
	clear_area: &mut Option<Rect>,
) {
	*clear_area = None;

	let hint_width = if ctx.input.is_empty() {
		0
	} else {
		CLEAR_HINT.width() as u16 + 1
	};
	let [input_rect, hint_rect, throbber_rect] = Layout::horizontal([
		Constraint::Min(1),
		Constraint::Length(hint_width),
		Constraint::Length(THROBBER_WIDTH),
	])
	.areas(area);

	let line = if ctx.input.is_empty() {
		Line::from(vec![
			Span::styled(PROMPT_SYMBOL, ctx.theme.prompt),
			Span::styled(ctx.placeholder.to_string(), ctx.theme.empty),
		])
	} else {
		Line::from(vec![
			Span::styled(PROMPT_SYMBOL, ctx.theme.prompt),
			Span::styled(ctx.input.text().to_string(), ctx.theme.prompt),
			Span::styled(CURSOR_BLOCK, ctx.theme.prompt),
		])
	};
	frame.render_widget(Paragraph::new(line), input_rect);

	if hint_width > 0 {
		let hint = Paragraph::new(Span::styled(CLEAR_HINT, ctx.theme.empty));
		frame.render_widget(hint, hint_rect);
		*clear_area = Some(hint_rect);
	}

	if ctx.busy {
		let spinner = Throbber::default()
			.style(ctx.theme.prompt)
			.throbber_style(ctx.theme.prompt);
		let line = Line::from(spinner.to_symbol_span(throbber_state));
		frame.render_widget(Paragraph::new(line), throbber_rect);
	}
}
