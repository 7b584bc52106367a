use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	widgets::Paragraph,
};

use crate::app::App;

use super::components::{PromptContext, render_prompt, render_quote, render_results};

/// Rows the quote panel needs including its borders.
const QUOTE_PANEL_HEIGHT: u16 = 9;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let prompt_ctx = PromptContext {
			input: &self.search_input,
			placeholder: self.placeholder,
			busy: self.is_busy(),
			theme: &self.theme,
		};
		render_prompt(
			frame,
			layout[0],
			prompt_ctx,
			&self.throbber_state,
			&mut self.clear_area,
		);

		let content = layout[1];
		self.results_area = None;

		// The dropdown overlays the quote panel while it is open, like the
		// floating result list it stands in for.
		if self.dropdown_visible() {
			let matches = self.results.as_deref().unwrap_or(&[]);
			let height = (matches.len() as u16).saturating_add(2).min(content.height);
			let dropdown = Rect { height, ..content };
			render_results(
				frame,
				dropdown,
				matches,
				&mut self.table_state,
				&self.theme,
				&mut self.results_area,
			);
			return;
		}

		if !self.quote_loading
			&& let Some(quote) = &self.quote
		{
			let panel = Rect {
				height: content.height.min(QUOTE_PANEL_HEIGHT),
				..content
			};
			render_quote(frame, panel, quote, &self.theme);
			return;
		}

		let hint = if self.api.is_quote_in_flight() {
			"Fetching quote"
		} else {
			"Type to search for a symbol"
		};
		let empty = Paragraph::new(hint)
			.style(self.theme.empty)
			.alignment(Alignment::Center);
		frame.render_widget(empty, content);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{
		KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
	};
	use ratatui::{Terminal, backend::TestBackend};
	use reqwest::StatusCode;

	use crate::api::worker::ApiEvent;
	use crate::api::{ApiError, Quote, QuoteSource, SymbolMatch};
	use crate::app::App;
	use crate::theme::Theme;

	/// Worker stub that never produces competing responses.
	struct FailingSource;

	impl QuoteSource for FailingSource {
		fn search(&self, _term: &str) -> Result<Vec<SymbolMatch>, ApiError> {
			Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
		}

		fn quote(&self, _symbol: &str) -> Result<Quote, ApiError> {
			Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
		}
	}

	fn type_text(app: &mut App, text: &str) {
		for ch in text.chars() {
			app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
				.unwrap();
		}
	}

	fn inject_results(app: &mut App, matches: Vec<SymbolMatch>) {
		let id = app.api.current_search_id().expect("search issued");
		app.handle_api_event(ApiEvent::SearchLoaded { id, matches });
	}

	fn sample_matches() -> Vec<SymbolMatch> {
		vec![
			SymbolMatch::new("AAPL", "Apple Inc."),
			SymbolMatch::new("AAP", "Advance Auto Parts"),
		]
	}

	fn draw_to_string(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn idle_screen_shows_placeholder_and_hint() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		let view = draw_to_string(&mut app);
		assert!(view.contains("Search by symbol or name"));
		assert!(view.contains("Type to search for a symbol"));
		assert!(!view.contains("✕ clear"));
	}

	#[test]
	fn dropdown_lists_results_with_the_cursor_row_marked() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		type_text(&mut app, "aap");
		inject_results(&mut app, sample_matches());

		let view = draw_to_string(&mut app);
		assert!(view.contains("AAPL"));
		assert!(view.contains("Advance Auto Parts"));
		assert!(view.contains("▶"));
		assert!(view.contains("✕ clear"));
	}

	#[test]
	fn empty_result_list_still_draws_the_frame() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		type_text(&mut app, "zzz");
		inject_results(&mut app, Vec::new());

		assert!(app.dropdown_visible());
		let view = draw_to_string(&mut app);
		assert!(view.contains("╭"), "expected the dropdown border to render");
	}

	#[test]
	fn quote_panel_renders_once_the_fetch_resolves() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		type_text(&mut app, "aap");
		inject_results(&mut app, sample_matches());
		app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
			.unwrap();

		let quote: Quote = serde_json::from_str(
			r#"{"symbol":"AAPL","name":"Apple Inc.","currency":"USD","price":"203.53","day_change":"-1.02"}"#,
		)
		.unwrap();
		let id = app.api.current_quote_id().expect("quote fetch issued");
		app.handle_api_event(ApiEvent::QuoteLoaded { id, quote });

		let view = draw_to_string(&mut app);
		assert!(view.contains("Apple Inc. (AAPL)"));
		assert!(view.contains("price"));
		assert!(view.contains("-1.02"));
	}

	#[test]
	fn mouse_press_on_a_row_selects_that_symbol() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		type_text(&mut app, "aap");
		inject_results(&mut app, sample_matches());
		// A draw pass records the dropdown's inner area for hit-testing.
		draw_to_string(&mut app);

		let inner = app.results_area.expect("dropdown area recorded");
		app.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: inner.x,
			row: inner.y + 1,
			modifiers: KeyModifiers::NONE,
		});

		assert!(app.search_input.is_empty(), "selection dismisses the search");
		assert!(app.api.current_quote_id().is_some());
		assert!(app.quote_loading);
	}

	#[test]
	fn mouse_press_on_the_clear_hint_resets_the_search() {
		let mut app = App::new(FailingSource, Theme::default(), "");
		type_text(&mut app, "aap");
		inject_results(&mut app, sample_matches());
		draw_to_string(&mut app);

		let hint = app.clear_area.expect("clear hint recorded");
		app.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: hint.x,
			row: hint.y,
			modifiers: KeyModifiers::NONE,
		});

		assert!(app.search_input.is_empty());
		assert!(app.results.is_none());
		assert!(app.api.current_quote_id().is_none(), "clearing issues no fetch");
	}
}
