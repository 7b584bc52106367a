//! Core state container for the interactive quote finder.
//!
//! The [`App`] owns the query text, the current search results, the cursor
//! into them, and the most recently fetched quote, and coordinates the
//! background request worker.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::requests::ApiRuntime;
use crate::api::{Quote, QuoteSource, SymbolMatch};
use crate::theme::Theme;
use crate::ui::SearchInput;
use crate::ui::components::point_in_rect;

const PLACEHOLDER: &str = "Search by symbol or name";

impl Drop for App {
	fn drop(&mut self) {
		self.api.shutdown();
	}
}

pub struct App {
	pub search_input: SearchInput,
	/// `None` until a search succeeds; reset to `None` when the query is
	/// cleared or a search fails.
	pub results: Option<Vec<SymbolMatch>>,
	pub table_state: TableState,
	pub quote: Option<Quote>,
	/// True from startup and during a quote fetch; cleared only by a
	/// successful fetch, so a failed one keeps the panel hidden.
	pub quote_loading: bool,
	pub theme: Theme,
	pub(crate) placeholder: &'static str,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) api: ApiRuntime,
	pub(crate) clear_area: Option<Rect>,
	pub(crate) results_area: Option<Rect>,
}

impl App {
	pub fn new(source: impl QuoteSource, theme: Theme, initial_query: impl Into<String>) -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));

		let mut app = Self {
			search_input: SearchInput::new(initial_query),
			results: None,
			table_state,
			quote: None,
			quote_loading: true,
			theme,
			placeholder: PLACEHOLDER,
			throbber_state: ThrobberState::default(),
			api: ApiRuntime::spawn(source),
			clear_area: None,
			results_area: None,
		};
		app.hydrate_initial_results();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// The dropdown is visible iff the query is non-empty and a search has
	/// produced a result list, even an empty one.
	pub fn dropdown_visible(&self) -> bool {
		!self.search_input.is_empty() && self.results.is_some()
	}

	/// Number of rows currently in the dropdown.
	pub(crate) fn filtered_len(&self) -> usize {
		self.results.as_ref().map_or(0, Vec::len)
	}

	/// Clear the query and result list, reset the cursor, and withdraw
	/// interest in any search still in flight.
	pub fn clear_search(&mut self) {
		self.search_input.clear();
		self.results = None;
		self.table_state.select(Some(0));
		self.api.cancel_search();
	}

	/// Replace the result list with a fresh response and reset the cursor.
	pub(crate) fn apply_search_results(&mut self, matches: Vec<SymbolMatch>) {
		self.results = Some(matches);
		self.table_state.select(Some(0));
		*self.table_state.offset_mut() = 0;
	}

	/// The match under the cursor, when the dropdown has rows.
	pub(crate) fn current_selection(&self) -> Option<&SymbolMatch> {
		let selected = self.table_state.selected()?;
		self.results.as_ref()?.get(selected)
	}

	/// Commit to a symbol: dismiss the dropdown and start the quote fetch.
	pub(crate) fn select_symbol(&mut self, symbol: String) {
		self.quote_loading = true;
		self.api.issue_quote(symbol);
		self.clear_search();
	}

	/// Resolve a mouse press inside the dropdown to the symbol on that row.
	pub(crate) fn select_result_at(&mut self, column: u16, row: u16) -> Option<String> {
		if !self.dropdown_visible() {
			return None;
		}
		let area = self.results_area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let index = self.table_state.offset() + usize::from(row - area.y);
		let entry = self.results.as_ref()?.get(index)?;
		let symbol = entry.symbol.clone();
		self.table_state.select(Some(index));
		Some(symbol)
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.filtered_len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}

	/// Whether a request is in flight, for the prompt throbber.
	pub(crate) fn is_busy(&self) -> bool {
		self.api.is_search_in_flight() || self.api.is_quote_in_flight()
	}

	fn hydrate_initial_results(&mut self) {
		if !self.search_input.is_empty() {
			self.request_search();
		}
	}
}
