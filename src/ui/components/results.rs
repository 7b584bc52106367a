//! Dropdown table of candidate symbols.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::api::SymbolMatch;
use crate::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const SYMBOL_COLUMN_WIDTH: u16 = 10;

/// Render the dropdown.
///
/// An empty `matches` slice still draws the bordered frame; the caller hides
/// the dropdown entirely when no search has produced results. `rows_area`
/// receives the inner area whose first row corresponds to the table's scroll
/// offset, for mouse hit-testing.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	matches: &[SymbolMatch],
	table_state: &mut TableState,
	theme: &Theme,
	rows_area: &mut Option<Rect>,
) {
	let border_style =
		Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset));
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	*rows_area = Some(inner);

	if matches.is_empty() {
		return;
	}

	let rows = matches
		.iter()
		.map(|entry| {
			Row::new([
				Cell::from(entry.symbol.clone()),
				Cell::from(entry.name.clone()),
			])
		})
		.collect::<Vec<_>>();

	let widths = [
		Constraint::Length(SYMBOL_COLUMN_WIDTH),
		Constraint::Fill(1),
	];
	let table = Table::new(rows, widths)
		.column_spacing(1)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);
}
