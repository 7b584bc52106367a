//! Quote panel for the most recently selected symbol.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::Quote;
use crate::theme::Theme;

/// Render the quote panel. The border takes the up or down accent depending
/// on the sign of the day change, zero counting as up.
pub fn render_quote(frame: &mut Frame, area: Rect, quote: &Quote, theme: &Theme) {
	let accent = theme.change_style(quote.day_change);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(accent)
		.title(format!(" {} ({}) ", quote.name, quote.symbol));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let currency = quote.currency.as_deref().unwrap_or("");
	let mut lines = vec![
		Line::from(vec![
			Span::styled("price       ", theme.empty),
			Span::styled(format!("{:.2} {currency}", quote.price), theme.prompt),
		]),
		Line::from(vec![
			Span::styled("day change  ", theme.empty),
			Span::styled(format_change(quote), accent),
		]),
	];

	if let Some(close) = quote.close_yesterday {
		lines.push(detail_line("prev close  ", format!("{close:.2}"), theme));
	}
	if let (Some(low), Some(high)) = (quote.day_low, quote.day_high) {
		lines.push(detail_line("day range   ", format!("{low:.2} to {high:.2}"), theme));
	}
	if let Some(volume) = quote.volume {
		lines.push(detail_line("volume      ", format!("{volume:.0}"), theme));
	}
	if let Some(exchange) = &quote.stock_exchange_long {
		lines.push(detail_line("exchange    ", exchange.clone(), theme));
	}
	if let Some(traded) = &quote.last_trade_time {
		lines.push(detail_line("last trade  ", traded.clone(), theme));
	}

	frame.render_widget(Paragraph::new(lines), inner);
}

fn detail_line(label: &'static str, value: String, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(label, theme.empty),
		Span::raw(value),
	])
}

fn format_change(quote: &Quote) -> String {
	let mut text = format!("{:+.2}", quote.day_change);
	if let Some(pct) = quote.change_pct {
		text.push_str(&format!(" ({pct:+.2}%)"));
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn change_formats_with_explicit_sign() {
		let quote: Quote = serde_json::from_str(
			r#"{"symbol":"AAP","name":"Advance Auto Parts","price":"64.0","day_change":"1.2","change_pct":"1.91"}"#,
		)
		.unwrap();
		assert_eq!(format_change(&quote), "+1.20 (+1.91%)");
	}
}
