use anyhow::Result;
use tickq::Quote;

/// Print a plain-text representation of the final quote.
pub(crate) fn print_plain(quote: &Quote) {
	println!("{} ({})", quote.name, quote.symbol);
	match &quote.currency {
		Some(currency) => println!("price       {:.2} {currency}", quote.price),
		None => println!("price       {:.2}", quote.price),
	}
	match quote.change_pct {
		Some(pct) => println!("day change  {:+.2} ({pct:+.2}%)", quote.day_change),
		None => println!("day change  {:+.2}", quote.day_change),
	}
	if let Some(close) = quote.close_yesterday {
		println!("prev close  {close:.2}");
	}
	if let Some(exchange) = &quote.stock_exchange_long {
		println!("exchange    {exchange}");
	}
}

/// Print the JSON representation of the final quote.
pub(crate) fn print_json(quote: &Quote) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(quote)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_output_round_trips_the_quote() {
		let quote: Quote = serde_json::from_str(
			r#"{"symbol":"AAP","name":"Advance Auto Parts","price":"64.37","day_change":"-1.2"}"#,
		)
		.expect("decodes");

		let json = serde_json::to_string_pretty(&quote).expect("encodes");
		let value: Value = serde_json::from_str(&json).expect("parses");
		assert_eq!(value["symbol"], "AAP");
		assert_eq!(value["day_change"], -1.2);
	}
}
