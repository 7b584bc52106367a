//! Wire types for the quote service.
//!
//! The upstream API serializes most numeric fields as JSON strings, so the
//! numeric fields here accept either representation.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One candidate row returned by the symbol search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
	pub symbol: String,
	pub name: String,
}

impl SymbolMatch {
	pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			symbol: symbol.into(),
			name: name.into(),
		}
	}
}

/// Envelope of the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
	pub(crate) data: Vec<SymbolMatch>,
}

/// A full quote record for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
	pub symbol: String,
	pub name: String,
	#[serde(default)]
	pub currency: Option<String>,
	#[serde(deserialize_with = "number")]
	pub price: f64,
	#[serde(deserialize_with = "number")]
	pub day_change: f64,
	#[serde(default, deserialize_with = "optional_number")]
	pub change_pct: Option<f64>,
	#[serde(default, deserialize_with = "optional_number")]
	pub close_yesterday: Option<f64>,
	#[serde(default, deserialize_with = "optional_number")]
	pub day_high: Option<f64>,
	#[serde(default, deserialize_with = "optional_number")]
	pub day_low: Option<f64>,
	#[serde(default, deserialize_with = "optional_number")]
	pub volume: Option<f64>,
	#[serde(default)]
	pub stock_exchange_long: Option<String>,
	#[serde(default)]
	pub last_trade_time: Option<String>,
}

/// Envelope of the quote endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteResponse {
	pub(crate) data: Vec<Quote>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
	Number(f64),
	Text(String),
}

impl RawNumber {
	fn into_f64<E: de::Error>(self) -> Result<f64, E> {
		match self {
			RawNumber::Number(value) => Ok(value),
			RawNumber::Text(text) => text
				.trim()
				.parse()
				.map_err(|_| E::custom(format!("invalid numeric field: {text:?}"))),
		}
	}
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
	RawNumber::deserialize(deserializer)?.into_f64()
}

fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
	match Option::<RawNumber>::deserialize(deserializer)? {
		Some(raw) => raw.into_f64().map(Some),
		None => Ok(None),
	}
}
