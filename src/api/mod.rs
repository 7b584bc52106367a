//! Client for the remote quote service.
//!
//! The service exposes two GET endpoints: a symbol/name search and a quote
//! lookup. [`QuoteSource`] abstracts over the transport so the interaction
//! logic can be exercised against an in-memory implementation in tests.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

pub mod models;
pub(crate) mod worker;

pub use models::{Quote, SymbolMatch};
use models::{QuoteResponse, SearchResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures produced while talking to the quote service.
///
/// None of these are surfaced in the UI; the request worker logs them and
/// the interaction state is left untouched.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("request returned http status {0}")]
	Status(StatusCode),
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("no quote returned for {0}")]
	EmptyQuote(String),
}

/// Capability to search symbols and fetch quotes.
pub trait QuoteSource: Send + 'static {
	/// Search for symbols matching `term` by symbol or company name.
	fn search(&self, term: &str) -> Result<Vec<SymbolMatch>, ApiError>;

	/// Fetch the current quote for one symbol.
	fn quote(&self, symbol: &str) -> Result<Quote, ApiError>;
}

/// HTTP client for the world trading data style API.
#[derive(Debug)]
pub struct WorldTradingData {
	client: Client,
	base_url: String,
	api_token: String,
}

impl WorldTradingData {
	/// Build a client against `base_url` authenticating with `api_token`.
	pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self, ApiError> {
		let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
		Ok(Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			api_token: api_token.into(),
		})
	}

	fn request(&self, path: &str, params: &[(&str, &str)]) -> Result<String, ApiError> {
		let response = self
			.client
			.get(format!("{}/{path}", self.base_url))
			.query(params)
			.query(&[("api_token", self.api_token.as_str())])
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status(status));
		}

		Ok(response.text()?)
	}
}

impl QuoteSource for WorldTradingData {
	fn search(&self, term: &str) -> Result<Vec<SymbolMatch>, ApiError> {
		let body = self.request(
			"stock_search",
			&[
				("search_term", term),
				("search_by", "symbol,name"),
				("limit", "50"),
				("page", "1"),
			],
		)?;
		let response: SearchResponse = serde_json::from_str(&body)?;
		Ok(response.data)
	}

	fn quote(&self, symbol: &str) -> Result<Quote, ApiError> {
		let body = self.request("stock", &[("symbol", symbol)])?;
		let response: QuoteResponse = serde_json::from_str(&body)?;
		response
			.data
			.into_iter()
			.next()
			.ok_or_else(|| ApiError::EmptyQuote(symbol.to_string()))
	}
}
