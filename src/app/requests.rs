//! Request coordination between the UI thread and the background worker.
//!
//! Every search and quote request carries a generation id. The shared
//! atomics let the worker drop superseded work; the checks here drop any
//! response that slipped through after a newer request or a cancellation.

use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::mpsc::TryRecvError;

use crate::api::QuoteSource;
use crate::api::worker::{ApiCommand, ApiEvent, WorkerLink, spawn};

use super::App;

pub(crate) struct ApiRuntime {
	link: WorkerLink,
	next_search_id: u64,
	current_search_id: Option<u64>,
	search_in_flight: bool,
	next_quote_id: u64,
	current_quote_id: Option<u64>,
	quote_in_flight: bool,
}

impl ApiRuntime {
	pub(crate) fn spawn(source: impl QuoteSource) -> Self {
		Self {
			link: spawn(source),
			next_search_id: 0,
			current_search_id: None,
			search_in_flight: false,
			next_quote_id: 0,
			current_quote_id: None,
			quote_in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.link.tx.send(ApiCommand::Shutdown);
	}

	pub(crate) fn issue_search(&mut self, term: String) {
		self.next_search_id = self.next_search_id.saturating_add(1);
		let id = self.next_search_id;
		self.current_search_id = Some(id);
		self.search_in_flight = true;
		self.link
			.latest_search_id
			.store(id, AtomicOrdering::Release);
		let _ = self.link.tx.send(ApiCommand::Search { id, term });
	}

	/// Withdraw interest in any in-flight search without issuing a new one.
	pub(crate) fn cancel_search(&mut self) {
		self.next_search_id = self.next_search_id.saturating_add(1);
		self.link
			.latest_search_id
			.store(self.next_search_id, AtomicOrdering::Release);
		self.current_search_id = None;
		self.search_in_flight = false;
	}

	pub(crate) fn issue_quote(&mut self, symbol: String) {
		self.next_quote_id = self.next_quote_id.saturating_add(1);
		let id = self.next_quote_id;
		self.current_quote_id = Some(id);
		self.quote_in_flight = true;
		self.link.latest_quote_id.store(id, AtomicOrdering::Release);
		let _ = self.link.tx.send(ApiCommand::Quote { id, symbol });
	}

	pub(crate) fn matches_latest_search(&self, id: u64) -> bool {
		Some(id) == self.current_search_id
	}

	pub(crate) fn matches_latest_quote(&self, id: u64) -> bool {
		Some(id) == self.current_quote_id
	}

	pub(crate) fn record_search_completion(&mut self) {
		self.search_in_flight = false;
	}

	pub(crate) fn record_quote_completion(&mut self) {
		self.quote_in_flight = false;
	}

	pub(crate) fn is_search_in_flight(&self) -> bool {
		self.search_in_flight
	}

	pub(crate) fn is_quote_in_flight(&self) -> bool {
		self.quote_in_flight
	}

	pub(crate) fn try_recv(&self) -> Result<ApiEvent, TryRecvError> {
		self.link.rx.try_recv()
	}

	#[cfg(test)]
	pub(crate) fn current_search_id(&self) -> Option<u64> {
		self.current_search_id
	}

	#[cfg(test)]
	pub(crate) fn current_quote_id(&self) -> Option<u64> {
		self.current_quote_id
	}
}

impl App {
	/// Issue a search for the current query text, superseding any pending one.
	pub(crate) fn request_search(&mut self) {
		let term = self.search_input.text().to_string();
		self.api.issue_search(term);
	}

	/// Drain any worker events waiting on the receiver channel.
	pub(crate) fn pump_api_events(&mut self) {
		loop {
			match self.api.try_recv() {
				Ok(event) => self.handle_api_event(event),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a worker event if it corresponds to the most recent request.
	pub(crate) fn handle_api_event(&mut self, event: ApiEvent) {
		match event {
			ApiEvent::SearchLoaded { id, matches } => {
				if self.api.matches_latest_search(id) {
					self.api.record_search_completion();
					self.apply_search_results(matches);
				}
			}
			ApiEvent::SearchFailed { id } => {
				if self.api.matches_latest_search(id) {
					self.api.record_search_completion();
					self.results = None;
				}
			}
			ApiEvent::QuoteLoaded { id, quote } => {
				if self.api.matches_latest_quote(id) {
					self.api.record_quote_completion();
					self.quote = Some(quote);
					self.quote_loading = false;
				}
			}
			ApiEvent::QuoteFailed { id } => {
				// The panel keeps its loading appearance; the failure is
				// already logged by the worker.
				if self.api.matches_latest_quote(id) {
					self.api.record_quote_completion();
				}
			}
		}
	}
}
