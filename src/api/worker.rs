//! Background request worker.
//!
//! One thread owns the [`QuoteSource`] and serves commands from the UI
//! thread. Search requests carry a generation id: the worker skips a request
//! that was superseded while queued and drops a response that was superseded
//! while in flight, so at most one search response per generation ever
//! reaches the UI. Quote requests use the same scheme.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{Quote, QuoteSource, SymbolMatch};

#[derive(Debug)]
pub(crate) enum ApiCommand {
	Search { id: u64, term: String },
	Quote { id: u64, symbol: String },
	Shutdown,
}

#[derive(Debug)]
pub(crate) enum ApiEvent {
	SearchLoaded { id: u64, matches: Vec<SymbolMatch> },
	SearchFailed { id: u64 },
	QuoteLoaded { id: u64, quote: Quote },
	QuoteFailed { id: u64 },
}

/// Channels and shared generation counters connecting the UI to the worker.
pub(crate) struct WorkerLink {
	pub(crate) tx: Sender<ApiCommand>,
	pub(crate) rx: Receiver<ApiEvent>,
	pub(crate) latest_search_id: Arc<AtomicU64>,
	pub(crate) latest_quote_id: Arc<AtomicU64>,
}

/// Launch the background request worker thread.
pub(crate) fn spawn<S: QuoteSource>(source: S) -> WorkerLink {
	let (command_tx, command_rx) = mpsc::channel();
	let (event_tx, event_rx) = mpsc::channel();
	let latest_search_id = Arc::new(AtomicU64::new(0));
	let latest_quote_id = Arc::new(AtomicU64::new(0));

	let thread_search = Arc::clone(&latest_search_id);
	let thread_quote = Arc::clone(&latest_quote_id);
	thread::spawn(move || worker_loop(&source, command_rx, event_tx, thread_search, thread_quote));

	WorkerLink {
		tx: command_tx,
		rx: event_rx,
		latest_search_id,
		latest_quote_id,
	}
}

fn worker_loop<S: QuoteSource>(
	source: &S,
	command_rx: Receiver<ApiCommand>,
	event_tx: Sender<ApiEvent>,
	latest_search_id: Arc<AtomicU64>,
	latest_quote_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &event_tx, &latest_search_id, &latest_quote_id, command) {
			break;
		}
	}
}

fn handle_command<S: QuoteSource>(
	source: &S,
	event_tx: &Sender<ApiEvent>,
	latest_search_id: &AtomicU64,
	latest_quote_id: &AtomicU64,
	command: ApiCommand,
) -> bool {
	match command {
		ApiCommand::Search { id, term } => {
			if latest_search_id.load(AtomicOrdering::Acquire) != id {
				log::debug!("skipping superseded search #{id} for {term:?}");
				return true;
			}
			let event = match source.search(&term) {
				Ok(matches) => {
					if latest_search_id.load(AtomicOrdering::Acquire) != id {
						log::debug!("dropping stale search response #{id} for {term:?}");
						return true;
					}
					ApiEvent::SearchLoaded { id, matches }
				}
				Err(err) => {
					log::warn!("symbol search for {term:?} failed: {err}");
					ApiEvent::SearchFailed { id }
				}
			};
			event_tx.send(event).is_ok()
		}
		ApiCommand::Quote { id, symbol } => {
			if latest_quote_id.load(AtomicOrdering::Acquire) != id {
				log::debug!("skipping superseded quote request #{id} for {symbol}");
				return true;
			}
			let event = match source.quote(&symbol) {
				Ok(quote) => {
					if latest_quote_id.load(AtomicOrdering::Acquire) != id {
						log::debug!("dropping stale quote response #{id} for {symbol}");
						return true;
					}
					ApiEvent::QuoteLoaded { id, quote }
				}
				Err(err) => {
					log::warn!("quote fetch for {symbol} failed: {err}");
					ApiEvent::QuoteFailed { id }
				}
			};
			event_tx.send(event).is_ok()
		}
		ApiCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::mpsc::RecvTimeoutError;
	use std::time::Duration;

	use super::super::ApiError;
	use super::*;

	/// Source whose calls block until the test releases them, so request
	/// ordering in the worker is deterministic.
	struct GatedSource {
		gate: Mutex<Receiver<()>>,
	}

	impl GatedSource {
		fn new() -> (Self, Sender<()>) {
			let (release_tx, release_rx) = mpsc::channel();
			(
				Self {
					gate: Mutex::new(release_rx),
				},
				release_tx,
			)
		}

		fn wait(&self) {
			self.gate.lock().unwrap().recv().unwrap();
		}
	}

	impl QuoteSource for GatedSource {
		fn search(&self, term: &str) -> Result<Vec<SymbolMatch>, ApiError> {
			self.wait();
			Ok(vec![SymbolMatch::new(term.to_uppercase(), term)])
		}

		fn quote(&self, symbol: &str) -> Result<Quote, ApiError> {
			self.wait();
			Ok(sample_quote(symbol))
		}
	}

	fn sample_quote(symbol: &str) -> Quote {
		serde_json::from_str(&format!(
			r#"{{"symbol":"{symbol}","name":"{symbol}","price":"1.0","day_change":"0"}}"#
		))
		.unwrap()
	}

	#[test]
	fn superseded_search_is_never_reported() {
		let (source, release) = GatedSource::new();
		let link = spawn(source);

		link.latest_search_id.store(1, AtomicOrdering::Release);
		link.tx
			.send(ApiCommand::Search {
				id: 1,
				term: "goo".into(),
			})
			.unwrap();

		// Supersede before the worker finishes the first request.
		link.latest_search_id.store(2, AtomicOrdering::Release);
		link.tx
			.send(ApiCommand::Search {
				id: 2,
				term: "goog".into(),
			})
			.unwrap();

		release.send(()).unwrap();
		release.send(()).unwrap();

		let event = link.rx.recv_timeout(Duration::from_secs(1)).unwrap();
		match event {
			ApiEvent::SearchLoaded { id, matches } => {
				assert_eq!(id, 2);
				assert_eq!(matches[0].symbol, "GOOG");
			}
			other => panic!("unexpected event: {other:?}"),
		}
		assert!(matches!(
			link.rx.recv_timeout(Duration::from_millis(100)),
			Err(RecvTimeoutError::Timeout)
		));
	}

	#[test]
	fn shutdown_stops_the_worker() {
		let (source, _release) = GatedSource::new();
		let link = spawn(source);
		link.tx.send(ApiCommand::Shutdown).unwrap();

		// The command channel closes once the worker loop returns.
		let deadline = std::time::Instant::now() + Duration::from_secs(1);
		while std::time::Instant::now() < deadline {
			if link
				.tx
				.send(ApiCommand::Search {
					id: 0,
					term: String::new(),
				})
				.is_err()
			{
				return;
			}
			thread::sleep(Duration::from_millis(10));
		}
		panic!("worker did not shut down");
	}
}
