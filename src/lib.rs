//! Core crate exports for building and running the `tickq` terminal interface.
//!
//! The root module re-exports the types an embedder needs: the quote service
//! client and its [`QuoteSource`] seam, the stateful [`App`], and the theme
//! definitions.

pub mod api;
pub mod app;
pub mod app_dirs;
pub mod logging;
pub mod theme;
pub mod ui;

pub use api::{ApiError, Quote, QuoteSource, SymbolMatch, WorldTradingData};
pub use app::App;
pub use theme::{Theme, by_name as theme_by_name, default_theme};
pub use ui::SearchInput;
