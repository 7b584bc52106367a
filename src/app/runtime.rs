use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{
	self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
	KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::api::Quote;

use super::App;

impl App {
	/// Pump the terminal event loop until the user exits.
	///
	/// Returns the quote on display when the session ended, if any.
	pub fn run(&mut self) -> Result<Option<Quote>> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

		let result = loop {
			self.pump_api_events();
			self.throbber_state.calc_next();
			terminal.draw(|frame| self.draw(frame))?;

			if event::poll(Duration::from_millis(50))? {
				match event::read()? {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key)? {
							break Ok(self.quote.clone());
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					// The input losing terminal focus dismisses the search,
					// mirroring a blurred input field.
					Event::FocusLost => self.clear_search(),
					Event::Resize(_, _) => {}
					_ => {}
				}
			}
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture, DisableFocusChange)?;

		result
	}
}
