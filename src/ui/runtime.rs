//! Terminal session and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use ratatui::{DefaultTerminal, Terminal, backend::Backend};

use super::App;
use super::outcome::ExplorerOutcome;
use crate::data::CountrySource;

/// Build an [`App`] that loads from `source` and run it to completion.
pub fn run<S: CountrySource>(source: S) -> Result<ExplorerOutcome> {
	let mut app = App::new();
	app.start_loading(source);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	///
	/// The terminal is restored on every exit path, including errors raised
	/// while drawing or reading input.
	pub fn run(&mut self) -> Result<ExplorerOutcome> {
		let mut terminal = ratatui::init();
		let result = self.run_session(&mut terminal);

		let released = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();

		let outcome = result?;
		released?;
		tracing::info!(
			accepted = outcome.accepted,
			query = %outcome.query,
			"explorer closed"
		);
		Ok(outcome)
	}

	fn run_session(&mut self, terminal: &mut DefaultTerminal) -> Result<ExplorerOutcome> {
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(terminal, &event_rx);

		event_loop_running.store(false, Ordering::Relaxed);
		drop(event_rx);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}
		result
	}

	/// Handle queued input, then redraw, roughly every 16 ms.
	pub(crate) fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &Receiver<Event>,
	) -> Result<ExplorerOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			let mut input_closed = false;
			loop {
				match events.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(TryRecvError::Empty) => break,
					Err(TryRecvError::Disconnected) => {
						input_closed = true;
						break;
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							return Ok(outcome);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if input_closed {
				return Err(anyhow!("input event channel disconnected"));
			}

			self.pump_load_updates();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}
