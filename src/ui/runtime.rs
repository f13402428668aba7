//! Terminal setup and the event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
	PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::{execute, terminal};

use super::{App, AppConfig, SelectionOutcome};

/// Mount a widget for `config` and run it until the user exits.
pub fn run(config: AppConfig) -> Result<SelectionOutcome> {
	let mut app = App::new(config)?;
	app.run()
}

/// Undoes terminal setup when dropped, including on early return or panic.
struct TerminalGuard {
	keyboard_flags: bool,
}

impl TerminalGuard {
	fn enter() -> Self {
		Self {
			keyboard_flags: false,
		}
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		if self.keyboard_flags {
			let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
		}
		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
	}
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user submits or cancels.
	pub fn run(&mut self) -> Result<SelectionOutcome> {
		let mut terminal = ratatui::init();
		let mut guard = TerminalGuard::enter();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		// Escape closes on release, which only enhanced keyboards report.
		let release_events = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
		if release_events {
			execute!(
				stdout(),
				PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
			)?;
			guard.keyboard_flags = true;
		}
		self.set_release_events(release_events);
		tracing::debug!(release_events, "terminal initialised");

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

		let mut pending_events = VecDeque::new();

		let result: Result<SelectionOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) => {
						if let Some(outcome) = self.handle_key(key) {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		drop(guard);

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
