use msel_core::{Key, Position};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::hit::to_area;
use super::{App, SelectionOutcome};

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectionOutcome> {
		if key.kind == KeyEventKind::Release {
			if key.code == KeyCode::Esc {
				self.interact(|widget| widget.key_up(Key::Escape));
			}
			return None;
		}

		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome(false));
		}

		let (open, focused) = {
			let widget = self.widget.borrow();
			(widget.is_open(), widget.search_focused())
		};

		if !open {
			match key.code {
				KeyCode::Enter => return Some(self.outcome(true)),
				KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome(false)),
				KeyCode::Down | KeyCode::Char(' ') => self.interact(|widget| widget.toggle_open()),
				_ => {}
			}
			return None;
		}
		if !focused {
			return None;
		}

		match key.code {
			KeyCode::Up => {
				self.interact(|widget| widget.key_down(Key::Up));
			}
			KeyCode::Down => {
				self.interact(|widget| widget.key_down(Key::Down));
			}
			KeyCode::Enter => {
				self.interact(|widget| widget.key_down(Key::Enter));
			}
			KeyCode::Esc => {
				self.interact(|widget| widget.key_down(Key::Escape));
				if !self.release_events {
					self.interact(|widget| widget.key_up(Key::Escape));
				}
			}
			_ => {
				if self.input.input(key) {
					let query = self.input.text().to_string();
					self.widget.borrow_mut().set_query(&query);
				}
			}
		}
		None
	}

	/// Route a pointer event through the document bus and the hit map.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let position = Position::new(mouse.column, mouse.row);
		let over_panel = self
			.hits
			.panel
			.is_some_and(|panel| to_area(panel).contains(position));

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let was_open = self.widget.borrow().is_open();
				self.bus.dispatch(position);
				let path = self.hits.path_at(position);
				if !path.is_empty() {
					self.widget.borrow_mut().click(&path);
				}
				self.sync_open_state(was_open);
			}
			MouseEventKind::ScrollUp if over_panel => {
				self.interact(|widget| widget.key_down(Key::Up));
			}
			MouseEventKind::ScrollDown if over_panel => {
				self.interact(|widget| widget.key_down(Key::Down));
			}
			_ => {}
		}
	}
}
