use msel_core::{MultiSelectConfig, OptionItem};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AppConfig, Theme};

pub(super) fn departments() -> Vec<OptionItem> {
	crate::sources::demo_catalog()
}

pub(super) fn small_catalog() -> Vec<OptionItem> {
	vec![
		OptionItem::new("Facilities", "facilities"),
		OptionItem::new("Finance", "finance"),
		OptionItem::new("IT", "it"),
	]
}

pub(super) fn app_with(widget: MultiSelectConfig) -> App<'static> {
	App::new(AppConfig {
		widget,
		theme: Theme::default(),
		title: None,
	})
	.expect("catalog is valid")
}

pub(super) fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
	Terminal::new(TestBackend::new(width, height)).expect("terminal")
}

/// Draw one frame and return the buffer as text.
pub(super) fn draw(app: &mut App<'_>, terminal: &mut Terminal<TestBackend>) -> String {
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

pub(super) fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

pub(super) fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

pub(super) fn release(code: KeyCode) -> KeyEvent {
	KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

pub(super) fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(press(KeyCode::Char(ch))).is_none());
	}
}

pub(super) fn click(app: &mut App<'_>, column: u16, row: u16) {
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

/// Reported values, in order.
pub(super) fn reported_values(app: &App<'_>) -> Vec<String> {
	app.reported()
		.into_iter()
		.map(|opt| opt.value)
		.collect()
}
