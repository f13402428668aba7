use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::theme::Theme;

/// Single-line search input backed by `tui-textarea`.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	theme: Theme,
}

impl<'a> QueryInput<'a> {
	pub fn new(placeholder: impl Into<String>, theme: Theme) -> Self {
		let placeholder = placeholder.into();
		Self {
			textarea: build_textarea(&placeholder, theme),
			placeholder,
			theme,
		}
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would start a second line are refused.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn clear(&mut self) {
		self.textarea = build_textarea(&self.placeholder, self.theme);
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
		let cursor = if focused {
			Style::new().add_modifier(Modifier::REVERSED)
		} else {
			Style::new()
		};
		self.textarea.set_cursor_style(cursor);
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea<'a>(placeholder: &str, theme: Theme) -> TextArea<'a> {
	let mut textarea = TextArea::default();
	textarea.set_placeholder_text(placeholder);
	textarea.set_placeholder_style(theme.search_placeholder);
	textarea.set_style(theme.search);
	textarea.set_cursor_line_style(Style::new());
	textarea
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
