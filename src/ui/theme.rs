//! Colour themes for the dropdown.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Border of the control and the panel.
	pub border: Style,
	/// Border while the panel is open.
	pub border_active: Style,
	/// Placeholder text in the empty control.
	pub placeholder: Style,
	/// Label of a selection chip.
	pub chip: Style,
	/// Remove icon of a selection chip.
	pub chip_remove: Style,
	/// Open/closed arrow.
	pub arrow: Style,
	/// Search input text.
	pub search: Style,
	/// Search input placeholder.
	pub search_placeholder: Style,
	/// Unhighlighted option row.
	pub row: Style,
	/// Row under the keyboard cursor.
	pub row_cursor: Style,
	/// Checkbox of a selected row.
	pub checked: Style,
	/// "No results" line.
	pub empty: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme plus the alternate names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeRegistration {
	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "default";

#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		border: Style::new().fg(Color::DarkGray),
		border_active: Style::new().fg(Color::Cyan),
		placeholder: Style::new().fg(Color::DarkGray),
		chip: Style::new().fg(Color::Black).bg(Color::Cyan),
		chip_remove: Style::new()
			.fg(Color::Red)
			.bg(Color::Cyan)
			.add_modifier(Modifier::BOLD),
		arrow: Style::new().fg(Color::Cyan),
		search: Style::new().fg(Color::White),
		search_placeholder: Style::new().fg(Color::DarkGray),
		row: Style::new().fg(Color::Gray),
		row_cursor: Style::new()
			.fg(Color::Black)
			.bg(Color::Cyan)
			.add_modifier(Modifier::BOLD),
		checked: Style::new().fg(Color::Green),
		empty: Style::new()
			.fg(Color::DarkGray)
			.add_modifier(Modifier::ITALIC),
	}
}

fn light_theme() -> Theme {
	Theme {
		border: Style::new().fg(Color::Gray),
		border_active: Style::new().fg(Color::Blue),
		placeholder: Style::new().fg(Color::Gray),
		chip: Style::new().fg(Color::White).bg(Color::Blue),
		chip_remove: Style::new()
			.fg(Color::LightRed)
			.bg(Color::Blue)
			.add_modifier(Modifier::BOLD),
		arrow: Style::new().fg(Color::Blue),
		search: Style::new().fg(Color::Black),
		search_placeholder: Style::new().fg(Color::Gray),
		row: Style::new().fg(Color::Black),
		row_cursor: Style::new().fg(Color::White).bg(Color::Blue),
		checked: Style::new().fg(Color::Blue),
		empty: Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC),
	}
}

fn solarized_theme() -> Theme {
	let base01 = Color::Rgb(0x58, 0x6e, 0x75);
	let base0 = Color::Rgb(0x83, 0x94, 0x96);
	let base03 = Color::Rgb(0x00, 0x2b, 0x36);
	let yellow = Color::Rgb(0xb5, 0x89, 0x00);
	let cyan = Color::Rgb(0x2a, 0xa1, 0x98);
	let red = Color::Rgb(0xdc, 0x32, 0x2f);
	let green = Color::Rgb(0x85, 0x99, 0x00);

	Theme {
		border: Style::new().fg(base01),
		border_active: Style::new().fg(yellow),
		placeholder: Style::new().fg(base01),
		chip: Style::new().fg(base03).bg(cyan),
		chip_remove: Style::new().fg(red).bg(cyan).add_modifier(Modifier::BOLD),
		arrow: Style::new().fg(yellow),
		search: Style::new().fg(base0),
		search_placeholder: Style::new().fg(base01),
		row: Style::new().fg(base0),
		row_cursor: Style::new().fg(base03).bg(yellow),
		checked: Style::new().fg(green),
		empty: Style::new().fg(base01).add_modifier(Modifier::ITALIC),
	}
}

/// Every built-in theme, default first.
#[must_use]
pub fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration {
			name: DEFAULT_THEME,
			aliases: &["dark"],
			theme: default_theme(),
		},
		ThemeRegistration {
			name: "light",
			aliases: &[],
			theme: light_theme(),
		},
		ThemeRegistration {
			name: "solarized",
			aliases: &["solarized-dark"],
			theme: solarized_theme(),
		},
	]
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	registrations().iter().map(|reg| reg.name).collect()
}

/// Look a theme up by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registrations()
		.into_iter()
		.find(|reg| reg.matches(name.trim()))
		.map(|reg| reg.theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_list_default_first() {
		assert_eq!(names(), ["default", "light", "solarized"]);
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Dark"), Some(default_theme()));
		assert_eq!(by_name(" solarized-dark "), Some(solarized_theme()));
		assert!(by_name("neon").is_none());
	}
}
