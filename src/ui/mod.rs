//! Terminal host for the multi-select widget.
//!
//! [`App`] mounts a [`MultiSelect`] on a document [`PointerBus`], draws it
//! with ratatui and translates crossterm events into widget calls.

mod actions;
pub mod hit;
pub mod input;
mod render;
mod runtime;
pub mod theme;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use std::rc::Rc;

use msel_core::{CatalogError, Mounted, MultiSelect, MultiSelectConfig, OptionItem, PointerBus};
use serde::Serialize;

use hit::to_area;
pub use hit::HitMap;
pub use input::QueryInput;
pub use runtime::run;
pub use theme::Theme;

/// Everything needed to put a widget on screen.
#[derive(Debug, Clone)]
pub struct AppConfig {
	pub widget: MultiSelectConfig,
	pub theme: Theme,
	pub title: Option<String>,
}

/// Final state handed back when the user leaves the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
	/// `true` when the user submitted, `false` when they cancelled.
	pub accepted: bool,
	pub field_name: Option<String>,
	/// Comma-joined selected values, as a form would submit them.
	pub value: String,
	pub selection: Vec<OptionItem>,
}

pub struct App<'a> {
	bus: Rc<PointerBus>,
	widget: Mounted,
	/// Selection as last reported through the change callback.
	reported: Rc<RefCell<Vec<OptionItem>>>,
	input: QueryInput<'a>,
	theme: Theme,
	title: Option<String>,
	hits: HitMap,
	/// Whether the terminal reports key releases. Without them Escape is
	/// treated as released as soon as it is pressed.
	release_events: bool,
}

impl<'a> App<'a> {
	pub fn new(config: AppConfig) -> Result<Self, CatalogError> {
		let reported: Rc<RefCell<Vec<OptionItem>>> = Rc::default();
		let sink = Rc::clone(&reported);
		let widget = MultiSelect::new(config.widget, move |selection| {
			tracing::info!(count = selection.len(), "selection changed");
			*sink.borrow_mut() = selection.to_vec();
		})?;
		let search_placeholder = widget.search_placeholder().to_string();

		let bus = PointerBus::new();
		let widget = widget.mount(&bus);

		Ok(Self {
			bus,
			widget,
			reported,
			input: QueryInput::new(search_placeholder, config.theme),
			theme: config.theme,
			title: config.title,
			hits: HitMap::default(),
			release_events: false,
		})
	}

	/// Selection as last reported to the host.
	#[must_use]
	pub fn reported(&self) -> Vec<OptionItem> {
		self.reported.borrow().clone()
	}

	#[must_use]
	pub fn hits(&self) -> &HitMap {
		&self.hits
	}

	pub fn set_release_events(&mut self, enabled: bool) {
		self.release_events = enabled;
	}

	fn outcome(&self, accepted: bool) -> SelectionOutcome {
		let widget = self.widget.borrow();
		let (field_name, value) = match widget.form_value() {
			Some((name, value)) => (Some(name.to_string()), value),
			None => (None, widget.selection().joined_values()),
		};
		SelectionOutcome {
			accepted,
			field_name,
			value,
			selection: self.reported(),
		}
	}

	/// Run `f` against the widget, then reconcile the host with any change
	/// of the open state.
	fn interact<R>(&mut self, f: impl FnOnce(&mut MultiSelect) -> R) -> R {
		let was_open = self.widget.borrow().is_open();
		let result = f(&mut *self.widget.borrow_mut());
		self.sync_open_state(was_open);
		result
	}

	/// Events are handled in batches between frames, so after the panel
	/// opens or closes the last frame's panel regions no longer exist. Drop
	/// them and narrow the root area to what is still known: the control
	/// while closed, nothing while open until the next draw.
	fn sync_open_state(&mut self, was_open: bool) {
		let open = self.widget.borrow().is_open();
		if open == was_open {
			return;
		}
		self.input.clear();
		self.hits.clear_panel();
		let root = if open {
			None
		} else {
			self.hits.control.map(to_area)
		};
		self.widget.borrow_mut().set_root_area(root);
	}
}
