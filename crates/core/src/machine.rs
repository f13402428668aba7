//! The multi-select state machine.
//!
//! [`MultiSelect`] owns the catalog, the selection and the dropdown state.
//! Every input channel maps to exactly one method here; each method commits
//! its state change and, when the selection was mutated, reports the complete
//! selection to the host callback before returning.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::catalog::{Catalog, OptionItem};
use crate::document::{Area, PointerBus, PointerListener, Position, Subscription};
use crate::dropdown::{Dropdown, OpenPanel};
use crate::error::CatalogError;
use crate::selection::SelectionSet;

/// Host callback receiving the full selection after every change.
pub type ChangeCallback = Box<dyn FnMut(&[OptionItem])>;

/// Construction-time options for a [`MultiSelect`].
#[derive(Debug, Clone)]
pub struct MultiSelectConfig {
	/// Every option the widget can offer, in display order.
	pub catalog: Vec<OptionItem>,
	/// Options selected before the user interacts.
	pub default_selection: Vec<OptionItem>,
	/// Form field name carrying the comma-joined selected values.
	pub field_name: Option<String>,
	/// Text shown in the control while nothing is selected.
	pub placeholder: String,
	/// Text shown in the empty search input.
	pub search_placeholder: String,
}

impl Default for MultiSelectConfig {
	fn default() -> Self {
		Self {
			catalog: Vec::new(),
			default_selection: Vec::new(),
			field_name: None,
			placeholder: "Choose...".to_string(),
			search_placeholder: "Search...".to_string(),
		}
	}
}

impl MultiSelectConfig {
	#[must_use]
	pub fn new(catalog: Vec<OptionItem>) -> Self {
		Self {
			catalog,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_default_selection(mut self, defaults: Vec<OptionItem>) -> Self {
		self.default_selection = defaults;
		self
	}

	#[must_use]
	pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
		self.field_name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.search_placeholder = placeholder.into();
		self
	}
}

/// Keys the widget reacts to. Anything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Up,
	Down,
	Enter,
	Escape,
	Other,
}

/// Whether a click should keep bubbling to enclosing regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
	Continue,
	Stop,
}

/// Clickable regions of the widget, from innermost to outermost in a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
	/// The remove icon of the chip for `value`. Lives inside the control.
	ChipRemove(String),
	/// The control strip that opens and closes the panel.
	Control,
	/// The checkbox of the row for `value`. Lives inside the panel.
	Checkbox(String),
	/// The search input. Lives inside the panel.
	Search,
	/// The open panel itself.
	Panel,
}

/// Searchable multi-select dropdown state.
pub struct MultiSelect {
	catalog: Catalog,
	selection: SelectionSet,
	dropdown: Dropdown,
	search_focused: bool,
	root_area: Option<Area>,
	field_name: Option<String>,
	placeholder: String,
	search_placeholder: String,
	on_change: ChangeCallback,
}

impl fmt::Debug for MultiSelect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MultiSelect")
			.field("catalog", &self.catalog)
			.field("selection", &self.selection)
			.field("dropdown", &self.dropdown)
			.field("search_focused", &self.search_focused)
			.field("root_area", &self.root_area)
			.field("field_name", &self.field_name)
			.finish_non_exhaustive()
	}
}

impl MultiSelect {
	/// Build the widget. The callback is not invoked until [`mount`](Self::mount).
	///
	/// Defaults that name a value outside the catalog are dropped, and repeated
	/// defaults keep only their first occurrence.
	pub fn new<F>(config: MultiSelectConfig, on_change: F) -> Result<Self, CatalogError>
	where
		F: FnMut(&[OptionItem]) + 'static,
	{
		let catalog = Catalog::new(config.catalog)?;

		let mut selection = SelectionSet::new();
		for option in config.default_selection {
			let Some(known) = catalog.get(&option.value) else {
				tracing::warn!(value = %option.value, "dropping default selection missing from catalog");
				continue;
			};
			selection.insert(known.clone());
		}

		Ok(Self {
			catalog,
			selection,
			dropdown: Dropdown::Closed,
			search_focused: false,
			root_area: None,
			field_name: config.field_name,
			placeholder: config.placeholder,
			search_placeholder: config.search_placeholder,
			on_change: Box::new(on_change),
		})
	}

	/// Attach the widget to `bus`, report the initial selection and return
	/// the handle that keeps it mounted.
	pub fn mount(self, bus: &Rc<PointerBus>) -> Mounted {
		let widget = Rc::new(RefCell::new(self));
		widget.borrow_mut().notify();
		let weak = Rc::downgrade(&widget);
		let listener: Weak<RefCell<dyn PointerListener>> = weak;
		let subscription = bus.subscribe(listener);
		Mounted {
			widget,
			subscription,
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionSet {
		&self.selection
	}

	#[must_use]
	pub fn panel(&self) -> Option<&OpenPanel> {
		self.dropdown.panel()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.dropdown.is_open()
	}

	/// Whether the search input currently holds keyboard focus.
	#[must_use]
	pub fn search_focused(&self) -> bool {
		self.search_focused
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	#[must_use]
	pub fn search_placeholder(&self) -> &str {
		&self.search_placeholder
	}

	/// Form field name paired with the comma-joined selected values.
	#[must_use]
	pub fn form_value(&self) -> Option<(&str, String)> {
		let name = self.field_name.as_deref()?;
		Some((name, self.selection.joined_values()))
	}

	#[must_use]
	pub fn is_selected(&self, value: &str) -> bool {
		self.selection.contains(value)
	}

	/// Record where the widget was drawn; used to tell inside from outside.
	pub fn set_root_area(&mut self, area: Option<Area>) {
		self.root_area = area;
	}

	#[must_use]
	pub fn root_area(&self) -> Option<Area> {
		self.root_area
	}

	/// Open a closed panel (fresh query, full list, cursor on the first row)
	/// or close an open one.
	pub fn toggle_open(&mut self) {
		match self.dropdown {
			Dropdown::Closed => {
				self.dropdown = Dropdown::Open(OpenPanel::new(&self.catalog));
				self.search_focused = true;
				tracing::debug!("dropdown opened");
			}
			Dropdown::Open(_) => self.close(),
		}
	}

	/// Close the panel if it is open.
	pub fn close(&mut self) {
		if self.dropdown.is_open() {
			self.dropdown = Dropdown::Closed;
			self.search_focused = false;
			tracing::debug!("dropdown closed");
		}
	}

	/// Replace the search text. Ignored while the panel is closed.
	pub fn set_query(&mut self, query: &str) {
		if let Some(panel) = self.dropdown.panel_mut() {
			panel.set_query(&self.catalog, query);
			tracing::debug!(query, rows = panel.filtered().len(), "query applied");
		}
	}

	/// Handle a key press on the search input.
	///
	/// Returns `true` when the key was consumed by the widget.
	pub fn key_down(&mut self, key: Key) -> bool {
		if !self.search_focused {
			return false;
		}
		let Some(panel) = self.dropdown.panel_mut() else {
			return false;
		};
		match key {
			Key::Up => {
				panel.cursor_up();
				true
			}
			Key::Down => {
				panel.cursor_down();
				true
			}
			Key::Enter => {
				self.toggle_by_enter();
				true
			}
			Key::Escape | Key::Other => false,
		}
	}

	/// Handle a key release on the search input. Escape closes the panel.
	pub fn key_up(&mut self, key: Key) -> bool {
		if key != Key::Escape || !self.search_focused || !self.is_open() {
			return false;
		}
		self.close();
		true
	}

	/// Toggle the option under the cursor.
	///
	/// Does nothing, and does not notify, while closed or when the cursor sits
	/// past the last row. Returns whether the option is now selected.
	pub fn toggle_by_enter(&mut self) -> Option<bool> {
		let option = self.panel()?.highlighted(&self.catalog)?.clone();
		let selected = self.selection.toggle(&option);
		tracing::debug!(value = %option.value, selected, "toggled by keyboard");
		self.notify();
		Some(selected)
	}

	/// Apply a checkbox change for `value`, then return focus to the search
	/// input.
	///
	/// Checking a value that is already selected removes it, matching the
	/// toggle semantics of the keyboard path.
	pub fn toggle_by_checkbox(&mut self, value: &str, checked: bool) {
		if !checked || self.selection.contains(value) {
			self.selection.remove(value);
		} else if let Some(option) = self.catalog.get(value) {
			self.selection.insert(option.clone());
		}
		tracing::debug!(value, checked, "toggled by checkbox");
		self.notify();
		self.search_focused = self.dropdown.is_open();
	}

	/// Remove the chip for `value`. The click stops here so the enclosing
	/// control does not also toggle the panel.
	pub fn remove_by_chip(&mut self, value: &str) -> Propagation {
		self.selection.remove(value);
		tracing::debug!(value, "removed by chip");
		self.notify();
		Propagation::Stop
	}

	/// Deliver a click along `path`, innermost target first, until a target
	/// stops propagation.
	pub fn click(&mut self, path: &[ClickTarget]) -> Propagation {
		for target in path {
			if self.click_target(target) == Propagation::Stop {
				return Propagation::Stop;
			}
		}
		Propagation::Continue
	}

	fn click_target(&mut self, target: &ClickTarget) -> Propagation {
		match target {
			ClickTarget::ChipRemove(value) => self.remove_by_chip(value),
			ClickTarget::Control => {
				self.toggle_open();
				Propagation::Continue
			}
			// Panel parts do not exist while closed; swallow stale hits.
			ClickTarget::Checkbox(_) | ClickTarget::Search | ClickTarget::Panel
				if !self.is_open() =>
			{
				Propagation::Stop
			}
			ClickTarget::Checkbox(value) => {
				let checked = !self.is_selected(value);
				self.toggle_by_checkbox(value, checked);
				Propagation::Stop
			}
			ClickTarget::Search => {
				self.search_focused = true;
				Propagation::Stop
			}
			ClickTarget::Panel => Propagation::Stop,
		}
	}

	fn notify(&mut self) {
		(self.on_change)(self.selection.as_slice());
	}
}

impl PointerListener for MultiSelect {
	/// Close the panel when a press lands outside the widget.
	fn pointer_down(&mut self, position: Position) {
		let Some(root) = self.root_area else {
			return;
		};
		if self.is_open() && !root.contains(position) {
			tracing::debug!(?position, "pointer down outside widget");
			self.close();
		}
	}
}

/// A widget attached to a [`PointerBus`].
///
/// Dropping the handle (or calling [`unmount`](Self::unmount)) detaches the
/// outside-click listener.
pub struct Mounted {
	widget: Rc<RefCell<MultiSelect>>,
	subscription: Subscription,
}

impl Mounted {
	pub fn borrow(&self) -> Ref<'_, MultiSelect> {
		self.widget.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, MultiSelect> {
		self.widget.borrow_mut()
	}

	#[must_use]
	pub fn is_attached(&self) -> bool {
		self.subscription.is_attached()
	}

	/// Detach from the bus and hand back the final selection.
	pub fn unmount(mut self) -> SelectionSet {
		self.subscription.detach();
		self.widget.borrow().selection.clone()
	}
}

#[cfg(test)]
mod tests;
