//! Open/closed state of the option panel.
//!
//! The query, the filtered rows and the keyboard cursor only exist while the
//! panel is open, so they live inside [`Dropdown::Open`].

use crate::catalog::{Catalog, OptionItem};
use crate::filter::{FilteredView, apply_query};

/// Visibility of the option panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dropdown {
	#[default]
	Closed,
	Open(OpenPanel),
}

impl Dropdown {
	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open(_))
	}

	#[must_use]
	pub fn panel(&self) -> Option<&OpenPanel> {
		match self {
			Self::Open(panel) => Some(panel),
			Self::Closed => None,
		}
	}

	pub fn panel_mut(&mut self) -> Option<&mut OpenPanel> {
		match self {
			Self::Open(panel) => Some(panel),
			Self::Closed => None,
		}
	}
}

/// Search state of an open panel.
///
/// The cursor ranges over `0..=filtered.len()`; the upper bound sits one past
/// the last row and highlights nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPanel {
	query: String,
	filtered: FilteredView,
	cursor: usize,
}

impl OpenPanel {
	/// Fresh panel: empty query, every option visible, cursor on the first row.
	#[must_use]
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			query: String::new(),
			filtered: FilteredView::full(catalog),
			cursor: 0,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn filtered(&self) -> &FilteredView {
		&self.filtered
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Replace the query, rebuild the visible rows and rewind the cursor.
	pub fn set_query(&mut self, catalog: &Catalog, query: impl Into<String>) {
		self.query = query.into();
		self.filtered = apply_query(catalog, &self.query);
		self.cursor = 0;
	}

	/// Move the cursor one row up. Returns `false` when already at the top.
	pub fn cursor_up(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		true
	}

	/// Move the cursor one row down, stopping one past the last row.
	pub fn cursor_down(&mut self) -> bool {
		if self.cursor >= self.filtered.len() {
			return false;
		}
		self.cursor += 1;
		true
	}

	/// Option under the cursor, if the cursor sits on a real row.
	#[must_use]
	pub fn highlighted<'c>(&self, catalog: &'c Catalog) -> Option<&'c OptionItem> {
		self.filtered.get(catalog, self.cursor)
	}
}
