//! The ordered set of chosen options.

use crate::catalog::OptionItem;

/// Options the user has chosen, in the order they were chosen.
///
/// Membership is decided by `value`; inserting a value that is already present
/// is rejected so the set never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
	items: Vec<OptionItem>,
}

impl SelectionSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn contains(&self, value: &str) -> bool {
		self.items.iter().any(|item| item.value == value)
	}

	/// Append `option` unless its value is already selected.
	///
	/// Returns `true` when the set changed.
	pub fn insert(&mut self, option: OptionItem) -> bool {
		if self.contains(&option.value) {
			return false;
		}
		self.items.push(option);
		true
	}

	/// Drop the entry with `value`. Returns `true` when something was removed.
	pub fn remove(&mut self, value: &str) -> bool {
		let before = self.items.len();
		self.items.retain(|item| item.value != value);
		self.items.len() != before
	}

	/// Remove `option` if present, otherwise append it.
	///
	/// Returns `true` when the option ends up selected.
	pub fn toggle(&mut self, option: &OptionItem) -> bool {
		if self.remove(&option.value) {
			false
		} else {
			self.items.push(option.clone());
			true
		}
	}

	#[must_use]
	pub fn as_slice(&self) -> &[OptionItem] {
		&self.items
	}

	pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
		self.items.iter()
	}

	/// Selected values joined with commas, as carried by a form field.
	#[must_use]
	pub fn joined_values(&self) -> String {
		self.items
			.iter()
			.map(|item| item.value.as_str())
			.collect::<Vec<_>>()
			.join(",")
	}
}
