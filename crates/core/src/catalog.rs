//! The fixed universe of selectable options.
//!
//! A [`Catalog`] is supplied once when a widget is built and never replaced.
//! Options are kept in the order the caller provided them, keyed by their
//! identifying `value` so lookups and duplicate detection happen in one place.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single selectable entry: a display label plus a unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionItem {
	/// Label shown in rows and chips.
	pub name: String,
	/// Identifier used for filtering, membership and form output.
	pub value: String,
}

impl OptionItem {
	#[must_use]
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Ordered, value-keyed collection of every option the widget can offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	options: IndexMap<String, OptionItem>,
}

impl Catalog {
	/// Build a catalog, rejecting options whose value was already seen.
	pub fn new<I>(options: I) -> Result<Self, CatalogError>
	where
		I: IntoIterator<Item = OptionItem>,
	{
		let mut map = IndexMap::new();
		for option in options {
			if map.contains_key(&option.value) {
				return Err(CatalogError::DuplicateValue {
					value: option.value,
				});
			}
			map.insert(option.value.clone(), option);
		}
		Ok(Self { options: map })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.options.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Look up the option carrying `value`.
	#[must_use]
	pub fn get(&self, value: &str) -> Option<&OptionItem> {
		self.options.get(value)
	}

	/// Look up the option at catalog position `index`.
	#[must_use]
	pub fn get_index(&self, index: usize) -> Option<&OptionItem> {
		self.options.get_index(index).map(|(_, option)| option)
	}

	#[must_use]
	pub fn contains(&self, value: &str) -> bool {
		self.options.contains_key(value)
	}

	/// Iterate options in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
		self.options.values()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a OptionItem;
	type IntoIter = indexmap::map::Values<'a, String, OptionItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.options.values()
	}
}
