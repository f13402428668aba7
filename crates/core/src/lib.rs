//! Core state for the `msel` searchable multi-select dropdown.
//!
//! This crate has no terminal dependency. It holds the option catalog, the
//! query filter, the selection set and the dropdown state machine, plus the
//! document-wide pointer bus used for outside-click detection. Front-ends
//! translate their input events into calls on [`MultiSelect`] and draw from
//! its accessors.

pub mod catalog;
pub mod document;
pub mod dropdown;
mod error;
pub mod filter;
pub mod machine;
pub mod selection;

pub use catalog::{Catalog, OptionItem};
pub use document::{Area, PointerBus, PointerListener, Position, Subscription};
pub use dropdown::{Dropdown, OpenPanel};
pub use error::CatalogError;
pub use filter::{FilteredView, MatchMode, QueryMatcher, apply_query};
pub use machine::{
	ChangeCallback, ClickTarget, Key, Mounted, MultiSelect, MultiSelectConfig, Propagation,
};
pub use selection::SelectionSet;
