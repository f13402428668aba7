//! Screen regions recorded while drawing, used to route pointer presses.

use msel_core::{Area, ClickTarget, Position};
use ratatui::layout::Rect;

/// Where each clickable part of the widget landed in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
	pub control: Option<Rect>,
	pub chip_removes: Vec<(Rect, String)>,
	pub panel: Option<Rect>,
	pub search: Option<Rect>,
	pub rows: Vec<(Rect, String)>,
}

impl HitMap {
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Forget the panel, search and row regions.
	pub fn clear_panel(&mut self) {
		self.panel = None;
		self.search = None;
		self.rows.clear();
	}

	/// Bounding box of the control and, when open, the panel.
	#[must_use]
	pub fn root(&self) -> Option<Rect> {
		match (self.control, self.panel) {
			(Some(control), Some(panel)) => Some(control.union(panel)),
			(control, panel) => control.or(panel),
		}
	}

	/// Click targets under `position`, innermost first.
	#[must_use]
	pub fn path_at(&self, position: Position) -> Vec<ClickTarget> {
		let hit = |rect: &Rect| contains(*rect, position);

		if let Some((_, value)) = self.chip_removes.iter().find(|(rect, _)| hit(rect)) {
			return vec![ClickTarget::ChipRemove(value.clone()), ClickTarget::Control];
		}
		if self.control.as_ref().is_some_and(hit) {
			return vec![ClickTarget::Control];
		}
		if let Some((_, value)) = self.rows.iter().find(|(rect, _)| hit(rect)) {
			return vec![ClickTarget::Checkbox(value.clone()), ClickTarget::Panel];
		}
		if self.search.as_ref().is_some_and(hit) {
			return vec![ClickTarget::Search, ClickTarget::Panel];
		}
		if self.panel.as_ref().is_some_and(hit) {
			return vec![ClickTarget::Panel];
		}
		Vec::new()
	}
}

#[must_use]
pub fn to_area(rect: Rect) -> Area {
	Area::new(rect.x, rect.y, rect.width, rect.height)
}

fn contains(rect: Rect, position: Position) -> bool {
	to_area(rect).contains(position)
}
