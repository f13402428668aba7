//! Document-wide pointer-down notifications.
//!
//! A [`PointerBus`] stands in for the hosting document: every pointer press is
//! dispatched to all subscribed listeners so each widget can decide whether the
//! press landed outside of it. Subscriptions are RAII handles; dropping one
//! detaches the listener, and the bus only keeps weak references so a torn
//! down widget is never called back.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Screen cell addressed by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	pub column: u16,
	pub row: u16,
}

impl Position {
	#[must_use]
	pub const fn new(column: u16, row: u16) -> Self {
		Self { column, row }
	}
}

/// Rectangular screen region occupied by a widget or one of its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Area {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Area {
	#[must_use]
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	#[must_use]
	pub fn contains(&self, position: Position) -> bool {
		let inside_x =
			position.column >= self.x && position.column < self.x.saturating_add(self.width);
		let inside_y = position.row >= self.y && position.row < self.y.saturating_add(self.height);
		inside_x && inside_y
	}
}

/// Receiver of document-wide pointer presses.
pub trait PointerListener {
	fn pointer_down(&mut self, position: Position);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Entry {
	id: ListenerId,
	listener: Weak<RefCell<dyn PointerListener>>,
}

/// Registry of pointer-down listeners shared by every widget on screen.
#[derive(Default)]
pub struct PointerBus {
	entries: RefCell<Vec<Entry>>,
	next_id: Cell<u64>,
}

impl PointerBus {
	#[must_use]
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// Attach `listener` until the returned [`Subscription`] is dropped.
	pub fn subscribe(self: &Rc<Self>, listener: Weak<RefCell<dyn PointerListener>>) -> Subscription {
		let id = ListenerId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.entries.borrow_mut().push(Entry { id, listener });
		tracing::debug!(id = id.0, "pointer listener attached");
		Subscription {
			bus: Rc::downgrade(self),
			id,
			attached: true,
		}
	}

	/// Deliver a pointer press to every live listener.
	///
	/// Returns how many listeners received it. Listeners are collected before
	/// delivery so a listener may subscribe or detach while being notified.
	pub fn dispatch(&self, position: Position) -> usize {
		let live: Vec<Rc<RefCell<dyn PointerListener>>> = {
			let mut entries = self.entries.borrow_mut();
			entries.retain(|entry| entry.listener.strong_count() > 0);
			entries
				.iter()
				.filter_map(|entry| entry.listener.upgrade())
				.collect()
		};

		let mut delivered = 0;
		for listener in live {
			match listener.try_borrow_mut() {
				Ok(mut listener) => {
					listener.pointer_down(position);
					delivered += 1;
				}
				Err(_) => {
					tracing::warn!("skipping pointer listener that is already borrowed");
				}
			}
		}
		delivered
	}

	/// Number of attached listeners whose target is still alive.
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.entries
			.borrow()
			.iter()
			.filter(|entry| entry.listener.strong_count() > 0)
			.count()
	}

	fn detach(&self, id: ListenerId) -> bool {
		let mut entries = self.entries.borrow_mut();
		let before = entries.len();
		entries.retain(|entry| entry.id != id);
		entries.len() != before
	}
}

/// Handle keeping a listener attached to a [`PointerBus`].
#[must_use = "dropping a subscription detaches the listener"]
pub struct Subscription {
	bus: Weak<PointerBus>,
	id: ListenerId,
	attached: bool,
}

impl Subscription {
	/// Detach the listener. Calling this more than once is harmless.
	pub fn detach(&mut self) {
		if !self.attached {
			return;
		}
		self.attached = false;
		if let Some(bus) = self.bus.upgrade()
			&& bus.detach(self.id)
		{
			tracing::debug!(id = self.id.0, "pointer listener detached");
		}
	}

	#[must_use]
	pub fn is_attached(&self) -> bool {
		self.attached
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.detach();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Recorder {
		presses: Vec<Position>,
	}

	impl PointerListener for Recorder {
		fn pointer_down(&mut self, position: Position) {
			self.presses.push(position);
		}
	}

	fn attach(bus: &Rc<PointerBus>, recorder: &Rc<RefCell<Recorder>>) -> Subscription {
		let weak = Rc::downgrade(recorder);
		let listener: Weak<RefCell<dyn PointerListener>> = weak;
		bus.subscribe(listener)
	}

	#[test]
	fn area_contains_is_half_open() {
		let area = Area::new(2, 3, 4, 2);
		assert!(area.contains(Position::new(2, 3)));
		assert!(area.contains(Position::new(5, 4)));
		assert!(!area.contains(Position::new(6, 4)));
		assert!(!area.contains(Position::new(5, 5)));
		assert!(!area.contains(Position::new(1, 3)));
	}

	#[test]
	fn dispatch_reaches_attached_listeners() {
		let bus = PointerBus::new();
		let recorder = Rc::new(RefCell::new(Recorder::default()));
		let _subscription = attach(&bus, &recorder);

		assert_eq!(bus.dispatch(Position::new(1, 1)), 1);
		assert_eq!(recorder.borrow().presses, [Position::new(1, 1)]);
	}

	#[test]
	fn dropping_subscription_detaches() {
		let bus = PointerBus::new();
		let recorder = Rc::new(RefCell::new(Recorder::default()));
		{
			let _subscription = attach(&bus, &recorder);
			assert_eq!(bus.listener_count(), 1);
		}
		assert_eq!(bus.listener_count(), 0);
		assert_eq!(bus.dispatch(Position::new(0, 0)), 0);
		assert!(recorder.borrow().presses.is_empty());
	}

	#[test]
	fn detach_is_idempotent() {
		let bus = PointerBus::new();
		let recorder = Rc::new(RefCell::new(Recorder::default()));
		let mut first = attach(&bus, &recorder);
		let _second = attach(&bus, &recorder);

		first.detach();
		first.detach();
		assert!(!first.is_attached());
		assert_eq!(bus.listener_count(), 1);
	}

	#[test]
	fn dead_listener_is_never_called() {
		let bus = PointerBus::new();
		let recorder = Rc::new(RefCell::new(Recorder::default()));
		let _subscription = attach(&bus, &recorder);
		drop(recorder);

		assert_eq!(bus.listener_count(), 0);
		assert_eq!(bus.dispatch(Position::new(0, 0)), 0);
	}

	#[test]
	fn subscription_outliving_bus_drops_cleanly() {
		let recorder = Rc::new(RefCell::new(Recorder::default()));
		let mut subscription = {
			let bus = PointerBus::new();
			attach(&bus, &recorder)
		};
		subscription.detach();
		assert!(!subscription.is_attached());
	}
}
