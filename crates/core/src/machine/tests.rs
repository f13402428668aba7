use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type Calls = Rc<RefCell<Vec<Vec<String>>>>;

fn departments() -> Vec<OptionItem> {
	vec![
		OptionItem::new("Facilities", "facilities"),
		OptionItem::new("Finance", "finance"),
		OptionItem::new("Front Office", "front_office"),
		OptionItem::new("Human Resources", "human_resources"),
		OptionItem::new("IT", "it"),
		OptionItem::new("Management Team", "management_team"),
		OptionItem::new("Planning", "planning"),
		OptionItem::new("Sales", "sales"),
	]
}

fn mount_with(config: MultiSelectConfig) -> (Rc<PointerBus>, Mounted, Calls) {
	let calls: Calls = Rc::default();
	let sink = Rc::clone(&calls);
	let widget = MultiSelect::new(config, move |selection| {
		sink.borrow_mut()
			.push(selection.iter().map(|opt| opt.value.clone()).collect());
	})
	.expect("catalog is valid");
	let bus = PointerBus::new();
	let mounted = widget.mount(&bus);
	(bus, mounted, calls)
}

fn mount(catalog: Vec<OptionItem>) -> (Rc<PointerBus>, Mounted, Calls) {
	mount_with(MultiSelectConfig::new(catalog))
}

fn last_call(calls: &Calls) -> Vec<String> {
	calls.borrow().last().cloned().expect("callback was invoked")
}

#[test]
fn mount_reports_initial_defaults_once() {
	let config = MultiSelectConfig::new(departments()).with_default_selection(vec![
		OptionItem::new("Management Team", "management_team"),
		OptionItem::new("Sales", "sales"),
	]);
	let (_bus, mounted, calls) = mount_with(config);

	assert_eq!(*calls.borrow(), [vec!["management_team", "sales"]]);
	assert!(!mounted.borrow().is_open());
}

#[test]
fn unknown_and_repeated_defaults_are_dropped() {
	let config = MultiSelectConfig::new(departments()).with_default_selection(vec![
		OptionItem::new("Sales", "sales"),
		OptionItem::new("Legal", "legal"),
		OptionItem::new("Sales", "sales"),
	]);
	let (_bus, _mounted, calls) = mount_with(config);
	assert_eq!(last_call(&calls), ["sales"]);
}

#[test]
fn duplicate_catalog_values_are_rejected() {
	let mut catalog = departments();
	catalog.push(OptionItem::new("Sales again", "sales"));
	let err = MultiSelect::new(MultiSelectConfig::new(catalog), |_| {}).unwrap_err();
	assert!(matches!(err, CatalogError::DuplicateValue { value } if value == "sales"));
}

#[test]
fn opening_resets_query_and_cursor() {
	let (_bus, mounted, _calls) = mount(departments());
	let mut widget = mounted.borrow_mut();

	widget.toggle_open();
	widget.set_query("fin");
	widget.key_down(Key::Down);
	widget.toggle_open();
	assert!(!widget.is_open());

	widget.toggle_open();
	let panel = widget.panel().expect("panel is open");
	assert_eq!(panel.query(), "");
	assert_eq!(panel.cursor(), 0);
	assert_eq!(panel.filtered().len(), departments().len());
	assert!(widget.search_focused());
}

#[test]
fn query_is_ignored_while_closed() {
	let (_bus, mounted, _calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.set_query("fin");
	assert!(widget.panel().is_none());
}

#[test]
fn keys_only_act_while_open() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();

	assert!(!widget.key_down(Key::Down));
	assert!(!widget.key_down(Key::Enter));
	assert!(!widget.key_up(Key::Escape));
	assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn enter_toggles_highlighted_row_and_keeps_panel_open() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_open();
	widget.key_down(Key::Down);

	assert!(widget.key_down(Key::Enter));
	assert_eq!(last_call(&calls), ["finance"]);
	assert!(widget.is_open());

	widget.key_down(Key::Enter);
	assert!(last_call(&calls).is_empty());
	assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn enter_past_last_row_is_a_silent_no_op() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_open();
	widget.set_query("^it$");
	widget.key_down(Key::Down);
	assert_eq!(widget.panel().map(OpenPanel::cursor), Some(1));

	assert_eq!(widget.toggle_by_enter(), None);
	assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn enter_on_empty_filter_is_a_no_op() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_open();
	widget.set_query("nothing matches");
	widget.key_down(Key::Enter);
	assert!(widget.selection().is_empty());
	assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn checkbox_appends_in_selection_order_and_refocuses() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_open();
	widget.click(&[ClickTarget::Search, ClickTarget::Panel]);

	widget.toggle_by_checkbox("sales", true);
	widget.toggle_by_checkbox("facilities", true);
	assert_eq!(last_call(&calls), ["sales", "facilities"]);
	assert!(widget.search_focused());

	widget.toggle_by_checkbox("sales", false);
	assert_eq!(last_call(&calls), ["facilities"]);
	assert_eq!(calls.borrow().len(), 4);
}

#[test]
fn checking_a_selected_value_removes_it() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_by_checkbox("it", true);
	widget.toggle_by_checkbox("it", true);
	assert!(widget.selection().is_empty());
	assert!(last_call(&calls).is_empty());
}

#[test]
fn unknown_values_do_not_change_the_selection() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_by_checkbox("legal", true);
	widget.remove_by_chip("legal");
	assert!(widget.selection().is_empty());
	// Each mutation request still reports the (unchanged) selection.
	assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn chip_click_does_not_toggle_the_control() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();
	widget.toggle_by_checkbox("sales", true);

	let propagation = widget.click(&[
		ClickTarget::ChipRemove("sales".to_string()),
		ClickTarget::Control,
	]);
	assert_eq!(propagation, Propagation::Stop);
	assert!(!widget.is_open());
	assert!(last_call(&calls).is_empty());
}

#[test]
fn control_click_toggles_and_panel_click_stops() {
	let (_bus, mounted, _calls) = mount(departments());
	let mut widget = mounted.borrow_mut();

	assert_eq!(widget.click(&[ClickTarget::Control]), Propagation::Continue);
	assert!(widget.is_open());
	assert_eq!(widget.click(&[ClickTarget::Panel]), Propagation::Stop);
	assert!(widget.is_open());

	widget.click(&[ClickTarget::Checkbox("it".to_string()), ClickTarget::Panel]);
	assert!(widget.is_selected("it"));
	assert!(widget.is_open());
}

#[test]
fn outside_press_closes_and_inside_press_does_not() {
	let (bus, mounted, _calls) = mount(departments());
	{
		let mut widget = mounted.borrow_mut();
		widget.set_root_area(Some(Area::new(0, 0, 20, 10)));
		widget.toggle_open();
	}

	bus.dispatch(Position::new(5, 5));
	assert!(mounted.borrow().is_open());

	bus.dispatch(Position::new(30, 5));
	assert!(!mounted.borrow().is_open());
	assert!(!mounted.borrow().search_focused());
}

#[test]
fn outside_press_before_first_render_is_ignored() {
	let (bus, mounted, _calls) = mount(departments());
	mounted.borrow_mut().toggle_open();
	bus.dispatch(Position::new(100, 100));
	assert!(mounted.borrow().is_open());
}

#[test]
fn unmount_releases_listener() {
	let (bus, mounted, _calls) = mount(departments());
	assert_eq!(bus.listener_count(), 1);
	assert!(mounted.is_attached());

	mounted.borrow_mut().toggle_by_checkbox("it", true);
	let selection = mounted.unmount();
	assert_eq!(selection.joined_values(), "it");
	assert_eq!(bus.listener_count(), 0);
}

#[test]
fn dropping_mounted_widget_releases_listener() {
	let (bus, mounted, _calls) = mount(departments());
	drop(mounted);
	assert_eq!(bus.listener_count(), 0);
	assert_eq!(bus.dispatch(Position::new(0, 0)), 0);
}

#[test]
fn form_value_joins_selected_values() {
	let config = MultiSelectConfig::new(departments())
		.with_field_name("department")
		.with_default_selection(vec![OptionItem::new("IT", "it")]);
	let (_bus, mounted, _calls) = mount_with(config);
	mounted.borrow_mut().toggle_by_checkbox("planning", true);

	let widget = mounted.borrow();
	assert_eq!(
		widget.form_value(),
		Some(("department", "it,planning".to_string()))
	);
}

#[test]
fn form_value_requires_a_field_name() {
	let (_bus, mounted, _calls) = mount(departments());
	assert!(mounted.borrow().form_value().is_none());
}

#[test]
fn panel_targets_are_inert_while_closed() {
	let (_bus, mounted, calls) = mount(departments());
	let mut widget = mounted.borrow_mut();

	let propagation = widget.click(&[ClickTarget::Checkbox("sales".to_string()), ClickTarget::Panel]);
	assert_eq!(propagation, Propagation::Stop);
	assert_eq!(widget.click(&[ClickTarget::Search, ClickTarget::Panel]), Propagation::Stop);
	assert!(widget.selection().is_empty());
	assert!(!widget.search_focused());
	assert!(!widget.is_open());
	assert_eq!(calls.borrow().len(), 1);
}
