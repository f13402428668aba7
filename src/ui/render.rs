use msel_core::{MultiSelect, OpenPanel};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::hit::{HitMap, to_area};
use super::input::QueryInput;
use super::theme::Theme;

const CONTROL_HEIGHT: u16 = 3;
const ARROW_CLOSED: &str = "▾";
const ARROW_OPEN: &str = "▴";
const CHIP_REMOVE: &str = "×";
const OVERFLOW: &str = "…";
const NO_RESULTS: &str = "No results";

impl<'a> App<'a> {
	/// Draw the widget at the top of the frame and record its hit regions.
	pub fn draw(&mut self, frame: &mut Frame) {
		self.hits.clear();
		let area = frame.area();
		{
			let widget = self.widget.borrow();
			let control = Rect {
				height: CONTROL_HEIGHT.min(area.height),
				..area
			};
			render_control(
				frame,
				control,
				&widget,
				self.title.as_deref(),
				&self.theme,
				&mut self.hits,
			);

			if let Some(panel) = widget.panel() {
				let below = Rect {
					y: control.bottom(),
					height: area.bottom().saturating_sub(control.bottom()),
					..area
				};
				let parts = PanelParts {
					widget: &widget,
					panel,
					theme: &self.theme,
				};
				parts.render(frame, below, &mut self.input, &mut self.hits);
			}
		}

		let root = self.hits.root().map(to_area);
		self.widget.borrow_mut().set_root_area(root);
	}
}

fn render_control(
	frame: &mut Frame,
	area: Rect,
	widget: &MultiSelect,
	title: Option<&str>,
	theme: &Theme,
	hits: &mut HitMap,
) {
	if area.is_empty() {
		return;
	}
	hits.control = Some(area);

	let border = if widget.is_open() {
		theme.border_active
	} else {
		theme.border
	};
	let mut block = Block::bordered().border_style(border);
	if let Some(title) = title {
		block = block.title(format!(" {title} "));
	}
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.is_empty() {
		return;
	}

	let arrow = if widget.is_open() {
		ARROW_OPEN
	} else {
		ARROW_CLOSED
	};
	let arrow_area = Rect {
		x: inner.right().saturating_sub(1),
		width: inner.width.min(1),
		height: 1,
		..inner
	};
	frame.render_widget(Span::styled(arrow, theme.arrow), arrow_area);

	let chips_area = Rect {
		width: inner.width.saturating_sub(2),
		height: 1,
		..inner
	};
	let line = if widget.selection().is_empty() {
		Line::from(Span::styled(widget.placeholder(), theme.placeholder))
	} else {
		chip_line(widget, chips_area, theme, hits)
	};
	frame.render_widget(line, chips_area);
}

/// Lay chips out left to right, recording each remove icon. Chips that do
/// not fit are replaced by an ellipsis.
fn chip_line<'w>(
	widget: &'w MultiSelect,
	area: Rect,
	theme: &Theme,
	hits: &mut HitMap,
) -> Line<'w> {
	let limit = usize::from(area.width);
	let mut spans = Vec::new();
	let mut used = 0usize;

	for (idx, option) in widget.selection().iter().enumerate() {
		let gap = usize::from(idx > 0);
		let label_width = option.name.width() + 1;
		let chip_width = label_width + CHIP_REMOVE.width();
		if used + gap + chip_width > limit {
			if used + gap + OVERFLOW.width() <= limit {
				spans.push(Span::raw(" ".repeat(gap)));
				spans.push(Span::styled(OVERFLOW, theme.placeholder));
			}
			break;
		}

		if gap > 0 {
			spans.push(Span::raw(" "));
		}
		spans.push(Span::styled(format!("{} ", option.name), theme.chip));
		spans.push(Span::styled(CHIP_REMOVE, theme.chip_remove));

		let icon_x = area.x + to_u16(used + gap + label_width);
		hits.chip_removes
			.push((Rect::new(icon_x, area.y, 1, 1), option.value.clone()));
		used += gap + chip_width;
	}

	Line::from(spans)
}

struct PanelParts<'r> {
	widget: &'r MultiSelect,
	panel: &'r OpenPanel,
	theme: &'r Theme,
}

impl PanelParts<'_> {
	fn render(&self, frame: &mut Frame, below: Rect, input: &mut QueryInput, hits: &mut HitMap) {
		let rows = self.panel.filtered().len();
		// Borders, the search line and at least one row.
		let wanted = to_u16(rows.max(1)).saturating_add(3);
		let area = Rect {
			height: wanted.min(below.height),
			..below
		};
		if area.is_empty() {
			return;
		}
		hits.panel = Some(area);

		let block = Block::bordered().border_style(self.theme.border_active);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.is_empty() {
			return;
		}

		let search = Rect { height: 1, ..inner };
		input.render(frame, search, self.widget.search_focused());
		hits.search = Some(search);

		let list = Rect {
			y: inner.y + 1,
			height: inner.height.saturating_sub(1),
			..inner
		};
		if list.is_empty() {
			return;
		}
		if rows == 0 {
			frame.render_widget(
				Paragraph::new(Span::styled(NO_RESULTS, self.theme.empty)),
				list,
			);
			return;
		}
		self.render_rows(frame, list, hits);
	}

	fn render_rows(&self, frame: &mut Frame, list: Rect, hits: &mut HitMap) {
		let catalog = self.widget.catalog();
		let visible = usize::from(list.height);
		let cursor = self.panel.cursor();
		let total = self.panel.filtered().len();
		let offset = (cursor + 1)
			.saturating_sub(visible)
			.min(total.saturating_sub(visible));

		let options = self.panel.filtered().options(catalog).enumerate();
		for (slot, (row, option)) in options.skip(offset).take(visible).enumerate() {
			let rect = Rect {
				y: list.y + to_u16(slot),
				height: 1,
				..list
			};
			let highlighted = row == cursor;
			let base = if highlighted {
				self.theme.row_cursor
			} else {
				self.theme.row
			};
			let checkbox = match self.widget.is_selected(&option.value) {
				true if highlighted => Span::styled("[x]", base),
				true => Span::styled("[x]", self.theme.checked),
				false => Span::styled("[ ]", base),
			};
			let line = Line::from(vec![
				checkbox,
				Span::raw(" "),
				Span::styled(option.name.as_str(), base),
			])
			.style(base);
			frame.render_widget(line, rect);
			hits.rows.push((rect, option.value.clone()));
		}
	}
}

fn to_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}
