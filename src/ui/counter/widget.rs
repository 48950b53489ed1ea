//! Rendering for the counter widget.
//!
//! Row layout inside the panel:
//!
//! ```text
//! <title>
//! <value>
//!
//! [ ADD ]  [ REMOVE ]  [ RESTART ]
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

use super::state::{CounterControl, CounterState};

/// Rows the widget needs including its border.
pub const COUNTER_HEIGHT: u16 = 6;

const BUTTON_GAP: u16 = 2;
const TITLE_ROW: u16 = 0;
const VALUE_ROW: u16 = 1;
const BUTTON_ROW: u16 = 3;

pub struct CounterWidget<'a> {
    title: &'a str,
    state: &'a CounterState,
}

impl<'a> CounterWidget<'a> {
    pub fn new(title: &'a str, state: &'a CounterState) -> Self {
        Self { title, state }
    }
}

impl Widget for CounterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block();
        let inner = block.inner(area);
        block.render(area, buf);

        // Title is handed over as a raw span so it is never reinterpreted.
        let heading = Line::from(Span::styled(
            self.title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        render_row(heading, inner, TITLE_ROW, buf);

        let value = Line::from(Span::styled(
            self.state.value().to_string(),
            Style::default().fg(HEADER_TEXT),
        ));
        render_row(value, inner, VALUE_ROW, buf);

        for (control, rect) in control_rects(area) {
            let style = if control == self.state.focused() {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Paragraph::new(Span::styled(button_text(control), style)).render(rect, buf);
        }
    }
}

/// Screen rectangles of the three controls for a widget drawn in `area`.
///
/// Controls that do not fit are omitted, so hit-testing never reports a
/// control that is not visible.
pub fn control_rects(area: Rect) -> Vec<(CounterControl, Rect)> {
    let inner = panel_block().inner(area);
    if inner.height <= BUTTON_ROW {
        return Vec::new();
    }

    let y = inner.y + BUTTON_ROW;
    let right = inner.x.saturating_add(inner.width);
    let mut x = inner.x;
    let mut rects = Vec::with_capacity(CounterControl::ALL.len());

    for control in CounterControl::ALL {
        let width = button_text(control).chars().count() as u16;
        if x.saturating_add(width) > right {
            break;
        }
        rects.push((
            control,
            Rect {
                x,
                y,
                width,
                height: 1,
            },
        ));
        x = x.saturating_add(width + BUTTON_GAP);
    }

    rects
}

fn button_text(control: CounterControl) -> String {
    format!("[ {} ]", control.label())
}

fn panel_block() -> Block<'static> {
    Block::default()
        .title(" Counter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_row(line: Line<'_>, inner: Rect, row: u16, buf: &mut Buffer) {
    if inner.height <= row {
        return;
    }
    let rect = Rect {
        x: inner.x,
        y: inner.y + row,
        width: inner.width,
        height: 1,
    };
    Paragraph::new(line).render(rect, buf);
}
