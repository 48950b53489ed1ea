//! Rendering for the remote value display.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::RemoteValueState;

/// Rows the view needs including its border.
pub const REMOTE_HEIGHT: u16 = 3;

const LOADING_TEXT: &str = "Loading...";
const ERROR_LABEL: &str = "Error: ";

pub struct RemoteValueView<'a> {
    state: &'a RemoteValueState,
    label: &'a str,
    unit: &'a str,
}

impl<'a> RemoteValueView<'a> {
    pub fn new(state: &'a RemoteValueState, label: &'a str, unit: &'a str) -> Self {
        Self { state, label, unit }
    }
}

impl Widget for RemoteValueView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        let style = match self.state {
            RemoteValueState::Loading => Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            RemoteValueState::Loaded { .. } => Style::default().fg(STATUS_OK),
            RemoteValueState::Failed { .. } => Style::default().fg(STATUS_ERROR),
        };
        let line = Line::from(Span::styled(status_text(self.state, self.unit), style));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// The single line shown for `state`. Exactly one of the three branches.
pub fn status_text(state: &RemoteValueState, unit: &str) -> String {
    match state {
        RemoteValueState::Loading => LOADING_TEXT.to_string(),
        RemoteValueState::Loaded { value } => format_reading(*value, unit),
        RemoteValueState::Failed { message } => format!("{ERROR_LABEL}{message}"),
    }
}

/// `21.5` + `°C` → `21.5 °C`. Uses the shortest round-trip form of the number.
pub fn format_reading(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        value.to_string()
    } else {
        format!("{value} {unit}")
    }
}
