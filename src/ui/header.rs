use crate::ui::remote::RemoteValueState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, reading: &RemoteValueState, endpoint: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_style = match reading {
            RemoteValueState::Loading => separator_style,
            RemoteValueState::Loaded { .. } => Style::default().fg(STATUS_OK),
            RemoteValueState::Failed { .. } => Style::default().fg(STATUS_ERROR),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", dot_style),
            Span::styled("  ", text_style),
            Span::styled("counterdash", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
