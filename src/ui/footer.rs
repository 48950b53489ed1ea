use crate::ui::counter::CounterControl;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const SEPARATOR: &str = " │ ";

/// Key hints on the left, crate version on the right.
pub struct Footer;

/// One `<key> <LABEL>` hint per counter control, then focus and quit keys.
pub fn hint_text() -> String {
    let controls = CounterControl::ALL
        .iter()
        .map(|control| format!("{} {}", control.shortcut(), control.label()));
    let navigation = ["Tab/Enter: Press".to_string(), "q: Quit".to_string()];

    let hints: Vec<String> = controls.chain(navigation).collect();
    format!(" {}", hints.join(SEPARATOR))
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let hints = hint_text();
        let version = format!("v{} ", env!("CARGO_PKG_VERSION"));

        // Version wins when the row is too narrow for both.
        let room = (inner.width as usize).saturating_sub(version.chars().count());
        let shown: String = hints.chars().take(room).collect();
        let gap = room - shown.chars().count();

        let line = Line::styled(format!("{shown}{}{version}", " ".repeat(gap)), style);
        Paragraph::new(line).style(style).render(inner, buf);
    }
}
