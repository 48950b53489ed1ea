use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::counter::COUNTER_HEIGHT;
use crate::ui::remote::REMOTE_HEIGHT;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the remote value panel (top) and the counter panel.
pub fn dashboard_regions(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(REMOTE_HEIGHT),
            Constraint::Length(COUNTER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);
    (chunks[0], chunks[1])
}

/// Where the counter panel lands on a full screen of `area`.
pub fn counter_rect(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    dashboard_regions(body).1
}
