use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if let Some(intent) = key_to_intent(key) {
        app.dispatch_counter(intent);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn key_to_intent(key: KeyEvent) -> Option<CounterIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(CounterIntent::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(CounterIntent::Decrement)
        }
        KeyCode::Char('0') | KeyCode::Char('x') | KeyCode::Char('X') => Some(CounterIntent::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(CounterIntent::Activate),
        KeyCode::Right | KeyCode::Tab => Some(CounterIntent::FocusNext),
        KeyCode::Left | KeyCode::BackTab => Some(CounterIntent::FocusPrevious),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
