use crate::config::ConfigStore;
use crate::reading::{HttpReadingSource, ReadingSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the dashboard until the user quits.
///
/// The UI loop owns the main thread; the reading fetch runs on `runtime`.
pub fn run(config: ConfigStore, runtime: Handle) -> io::Result<()> {
    let settings = config.get();
    let source: Arc<dyn ReadingSource> =
        Arc::new(HttpReadingSource::new(&settings.reading).map_err(io::Error::other)?);
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, source, runtime, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.mount_reading();
    tracing::info!(url = %settings.reading.url, "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Reading(outcome)) => app.on_reading(outcome),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.unmount_reading();
    drop(guard);
    tracing::info!("Dashboard stopped");
    Ok(())
}
