use crate::config::{Config, ConfigStore};
use crate::reading::ReadingSource;
use crate::ui::counter::{control_rects, CounterIntent, CounterReducer, CounterState};
use crate::ui::events::AppEvent;
use crate::ui::layout::counter_rect;
use crate::ui::mvi::Reducer;
use crate::ui::remote::{ReadingMount, ReadingOutcome, RemoteIntent, RemoteReducer, RemoteValueState};
use ratatui::layout::{Position, Rect};
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The dashboard: a remote value display above a counter widget.
///
/// The two components share nothing. Counter intents never touch the
/// reading, and a reading outcome never touches the counter.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    /// Counter widget state (MVI pattern).
    counter: CounterState,
    counter_title: String,
    /// Remote value state (MVI pattern).
    reading: RemoteValueState,
    /// Fetch task of the current mount (resource, managed outside MVI).
    reading_mount: Option<ReadingMount>,
    next_mount_id: u64,
    source: Arc<dyn ReadingSource>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: ConfigStore,
        source: Arc<dyn ReadingSource>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        let counter_title = config.get().counter.title;
        Self {
            should_quit: false,
            size: None,
            config,
            counter: CounterState::default(),
            counter_title,
            reading: RemoteValueState::default(),
            reading_mount: None,
            next_mount_id: 1,
            source,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> Config {
        self.config.get()
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn counter_title(&self) -> &str {
        &self.counter_title
    }

    pub fn reading(&self) -> &RemoteValueState {
        &self.reading
    }

    /// Id of the live mount, if the display is mounted.
    pub fn reading_mount_id(&self) -> Option<u64> {
        self.reading_mount.as_ref().map(ReadingMount::id)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Counter widget (MVI pattern)
    // ========================================================================

    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
        tracing::trace!(?intent, value = self.counter.value(), "Counter updated");
    }

    /// Left click at a screen cell. Presses the control under it, if any.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let panel = counter_rect(Rect::new(0, 0, cols, rows));
        let hit = control_rects(panel)
            .into_iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)));

        match hit {
            Some((control, _)) => {
                self.dispatch_counter(CounterIntent::Press(control));
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Remote value display (MVI pattern)
    // ========================================================================

    /// Mount the display and issue its single fetch.
    ///
    /// A no-op while already mounted, so redraws and repeated calls never
    /// issue a second request for the same mount.
    pub fn mount_reading(&mut self) {
        if self.reading_mount.is_some() {
            return;
        }

        let id = self.next_mount_id;
        self.next_mount_id += 1;
        self.reading = RemoteValueState::default();

        let events = self.events.clone();
        let mount = ReadingMount::start(id, &self.runtime, Arc::clone(&self.source), move |outcome| {
            // Receiver gone means the UI loop has exited; nothing to update.
            let _ = events.send(AppEvent::Reading(outcome));
        });
        self.reading_mount = Some(mount);
    }

    /// Tear the display down. Aborts the fetch if still in flight.
    pub fn unmount_reading(&mut self) {
        if self.reading_mount.take().is_some() {
            self.reading = RemoteValueState::default();
        }
    }

    /// Apply a fetch outcome. Outcomes from any mount other than the live
    /// one are discarded.
    pub fn on_reading(&mut self, outcome: ReadingOutcome) {
        if self.reading_mount_id() != Some(outcome.mount) {
            tracing::debug!(mount = outcome.mount, "Discarding reading from stale mount");
            return;
        }
        dispatch_mvi!(self, reading, RemoteReducer, RemoteIntent::from(outcome.result));
    }
}
