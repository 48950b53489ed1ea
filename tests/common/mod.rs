//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use counterdash::config::{Config, ConfigStore};
use counterdash::reading::{FetchError, ReadingSource};
use counterdash::ui::app::App;
use counterdash::ui::events::{AppEvent, EventHandler};
use counterdash::ui::remote::ReadingOutcome;
use ratatui::buffer::Buffer;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Canned behaviour for `FakeSource`.
#[derive(Debug, Clone)]
pub enum FakeReading {
    Value(f64),
    Status(u16),
}

/// In-process reading source that counts calls.
pub struct FakeSource {
    reading: FakeReading,
    delay: Duration,
    // Per-call overrides of `delay`, indexed by call number.
    call_delays: Vec<Duration>,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(reading: FakeReading) -> Self {
        Self {
            reading,
            delay: Duration::ZERO,
            call_delays: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_call_delays(mut self, delays: Vec<Duration>) -> Self {
        self.call_delays = delays;
        self
    }

    /// Shared call counter, usable after the source moves into an `Arc`.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ReadingSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self) -> Result<f64, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.call_delays.get(call).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match self.reading {
            FakeReading::Value(value) => Ok(value),
            FakeReading::Status(status) => Err(FetchError::Status { status }),
        }
    }
}

/// App wired to a fake source, a detached event channel and its own runtime.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub calls: Arc<AtomicUsize>,
    // Dropped last so in-flight tasks can still be aborted by the app.
    pub runtime: Runtime,
}

impl Harness {
    pub fn new(source: FakeSource) -> Self {
        Self::with_config(Config::default(), source)
    }

    pub fn with_config(config: Config, source: FakeSource) -> Self {
        let runtime = Runtime::new().expect("Failed to build runtime");
        let events = EventHandler::detached();
        let calls = source.calls();
        let store = ConfigStore::new(config, PathBuf::from("/tmp/counterdash-test.toml"));
        let app = App::new(store, Arc::new(source), runtime.handle().clone(), events.sender());
        Self {
            app,
            events,
            calls,
            runtime,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wait for the next reading event without applying it.
    pub fn take_reading(&mut self, timeout: Duration) -> Option<ReadingOutcome> {
        loop {
            match self.events.next(timeout) {
                Ok(AppEvent::Reading(outcome)) => return Some(outcome),
                Ok(_) => continue,
                Err(_) => return None,
            }
        }
    }

    /// Wait for the next reading event and feed it to the app.
    pub fn pump_reading(&mut self, timeout: Duration) -> bool {
        loop {
            match self.events.next(timeout) {
                Ok(AppEvent::Reading(outcome)) => {
                    self.app.on_reading(outcome);
                    return true;
                }
                Ok(_) => continue,
                Err(_) => return false,
            }
        }
    }
}

/// Flatten a buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(needle))
}
