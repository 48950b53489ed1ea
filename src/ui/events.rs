use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::ui::remote::ReadingOutcome;

/// Everything the UI loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// A reading fetch finished. Tagged with its mount id so outcomes of
    /// an earlier mount can be ignored.
    Reading(ReadingOutcome),
}

/// Owns the input thread and the channel every producer writes into.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let event_tx = tx.clone();
        let thread_stop = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, thread_stop, tick_rate));
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx, tx, stop }
    }

    /// Channel-only handler with no input thread. Events arrive solely
    /// through `sender()`.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            tx,
            stop: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn input_loop(tx: mpsc::Sender<AppEvent>, stop: Arc<AtomicBool>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        // Short poll so the stop flag is noticed promptly.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!("Terminal read failed: {}", err);
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!("Terminal poll failed: {}", err);
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
