use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal events on a background thread and forwards them to the
/// async UI loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
    _reader: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn spawn(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let reader_stop = Arc::clone(&stop);

        let reader = thread::spawn(move || {
            while !reader_stop.load(Ordering::Relaxed) {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                        Ok(_) => continue,
                        Err(err) => {
                            tracing::warn!(error = %err, "Terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => AppEvent::Tick,
                    Err(err) => {
                        tracing::warn!(error = %err, "Terminal event poll failed");
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            stop,
            _reader: reader,
        }
    }

    /// Next event, or `None` once the reader thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
