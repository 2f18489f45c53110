use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::api::ApiEvent;
use crate::shutdown::ShutdownHandle;

/// Everything the UI loop reacts to: terminal input, ticks, and resolved
/// API calls coming back from the worker.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Api(ApiEvent),
}

/// Reader thread forwarding terminal events and ticks over a channel.
///
/// The sender side is cloneable so the API worker can inject its results
/// into the same stream.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll timeout keeps the shutdown flag fresh.
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("terminal event read failed: {err}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal event poll failed: {err}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
