use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT, SIGQUIT, SIGHUP)
    Shutdown,
}

/// Reads terminal input on a dedicated thread and forwards it to the main loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll so the shutdown flag is checked frequently
                let ready = match event::poll(poll_interval.min(Duration::from_millis(50))) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::error!(error = %err, "Polling terminal input failed");
                        break;
                    }
                };
                if !ready {
                    continue;
                }

                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Paste(text)) => AppEvent::Paste(text),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Reading terminal input failed");
                        break;
                    }
                };
                if tx.send(forwarded).is_err() {
                    break;
                }
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to spawn input thread");
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
