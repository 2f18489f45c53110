use std::io;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Synchronous UI loop: draw, wait for the next event, apply it.
///
/// Resolved API calls arrive on the same channel as key events, so the
/// store only ever mutates on this thread.
pub fn run(
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
    shutdown: &ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Ok(AppEvent::Tick) => {}
            // ratatui reconciles the new size on the next draw.
            Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
