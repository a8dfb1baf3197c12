//! Terminal runtime: renders the session and feeds it crossterm input.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseButton, MouseEventKind};
use log::{debug, info};
use pagedom::Terminal;

use crate::app::App;
use crate::error::RuntimeError;
use crate::session::{Control, Session};

/// Runtime - the main entry point for running a page in the terminal.
#[derive(Debug, Default)]
pub struct Runtime {}

impl Runtime {
    pub fn new() -> Self {
        Self {}
    }

    /// Run the app until a quit keybind fires.
    pub fn run<A: App>(self, app: A) -> Result<(), RuntimeError> {
        let mut session = Session::new(app);
        let poll_interval = session.config().poll_interval;
        let mut terminal = Terminal::new()?;

        let mut size = terminal.size()?;
        let mut needs_render = true;

        loop {
            let current = terminal.size()?;
            if current != size {
                size = current;
                needs_render = true;
            }

            if needs_render {
                let frame = session.view(size.0, size.1);
                terminal.draw(&frame, &session.palette())?;
                needs_render = false;
            }

            for event in terminal.poll(poll_interval)? {
                match event {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        needs_render = true;
                        if session.handle_key(key.code.into(), key.modifiers.into())? == Control::Quit {
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                    CrosstermEvent::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            // Earlier events in this batch may have moved rows
                            let frame = session.view(size.0, size.1);
                            if let Some(target) = frame.target_at(mouse.row) {
                                debug!("Pointer down on '{}'", target);
                                needs_render = true;
                                session.pointer_down(target)?;
                            }
                        }
                        MouseEventKind::ScrollUp => needs_render |= session.scroll_by(-1),
                        MouseEventKind::ScrollDown => needs_render |= session.scroll_by(1),
                        _ => {}
                    },
                    CrosstermEvent::Resize(width, height) => {
                        size = (width, height);
                        needs_render = true;
                    }
                    _ => {}
                }
            }
        }
    }
}
