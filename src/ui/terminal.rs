use crate::app::App;
use crate::ui::command::event_to_app_event;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the last frame is flushed first
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Block on terminal input until the app quits, redrawing after each change.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        info!("session started");
        while app.is_running() {
            if app.consume_dirty() {
                self.render_frame(app)?;
            }

            match event::read()? {
                Event::Resize(width, height) => {
                    debug!("resized to {}x{}", width, height);
                    self.render_frame(app)?;
                }
                other => app.handle_event(event_to_app_event(other, app.mode())),
            }
        }
        info!("session ended");
        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &render_state))?;
        Ok(())
    }
}
