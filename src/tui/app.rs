use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

use crate::preview::DecodeOutcome;

use super::action::Action;
use super::error::AppError;
use super::screens::{RegistrationScreen, draw_registration};

/// How long to wait for a key before checking for finished decodes.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level application state.
pub struct App {
    screen: RegistrationScreen,
    decodes: UnboundedReceiver<DecodeOutcome>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` showing a blank registration form.
    ///
    /// Image decodes are spawned on the ambient tokio runtime, so the
    /// caller must be inside one when keys are handled.
    pub fn new() -> Self {
        let (tx, decodes) = mpsc::unbounded_channel();
        Self {
            screen: RegistrationScreen::new(tx),
            decodes,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll key → dispatch → apply decodes → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.drain_decodes();
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_registration(&self.screen, frame, frame.area());
    }

    /// Handles a key event. Only key presses are acted on.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.screen.handle_key(key) {
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Applies every decode outcome that has arrived since the last call.
    pub fn drain_decodes(&mut self) {
        while let Ok(outcome) = self.decodes.try_recv() {
            let token = outcome.token;
            let applied = self.screen.finish_decode(outcome);
            debug!(?token, applied, "decode outcome received");
        }
    }

    /// Returns the registration screen.
    pub fn screen(&self) -> &RegistrationScreen {
        &self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
