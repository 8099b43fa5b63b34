//! Registration screen: the student form, its preview, and alerts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;

use crate::form::{FormView, RegistrationForm};
use crate::model::{FieldId, FieldKind, FormState};
use crate::preview::{DecodeOutcome, SelectedFile};
use crate::tui::action::Action;
use crate::tui::widgets::{draw_alert, draw_form, draw_preview};

/// State for the registration screen.
#[derive(Debug)]
pub struct RegistrationScreen {
    form: RegistrationForm<FormState>,
}

impl RegistrationScreen {
    /// Creates a blank registration form; image decodes report to `outcomes`.
    pub fn new(outcomes: UnboundedSender<DecodeOutcome>) -> Self {
        Self {
            form: RegistrationForm::new(FormState::new(), outcomes),
        }
    }

    /// Returns the form state for rendering.
    pub fn state(&self) -> &FormState {
        self.form.view()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// While an alert is showing, any key only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.form.view_mut().dismiss_alert().is_some() {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                self.form.reset();
            }
            return Action::None;
        }

        let focused = self.state().focused();
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => self.form.view_mut().focus_next(),
            KeyCode::BackTab => self.form.view_mut().focus_prev(),
            KeyCode::Enter if focused == FieldId::ProfilePicture => self.select_picture(),
            KeyCode::Enter => {
                self.form.submit();
            }
            KeyCode::Char(' ') if focused.kind() == FieldKind::Checkbox => {
                let checked = self.state().is_checked(focused);
                self.form.view_mut().set_checked(focused, !checked);
                self.form.change(focused);
            }
            KeyCode::Char(ch) => {
                if self.form.view_mut().insert_char(ch) {
                    self.edited(focused);
                }
            }
            KeyCode::Backspace => {
                if self.form.view_mut().delete_char() {
                    self.edited(focused);
                }
            }
            _ => {}
        }
        Action::None
    }

    /// Applies a finished image decode.
    pub fn finish_decode(&mut self, outcome: DecodeOutcome) -> bool {
        self.form.finish_decode(outcome)
    }

    /// Fires the input event for a text field whose value just changed.
    ///
    /// Typing a path into the file input does not select it; Enter does.
    fn edited(&mut self, id: FieldId) {
        if id.kind() != FieldKind::File {
            self.form.input(id);
        }
    }

    /// Selects the typed path as the profile picture.
    fn select_picture(&mut self) {
        let path = self.state().value(FieldId::ProfilePicture).trim().to_string();
        let file = (!path.is_empty()).then(|| SelectedFile::probe(path));
        self.form.view_mut().choose_file(file);
        self.form.change(FieldId::ProfilePicture);
    }
}

/// Renders the registration screen.
#[mutants::skip]
pub fn draw_registration(screen: &RegistrationScreen, frame: &mut Frame, area: Rect) {
    let state = screen.state();
    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [form_area, preview_area] =
        Layout::horizontal([Constraint::Min(40), Constraint::Length(28)]).areas(body_area);
    let [preview_area, _] =
        Layout::vertical([Constraint::Length(16), Constraint::Min(0)]).areas(preview_area);

    draw_form(state, frame, form_area);
    draw_preview(state.preview(), frame, preview_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Space: toggle  Enter: submit (select on picture)  Ctrl+R: reset  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(message) = state.alert_message() {
        draw_alert(message, frame, area);
    }
}
