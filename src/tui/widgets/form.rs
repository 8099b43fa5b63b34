//! Registration form widget: one bordered row per visible field.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldKind, FormState, Validity};

/// Height of one field row, borders included.
const ROW_HEIGHT: u16 = 3;

/// Border colour for a field.
///
/// Validity wins over focus so a focused invalid field still reads as red.
pub fn border_color(field: &Field, focused: bool) -> Color {
    match field.validity {
        Validity::Valid => Color::Green,
        Validity::Invalid => Color::Red,
        Validity::Unvalidated if focused => Color::Yellow,
        Validity::Unvalidated => Color::DarkGray,
    }
}

/// Text shown inside a field's box.
fn field_line(field: &Field, focused: bool) -> Line<'_> {
    let mut spans = match field.id.kind() {
        FieldKind::Checkbox => {
            let mark = if field.checked { "[x] " } else { "[ ] " };
            vec![Span::raw(mark), Span::raw(field.id.label())]
        }
        _ => vec![Span::raw(field.value.as_str())],
    };
    if focused && field.id.is_text() {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

/// Renders every visible field of `state` within `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(state: &FormState, frame: &mut Frame, area: Rect) {
    let visible: Vec<&Field> = state.fields().iter().filter(|f| f.visible).collect();
    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (field, row) in visible.iter().zip(rows.iter()) {
        let focused = field.id == state.focused();
        let title = match field.id.kind() {
            FieldKind::Checkbox => String::new(),
            _ => field.id.label().to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(field, focused)));
        frame.render_widget(Paragraph::new(field_line(field, focused)).block(block), *row);

        // Message sits on the bottom border of the row.
        if !field.message.is_empty() {
            let message = Paragraph::new(Span::styled(
                field.message.as_str(),
                Style::default().fg(Color::Red),
            ));
            let message_area = Rect {
                x: row.x + 2,
                y: row.y + ROW_HEIGHT.saturating_sub(1),
                width: row.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(message, message_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::form::FormView;
    use crate::model::FieldId;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(state: &FormState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 33)).unwrap();
        terminal
            .draw(|frame| draw_form(state, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    mod colors {
        use super::*;

        #[test]
        fn validity_decides_color() {
            let mut field = Field::new(FieldId::Email);
            field.validity = Validity::Valid;
            assert_eq!(border_color(&field, true), Color::Green);
            field.validity = Validity::Invalid;
            assert_eq!(border_color(&field, true), Color::Red);
        }

        #[test]
        fn unvalidated_uses_focus() {
            let field = Field::new(FieldId::Email);
            assert_eq!(border_color(&field, true), Color::Yellow);
            assert_eq!(border_color(&field, false), Color::DarkGray);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn renders_labels_and_hides_support_details() {
            let output = render(&FormState::new());
            assert!(output.contains("First Name"));
            assert!(output.contains("Postal Code"));
            assert!(output.contains("[ ] I need learning support"));
            assert!(!output.contains("Support Details"));
        }

        #[test]
        fn renders_support_details_when_visible() {
            let mut state = FormState::new();
            state.set_visible(FieldId::SupportDetails, true);
            assert!(render(&state).contains("Support Details"));
        }

        #[test]
        fn renders_values_checks_and_messages() {
            let mut state = FormState::new();
            state.set_value(FieldId::FirstName, "Ada".into());
            state.set_checked(FieldId::Terms, true);
            state.set_message(FieldId::Phone, "Please enter a valid phone number (10 digits)");
            let output = render(&state);
            assert!(output.contains("Ada"));
            assert!(output.contains("[x] I agree"));
            assert!(output.contains("Please enter a valid phone number"));
        }
    }
}
