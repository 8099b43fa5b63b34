//! Modal acknowledgment dialog.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Returns a `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders `message` in a dialog over the middle of `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(message: &str, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 50, 7);
    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from("Press any key to continue").style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_larger_area() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered(area, 50, 7);
        assert_eq!((rect.x, rect.width, rect.height), (25, 50, 7));
        assert!((11..=12).contains(&rect.y), "y = {}", rect.y);
    }

    #[test]
    fn centered_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered(area, 50, 7);
        assert_eq!((rect.width, rect.height), (20, 4));
    }
}
