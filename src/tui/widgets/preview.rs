//! Image preview area.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::preview::Thumbnail;

/// Renders the preview box; empty when there is no thumbnail.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_preview(preview: Option<&Thumbnail>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(thumbnail) = preview else {
        return;
    };
    let art_rows = u32::from(inner.height.saturating_sub(1));
    let mut lines: Vec<Line> = thumbnail
        .render_ascii(u32::from(inner.width), art_rows)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(
        Line::from(format!("{}x{}", thumbnail.width(), thumbnail.height()))
            .style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::preview::png_bytes;

    fn render(preview: Option<&Thumbnail>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal
            .draw(|frame| draw_preview(preview, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn empty_preview_shows_only_frame() {
        let output = render(None);
        assert!(output.contains("Preview"));
        assert!(!output.contains('@'));
    }

    #[test]
    fn thumbnail_shows_dimensions() {
        let thumb = Thumbnail::from_bytes(&png_bytes(200, 100)).unwrap();
        let output = render(Some(&thumb));
        assert!(output.contains("100x50"));
    }
}
