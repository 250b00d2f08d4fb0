use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::grid::{Cell, Grid};

/// Render a grid as a bordered character table, one styled glyph per cell,
/// centered in the given area.
pub fn render_grid(frame: &mut Frame, grid: &Grid, area: Rect) {
    let border = border_line(grid.width());
    let mut lines = Vec::new();

    for y in 0..grid.height() {
        lines.push(border.clone());

        let mut spans = Vec::new();
        for x in 0..grid.width() {
            spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
            let (glyph, color) = match grid.get(x, y) {
                Cell::Blank => (" ", Color::DarkGray),
                Cell::Start => ("A", Color::Green),
                Cell::End => ("B", Color::Red),
                Cell::Path => ("x", Color::Cyan),
            };
            spans.push(Span::styled(glyph, Style::default().fg(color)));
        }
        spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(spans));
    }
    lines.push(border);

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn border_line(width: usize) -> Line<'static> {
    let mut text = String::with_capacity(2 * width + 1);
    for _ in 0..width {
        text.push_str("+-");
    }
    text.push('+');
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
