use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::grid_widget;
use crate::grid::Grid;

pub fn render_walk(frame: &mut Frame, walked: Option<&Grid>, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Grid
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, "Random Walk".to_string(), chunks[0]);
    if let Some(grid) = walked {
        grid_widget::render_grid(frame, grid, chunks[1]);
    }
    render_message(frame, message, chunks[2]);
    render_controls(
        frame,
        "R: Walk again  |  M: Menu  |  N: New grid  |  Q: Quit",
        chunks[3],
    );
}

pub fn render_solutions(
    frame: &mut Frame,
    solutions: &[Grid],
    selected: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Grid
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = format!("All Valid Paths  ({} of {})", selected + 1, solutions.len());
    render_header(frame, title, chunks[0]);
    if let Some(grid) = solutions.get(selected) {
        grid_widget::render_grid(frame, grid, chunks[1]);
    }
    render_message(frame, message, chunks[2]);
    render_controls(
        frame,
        "←/→: Browse paths  |  M: Menu  |  N: New grid  |  Q: Quit",
        chunks[3],
    );
}

fn render_header(frame: &mut Frame, title: String, area: ratatui::layout::Rect) {
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, text: &str, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}
