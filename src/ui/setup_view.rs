use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{SetupForm, FORM_LABELS, MENU_ITEMS};
use super::grid_widget;
use crate::grid::Grid;

pub fn render_setup(frame: &mut Frame, form: &SetupForm, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Form
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, "Grid Setup", chunks[0]);
    render_form(frame, form, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(
        frame,
        "Tab/↓: Next field  |  ↑: Previous  |  Enter: Accept  |  Esc: Quit",
        chunks[3],
    );
}

pub fn render_menu(
    frame: &mut Frame,
    template: Option<&Grid>,
    selected: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Grid preview
            Constraint::Length(5), // Menu
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, "Meander", chunks[0]);
    if let Some(grid) = template {
        grid_widget::render_grid(frame, grid, chunks[1]);
    }
    render_items(frame, selected, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(
        frame,
        "↑/↓: Select  |  Enter: Go  |  1-3: Shortcuts  |  E: Edit grid  |  Q: Quit",
        chunks[4],
    );
}

fn render_form(frame: &mut Frame, form: &SetupForm, area: ratatui::layout::Rect) {
    let mut lines = vec![Line::from("")];
    for (i, label) in FORM_LABELS.iter().enumerate() {
        if i == form.focus {
            lines.push(Line::from(Span::styled(
                format!("{:>8}: {}_", label, form.values[i]),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("{:>8}: {}", label, form.values[i])));
        }
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Dimensions and endpoints"),
    );
    frame.render_widget(widget, area);
}

fn render_items(frame: &mut Frame, selected: usize, area: ratatui::layout::Rect) {
    let mut lines = Vec::new();
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        if i == selected {
            lines.push(Line::from(Span::styled(
                format!("▶ {} {}", i + 1, item),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {} {}", i + 1, item)));
        }
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_header(frame: &mut Frame, title: &str, area: ratatui::layout::Rect) {
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
