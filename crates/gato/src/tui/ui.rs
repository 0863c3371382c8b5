//! Stateless UI rendering for the board, menu and status line.

use super::app::App;
use super::layout::{MenuItem, ScreenLayout};
use gato_tictactoe::{Cell, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders one frame from the app state using precomputed geometry.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    draw_menu(frame, layout);

    let title = Paragraph::new(format!("Gato - Tic Tac Toe ({})", app.controller().mode()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    for line in layout.horizontal_lines {
        draw_separator(frame, line);
    }
    for line in layout.vertical_lines {
        draw_separator_vertical(frame, line);
    }
    for index in 0..9 {
        if let Some(pos) = Position::from_index(index) {
            draw_cell(frame, layout.cell(pos), app, pos);
        }
    }

    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, layout.status);
}

fn draw_menu(frame: &mut Frame, layout: &ScreenLayout) {
    let style = Style::default().fg(Color::Black).bg(Color::Gray);
    for (item, area) in MenuItem::ALL.iter().zip(layout.menu) {
        frame.render_widget(Paragraph::new(item.label()).style(style), area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, mark_style) = match app.controller().session().board().cell(pos) {
        Cell::Empty => (" ", Style::default()),
        Cell::X => ("X", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Cell::O => ("O", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    };

    let background = if pos == app.cursor() {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    // Vertically center the mark in the cell.
    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, mark_style)));

    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::White));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::White));
    frame.render_widget(sep, area);
}
