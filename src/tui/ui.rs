//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Board, Cell, Player, Position};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_score(frame, chunks[1], app);
    draw_board(frame, chunks[2], app.session().board(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let sound = if app.is_muted() { "M: Unmute" } else { "M: Mute" };
    let help = Paragraph::new(format!(
        "1-9 or arrows+Enter: Move | R: Restart | {} | Esc: Close | Q: Quit",
        sound
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if let Some(result) = app.result() {
        draw_result(frame, area, result);
    }
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.scoreboard();
    let line = Line::from(vec![
        Span::styled(format!("X: {}", score.x_wins()), mark_style(Player::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", score.o_wins()), mark_style(Player::O)),
        Span::raw("   "),
        Span::styled(format!("Draws: {}", score.draws()), Style::default().fg(Color::Gray)),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, positions);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], board, cursor, pos);
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (player.to_string(), mark_style(player)),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_result(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 36, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "R: Play again   Esc: Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));
    frame.render_widget(paragraph, popup);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::LightRed,
        Player::O => Color::LightGreen,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
