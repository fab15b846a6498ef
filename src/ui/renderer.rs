use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::TITLE;
use crate::game::{Game, Phase};
use crate::input::InputState;

const PANEL_WIDTH: u16 = 20;

pub fn ui(f: &mut Frame, game: &Game, input: &InputState) {
    let size = f.size();
    let cells = game.board().size() as u16;

    let board_height = cells + 2; // rows + borders
    let board_width = cells * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height.max(12)),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PANEL_WIDTH),
            Constraint::Length(board_width),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let panel_area = horizontal_chunks[1];
    let board_area = Rect { height: board_height.min(horizontal_chunks[2].height), ..horizontal_chunks[2] };

    render_board(f, game, board_area);
    render_controls(f, game, input, panel_area);

    if game.is_terminal() {
        render_outcome_overlay(f, game, size);
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let board_lines: Vec<Line> = game
        .board()
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&index| {
                        let color = game.palette_color(index).unwrap_or(Color::Reset);
                        Span::styled("██", Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title(TITLE));

    f.render_widget(board_widget, area);
}

fn render_controls(f: &mut Frame, game: &Game, input: &InputState, area: Rect) {
    // One button per palette entry, numbered for the digit keys
    let buttons: Vec<Span> = game
        .palette()
        .colors()
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let style = if index == input.selected {
                Style::default().fg(color).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(color)
            };
            Span::styled(format!("{}", index + 1), style)
        })
        .flat_map(|label| [label, Span::raw(" ")])
        .collect();

    let origin = game.palette_color(game.cell(0, 0)).unwrap_or(Color::Reset);

    let text = vec![
        Line::from(vec![Span::styled(game.turns_label(), Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(buttons),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Current "), Span::styled("██", Style::default().fg(origin))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("1-6 / ←→ Enter")]),
        Line::from(vec![Span::raw("N  New Game")]),
        Line::from(vec![Span::raw("Q  Quit")]),
    ];

    let controls_widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(controls_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_outcome_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(40, 30, area);
    f.render_widget(Clear, popup_area);

    let color = if game.phase() == Phase::Won { Color::Green } else { Color::Red };
    let message = game.outcome_message().unwrap_or_default();

    let text = vec![
        Line::from(vec![Span::styled(message, Style::default().fg(color))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("N  New Game")]),
    ];

    let outcome_widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(outcome_widget, popup_area);
}
