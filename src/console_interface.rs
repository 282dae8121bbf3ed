use crate::core::{Cell, Direction, GameState, INPUT_POLL_MILLIS, MoveOutcome};
use crate::models::GameRenderState;
use crate::play::PlayAction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde_json::json;
use std::io;

/// Turns a plain-text level (one row per line, cell codes `W . P B T *`) into
/// the encoded layout the engine and validator read. Blank lines are skipped.
pub fn parse_level(s: &str) -> String {
    let grid: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();
    let width = grid.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    json!({
        "width": width,
        "height": grid.len(),
        "grid": grid,
    })
    .to_string()
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Wall => Color::DarkGray,
        Cell::Floor => Color::Gray,
        Cell::Player => Color::Yellow,
        Cell::Box => Color::Magenta,
        Cell::Target => Color::Green,
        Cell::BoxOnTarget => Color::LightGreen,
    }
}

fn grid_lines(game: &GameState) -> Vec<Line<'static>> {
    game.grid
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&c| Span::styled(c.code().to_string(), Style::default().fg(cell_color(c))))
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn status_text(state: &GameRenderState) -> String {
    let game = &state.game;
    let mut status = format!(
        "Moves: {} | Targets: {}/{}",
        game.moves, game.boxes_on_target, game.total_targets
    );

    if state.won {
        status.push_str(" | Level complete! Press any key to quit.");
    } else {
        status.push_str(" | Arrows/WASD move, R reset, Q quit");
    }

    if let Some(MoveOutcome::Rejected(reason)) = &state.last_outcome {
        status.push_str(&format!(" | Blocked: {:?}", reason));
    }
    if let Some(message) = &state.message {
        status.push_str(&format!(" | {}", message));
    }
    status
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let body = if state.game.is_empty() {
            vec![Line::from("No board: the layout could not be loaded.")]
        } else {
            grid_lines(&state.game)
        };
        let game_paragraph = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(state.title.clone()))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_text(state))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for row in &game.grid {
        for c in row {
            result.push(c.code());
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Play(PlayAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn key_to_input(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Play(PlayAction::Reset),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::Play(PlayAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::Play(PlayAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::Play(PlayAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::Play(PlayAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(INPUT_POLL_MILLIS))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(key_to_input(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
