use crate::core::{Cell, Direction, GameError, Grid};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Builds a grid from a level drawn over several lines, padding short rows with floor.
/// Blank leading and trailing lines are ignored.
pub fn parse_level(s: &str) -> Result<Grid, GameError> {
    let lines: Vec<&str> = s
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let lines = match lines.iter().rposition(|line| !line.trim().is_empty()) {
        Some(last) => &lines[..=last],
        None => &[][..],
    };
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut cells = String::new();
    for line in lines {
        cells.push_str(line);
        // Pad row to max width with floor
        for _ in line.chars().count()..width {
            cells.push(Cell::Empty.symbol());
        }
    }
    Grid::parse(width, &cells)
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

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let status = format!(
            "Level: {}   Steps: {}   Pushes: {}",
            state.game.level(),
            state.game.step_count(),
            state.game.history().push_count(),
        );
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[0]);

        let game_text = render_grid_to_string(state.game.grid());
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[1]);

        let instructions = match (state.solved, state.has_next) {
            (true, true) => "Solved! Next level? (y = next, n = restart)",
            (true, false) => "All levels solved! (y = back to level 1, n = restart)",
            _ => "Arrows/WASD move, U undo, R restart, Q quit",
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(outcome) = &state.last_outcome {
            format!("{} | Last: {:?}", instructions, outcome)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for c in row {
            result.push(c.symbol());
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Restart,
    Confirm,
    Decline,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConsoleInput::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::Decline,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
