use std::ops::{Add, Mul, Neg};

use crate::core::grid::Grid;
use crate::core::history::HistoryLog;
use crate::core::models::{Action, Cell, Direction, GridState, Position};
use crate::core::GameError;

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        Some(match symbol {
            ' ' => Cell::Empty,
            '@' => Cell::Player,
            '+' => Cell::PlayerOnTarget,
            '.' => Cell::Target,
            '*' => Cell::CrateOnTarget,
            '$' => Cell::Crate,
            '#' => Cell::Wall,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
            Cell::Target => '.',
            Cell::CrateOnTarget => '*',
            Cell::Crate => '$',
            Cell::Wall => '#',
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnTarget)
    }

    pub fn is_crate(&self) -> bool {
        matches!(self, Cell::Crate | Cell::CrateOnTarget)
    }

    /// Floor the player can step onto or a crate can be pushed onto.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Target)
    }

    pub fn has_target(&self) -> bool {
        matches!(self, Cell::Target | Cell::PlayerOnTarget | Cell::CrateOnTarget)
    }

    /// What is left behind once the player or crate standing here moves away.
    pub fn vacated(&self) -> Cell {
        if self.has_target() { Cell::Target } else { Cell::Empty }
    }

    /// The player standing on this cell's floor.
    pub fn with_player(&self) -> Cell {
        if self.has_target() { Cell::PlayerOnTarget } else { Cell::Player }
    }

    /// A crate resting on this cell's floor.
    pub fn with_crate(&self) -> Cell {
        if self.has_target() { Cell::CrateOnTarget } else { Cell::Crate }
    }
}

impl Position {
    pub fn new(column: i32, row: i32) -> Position {
        Position { column, row }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            column: self.column + rhs.column,
            row: self.row + rhs.row,
        }
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, rhs: i32) -> Position {
        Position {
            column: self.column * rhs,
            row: self.row * rhs,
        }
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        self * -1
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn offset(&self) -> Position {
        match self {
            Direction::Up => Position { column: 0, row: -1 },
            Direction::Down => Position { column: 0, row: 1 },
            Direction::Left => Position { column: -1, row: 0 },
            Direction::Right => Position { column: 1, row: 0 },
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Action {
    pub fn step(direction: Direction) -> Action {
        Action { direction, push: false }
    }

    pub fn push(direction: Direction) -> Action {
        Action { direction, push: true }
    }

    /// LURD notation: lower case for a step, upper case for a push.
    pub fn code(&self) -> char {
        let code = match self.direction {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        };
        if self.push { code.to_ascii_uppercase() } else { code }
    }

    pub fn from_code(code: char) -> Option<Action> {
        let direction = match code.to_ascii_lowercase() {
            'u' => Direction::Up,
            'd' => Direction::Down,
            'l' => Direction::Left,
            'r' => Direction::Right,
            _ => return None,
        };
        Some(Action {
            direction,
            push: code.is_ascii_uppercase(),
        })
    }
}

impl GridState {
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell_at(&self, pos: Position) -> Result<Cell, GameError> {
        self.grid.cell_at(pos)
    }

    /// Direct overwrite. Keeping one player and a constant crate count is up to the caller.
    pub fn set_cell_at(&mut self, pos: Position, value: Cell) -> Result<(), GameError> {
        self.grid.set_cell_at(pos, value)
    }

    pub fn player_position(&self) -> Result<Position, GameError> {
        self.grid.player_position()
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    pub fn crate_count(&self) -> usize {
        self.grid.count(Cell::is_crate)
    }

    pub fn target_count(&self) -> usize {
        self.grid.count(Cell::has_target)
    }
}
