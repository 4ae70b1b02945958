use std::fmt;

use crate::core::error::GameError;
use crate::core::models::{Cell, Position};

/// Row-major cell storage. The height is derived from the cell count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, cells: Vec<Cell>) -> Result<Grid, GameError> {
        if width == 0 || cells.len() % width != 0 {
            return Err(GameError::InvalidWidth { width, len: cells.len() });
        }
        Ok(Grid { width, cells })
    }

    /// Reads a flattened level string, one symbol per cell.
    pub fn parse(width: usize, level: &str) -> Result<Grid, GameError> {
        let cells = level
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Cell::from_symbol(symbol).ok_or(GameError::InvalidSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(width, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.column >= 0
            && pos.row >= 0
            && (pos.column as usize) < self.width
            && (pos.row as usize) < self.height()
    }

    fn index_of(&self, pos: Position) -> Result<usize, GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                column: pos.column,
                row: pos.row,
            });
        }
        Ok(pos.row as usize * self.width + pos.column as usize)
    }

    pub fn cell_at(&self, pos: Position) -> Result<Cell, GameError> {
        self.index_of(pos).map(|index| self.cells[index])
    }

    /// Lookup used while resolving a move: anything past the edge blocks like a wall.
    pub fn neighbor(&self, pos: Position) -> Cell {
        self.cell_at(pos).unwrap_or(Cell::Wall)
    }

    pub fn set_cell_at(&mut self, pos: Position, value: Cell) -> Result<(), GameError> {
        let index = self.index_of(pos)?;
        self.cells[index] = value;
        Ok(())
    }

    pub fn player_position(&self) -> Result<Position, GameError> {
        let index = self
            .cells
            .iter()
            .position(|&c| c == Cell::Player)
            .or_else(|| self.cells.iter().position(|&c| c == Cell::PlayerOnTarget))
            .ok_or(GameError::NoPlayerFound)?;
        Ok(Position {
            column: (index % self.width) as i32,
            row: (index / self.width) as i32,
        })
    }

    /// Solved once no bare crate is left. Surplus targets are not counted.
    pub fn is_solved(&self) -> bool {
        !self.cells.contains(&Cell::Crate)
    }

    pub fn count(&self, pred: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|&c| pred(c)).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.symbol())?;
            }
        }
        Ok(())
    }
}
