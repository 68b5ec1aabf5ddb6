use crate::error::{BoardError, MoveError};
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2, for display
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A grid of cells, row 0 at the bottom and column 0 on the left
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    width: usize,
    height: usize,
}

impl Board {
    /// Creates an empty board of the default `WIDTH` x `HEIGHT`
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; WIDTH * HEIGHT],
            width: WIDTH,
            height: HEIGHT,
        }
    }

    /// Creates an empty board of the given dimensions
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        // the cell vector must stay within isize::MAX bytes
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or(BoardError::TooLarge { width, height })?;
        Ok(Self {
            cells: vec![Cell::Empty; size],
            width,
            height,
        })
    }

    /// Empties every cell, keeping the dimensions
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.height && column < self.width {
            Some(column + self.width * row)
        } else {
            None
        }
    }

    /// The cell at (row, column), or `None` outside the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// The player occupying (row, column), `None` if empty or outside the board
    pub fn owner(&self, row: usize, column: usize) -> Option<Player> {
        self.get(row, column).and_then(|cell| cell.owner())
    }

    /// The lowest empty row of a column, or `None` if the column is full
    pub fn first_empty_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        if column >= self.width {
            return Err(MoveError::OutOfRange {
                column,
                width: self.width,
            });
        }
        Ok((0..self.height).find(|&row| self.cells[column + self.width * row].is_empty()))
    }

    pub fn is_column_full(&self, column: usize) -> Result<bool, MoveError> {
        Ok(self.first_empty_row(column)?.is_none())
    }

    /// Places a tile of `player` at (row, column)
    ///
    /// Gravity is not enforced here, callers resolve the row with
    /// [`Board::first_empty_row`]. An occupied cell is never overwritten.
    pub fn occupy(&mut self, row: usize, column: usize, player: Player) -> Result<(), MoveError> {
        let idx = self
            .index(row, column)
            .ok_or(MoveError::CellOutOfRange { row, column })?;
        if !self.cells[idx].is_empty() {
            return Err(MoveError::CellOccupied { row, column });
        }
        self.cells[idx] = player.into();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
