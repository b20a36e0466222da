//! Board representation and the place/clear primitive

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{Error, Result};

/// Smallest board the game is defined on
pub const MIN_BOARD_SIZE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::ParsePlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// Zero-based (row, column) coordinate of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N board stored in row-major order.
///
/// Every constructor checks the shape, so a `Board` value is always square
/// with `size >= 3`. Cells change only through [`Board::place`] and
/// [`Board::clear`], or through the scoped [`Placement`] the search uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoardTooSmall`] when `size < 3`, or
    /// [`Error::InvalidBoardShape`] when `size * size` overflows.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(Error::BoardTooSmall { size });
        }
        let cell_count = size
            .checked_mul(size)
            .ok_or_else(|| Error::InvalidBoardShape {
                reason: "cell count overflows".to_string(),
                context: format!("{size}x{size}"),
            })?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; cell_count],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, any row length differs from the
    /// number of rows, or the board is smaller than 3×3.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Self::from_rows_with_context(rows, "rows")
    }

    fn from_rows_with_context(rows: Vec<Vec<Cell>>, context: &str) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidBoardShape {
                reason: "board has no rows".to_string(),
                context: context.to_string(),
            });
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(Error::InvalidBoardShape {
                reason: format!("row {index} has {} cells, expected {size}", row.len()),
                context: context.to_string(),
            });
        }

        if size < MIN_BOARD_SIZE {
            return Err(Error::BoardTooSmall { size });
        }

        Ok(Board {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a board from text.
    ///
    /// Rows are separated by `/` or newlines (`"XX./OO./..."`). A single run
    /// of characters is accepted when its length is a perfect square
    /// (`"XX.OO...."`). Whitespace is ignored; `.`, `_` and `-` are empty
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown characters or a non-square layout.
    pub fn from_string(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let rows = match rows.as_slice() {
            [single] => Self::split_square(single, s)?,
            _ => rows,
        };

        let mut position = 0;
        let mut parsed = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cells = Vec::with_capacity(row.len());
            for c in row {
                let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: s.to_string(),
                })?;
                cells.push(cell);
                position += 1;
            }
            parsed.push(cells);
        }

        Self::from_rows_with_context(parsed, s)
    }

    fn split_square(chars: &[char], context: &str) -> Result<Vec<Vec<char>>> {
        let len = chars.len();
        let side = (len as f64).sqrt().round() as usize;
        if side * side != len {
            return Err(Error::InvalidBoardShape {
                reason: format!("{len} cells do not form a square"),
                context: context.to_string(),
            });
        }
        Ok(chars.chunks(side).map(<[char]>::to_vec).collect())
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Get the cell at `coord`, or `None` when it lies off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index_of(coord).ok().map(|index| self.cells[index])
    }

    /// Check whether `coord` is on the board and empty
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    pub(crate) fn index_of(&self, coord: Coord) -> Result<usize> {
        if coord.row >= self.size || coord.col >= self.size {
            return Err(Error::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(coord.row * self.size + coord.col)
    }

    /// Convert a row-major index into a coordinate
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    /// Put `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] or [`Error::CellOccupied`].
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<()> {
        let index = self.index_of(coord)?;
        if self.cells[index] != Cell::Empty {
            return Err(Error::CellOccupied { coord });
        }
        self.cells[index] = player.to_cell();
        Ok(())
    }

    /// Reset a cell to empty, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates off the board.
    pub fn clear(&mut self, coord: Coord) -> Result<Cell> {
        let index = self.index_of(coord)?;
        Ok(std::mem::replace(&mut self.cells[index], Cell::Empty))
    }

    /// Mark an empty cell for the lifetime of the returned guard.
    ///
    /// The cell is reset to empty when the guard drops, on every exit path.
    pub(crate) fn occupy(&mut self, index: usize, player: Player) -> Placement<'_> {
        debug_assert_eq!(self.cells[index], Cell::Empty, "occupy on a marked cell");
        self.cells[index] = player.to_cell();
        Placement { board: self, index }
    }

    /// Empty cells in row-major scan order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| self.coord_of(index))
            .collect()
    }

    /// Check whether at least one cell is empty
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Count the marks on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Check if `player` owns a full row, column or diagonal
    pub fn has_line(&self, player: Player) -> bool {
        LineAnalyzer::has_line(self, player)
    }

    /// Check if the game is over (a completed line, or no empty cell)
    pub fn is_terminal(&self) -> bool {
        self.has_line(Player::X) || self.has_line(Player::O) || !self.has_empty()
    }

    /// Get the winner if there is one. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_line(Player::X) {
            Some(Player::X)
        } else if self.has_line(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Swap X and O marks.
    #[must_use = "swap_players returns a new board; the original is unchanged"]
    pub fn swap_players(&self) -> Self {
        let mut swapped = self.clone();
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Compact single-line encoding, rows joined by `/`
    pub fn encode(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|&c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// A mark placed for the duration of one search branch.
///
/// Dereferences to the board it borrows and clears its cell on drop.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
