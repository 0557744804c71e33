//! Tile map model.
//!
//! A [`Grid`] is an immutable row-major array of [`Cell`]s built once from a
//! textual encoding: one character per cell, `#` for walls and `.` for empty
//! floor. Coordinates are `(col, row)` with `(0, 0)` at the top-left; columns
//! grow along +X and rows along +Y.

use thiserror::Error;

/// Symbol marking a wall cell in the map encoding.
pub const WALL_SYMBOL: char = '#';
/// Symbol marking an empty cell in the map encoding.
pub const EMPTY_SYMBOL: char = '.';

pub const DEFAULT_MAP_WIDTH: usize = 32;
pub const DEFAULT_MAP_HEIGHT: usize = 16;

/// The baked-in maze. Rows are concatenated with no separators.
pub const DEFAULT_MAP: &str = concat!(
    "################################",
    "#..............................#",
    "#.####.#########.#########.###.#",
    "#.#..#.#.......#.#.......#.#...#",
    "#.#..#.#.#####.#.#.#####.#.#.#.#",
    "#....#...#...#...#...#...#...#.#",
    "######.###.#.#.###.#.###.#####.#",
    "#......#...#.#.....#.#...#.....#",
    "#.####.#.###.#######.###.#.###.#",
    "#.#....#.............#.....#...#",
    "#.#.####.###########.####.##.#.#",
    "#.#......#.........#......#..#.#",
    "#.#######.#.#####.#.#######.##.#",
    "#.........#.#...#.#.........#..#",
    "#.#########.#...#.#########....#",
    "################################",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
}

impl Cell {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            WALL_SYMBOL => Some(Cell::Wall),
            EMPTY_SYMBOL => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// Errors raised while building a [`Grid`] from its textual encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map must have non-zero dimensions (got {width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("map dimensions {width}x{height} overflow the cell count")]
    TooLarge { width: usize, height: usize },

    #[error("map encoding has {actual} cells, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("map row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown map symbol {symbol:?} at cell {index}")]
    UnknownSymbol { symbol: char, index: usize },
}

/// Immutable 2D tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse a row-major encoding of exactly `width * height` symbols.
    pub fn parse(width: usize, height: usize, encoded: &str) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }

        let expected = width
            .checked_mul(height)
            .ok_or(MapError::TooLarge { width, height })?;
        let actual = encoded.chars().count();
        if actual != expected {
            return Err(MapError::LengthMismatch { expected, actual });
        }

        let cells = encoded
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Cell::from_symbol(symbol).ok_or(MapError::UnknownSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from one string per row. Width is taken from the first row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());

        for (row, line) in rows.iter().enumerate() {
            let actual = line.as_ref().chars().count();
            if actual != width {
                return Err(MapError::RowLength {
                    row,
                    expected: width,
                    actual,
                });
            }
        }

        let mut encoded = String::new();
        for line in rows {
            encoded.push_str(line.as_ref());
        }
        Self::parse(width, height, &encoded)
    }

    /// The baked-in 32x16 maze.
    pub fn default_map() -> Result<Self, MapError> {
        Self::parse(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT, DEFAULT_MAP)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Cell at `(col, row)`, or `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, col: i32, row: i32) -> Option<Cell> {
        if self.in_bounds(col, row) {
            Some(self.cells[row as usize * self.width + col as usize])
        } else {
            None
        }
    }

    /// Solid-boundary query: anything outside the grid counts as wall.
    #[inline]
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        !matches!(self.cell_at(col, row), Some(Cell::Empty))
    }
}
