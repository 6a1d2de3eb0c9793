//! Board representation and adjacency for rectangular letter grids.
//!
//! Cells are stored in a flat row-major vector: `idx = y * width + x`, with
//! `(0, 0)` at the top-left. Neighbors are derived on the fly from the eight
//! coordinate deltas, so any width and height is supported without lookup
//! tables.

use crate::error::{BoggleError, Result};

/// A board coordinate as `(x, y)`.
pub type Coord = (i32, i32);

/// Offsets to the eight surrounding cells.
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A rectangular grid of single-character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Board {
    /// Creates a board from its dimensions and row-major letters.
    ///
    /// Fails with [`BoggleError::InvalidInput`] if either dimension is not
    /// positive, does not fit an `i32` coordinate, or the letter count differs
    /// from `width * height`.
    pub fn new(width: i64, height: i64, letters: &str) -> Result<Self> {
        let cells: Vec<char> = letters.chars().collect();
        validate_dimensions(width, height, cells.len())?;

        Ok(Self {
            width: width as usize,
            height: height as usize,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter at a linear cell index.
    #[inline]
    pub fn letter(&self, cell_index: usize) -> char {
        self.cells[cell_index]
    }

    /// The letter at `(x, y)`, or `None` if out of bounds.
    #[cfg(test)]
    fn letter_at(&self, (x, y): Coord) -> Option<char> {
        self.contains((x, y))
            .then(|| self.cells[coord_to_idx(self.width, x, y)])
    }

    /// Returns true if `(x, y)` lies on the board.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    /// Linear indices of all in-bounds neighbors of `cell_index`.
    pub fn neighbors(&self, cell_index: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = idx_to_coord(self.width, cell_index);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let neighbor = (x + dx, y + dy);
            self.contains(neighbor)
                .then(|| coord_to_idx(self.width, neighbor.0, neighbor.1))
        })
    }
}

/// Checks that `width x height` is a positive grid of exactly `letter_count`
/// cells whose coordinates fit in a [`Coord`].
fn validate_dimensions(width: i64, height: i64, letter_count: usize) -> Result<()> {
    let max_side = i64::from(i32::MAX);
    let expected = width.saturating_mul(height);

    if width <= 0
        || height <= 0
        || width > max_side
        || height > max_side
        || i64::try_from(letter_count) != Ok(expected)
    {
        return Err(BoggleError::InvalidInput {
            width,
            height,
            expected,
            letters: letter_count,
        });
    }
    Ok(())
}

/// Converts `(x, y)` to a row-major cell index.
#[inline(always)]
pub const fn coord_to_idx(width: usize, x: i32, y: i32) -> usize {
    (y as usize) * width + (x as usize)
}

/// Converts a row-major cell index back to `(x, y)`.
#[inline(always)]
pub const fn idx_to_coord(width: usize, cell_index: usize) -> Coord {
    ((cell_index % width) as i32, (cell_index / width) as i32)
}

/// Returns true if two coordinates are distinct and touch, diagonals included.
#[cfg(test)]
pub(crate) fn are_adjacent(a: Coord, b: Coord) -> bool {
    a != b && (a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1
}

/// Formats a board as rows of space-separated letters.
pub fn format_board(board: &Board) -> String {
    let mut output = String::with_capacity(board.len() * 2);

    for row in board.cells.chunks(board.width) {
        for (x, letter) in row.iter().enumerate() {
            if x > 0 {
                output.push(' ');
            }
            output.push(*letter);
        }
        output.push('\n');
    }

    output
}
