//! Board coordinates and their algebraic square names.
//!
//! Converts between human-readable squares (for example `e4`) and the
//! internal (row, column) representation reused by the validator, notation,
//! and persistence components. Row 0 is rank 8 (Black's back rank), so
//! `row = 8 - rank` and `column = file - 'a'`.

use crate::errors::ChessError;

/// A square coordinate on the 8x8 board. Immutable once constructed and
/// guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    /// Build a position, failing if either coordinate leaves the board.
    pub fn new(row: i8, column: i8) -> Result<Self, ChessError> {
        if !(0..=7).contains(&row) || !(0..=7).contains(&column) {
            return Err(ChessError::OutOfRange { row, column });
        }
        Ok(Position { row, column })
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Row-major index into a 64-slot board array.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * 8 + self.column) as usize
    }

    /// Shift by a (row, column) delta, failing if the result leaves the
    /// board.
    pub fn offset(self, d_row: i8, d_column: i8) -> Result<Self, ChessError> {
        Position::new(self.row + d_row, self.column + d_column)
    }

    /// The algebraic square name, for example `e4`.
    pub fn notation(self) -> String {
        let file = char::from(b'a' + self.column as u8);
        let rank = 8 - self.row;
        format!("{file}{rank}")
    }

    /// Parse an algebraic square name (for example `e4`).
    pub fn from_notation(notation: &str) -> Result<Self, ChessError> {
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::ParseError(notation.to_owned()));
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::ParseError(notation.to_owned()));
        }

        let column = (file - b'a') as i8;
        let row = 8 - (rank - b'0') as i8;
        Position::new(row, column)
    }
}
