//! Piece kinds, colors, and the piece value type stored on the board.

use serde::{Deserialize, Serialize};

/// Side of a piece or player. Serialized as `"White"` / `"Black"` in the
/// persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// The row pawns of this color advance toward. White starts on rows 6/7
    /// and moves up the array toward row 0.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// The back-rank row where this color's king and rooks start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

/// The kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The SAN letter for this kind; pawns have none.
    pub const fn san_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Map a SAN letter (case-insensitive) to a kind. Anything outside
    /// `KQRBN` reads as a pawn, matching the notation grammar's default.
    pub fn from_san_letter(letter: char) -> Self {
        match letter.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            _ => PieceKind::Pawn,
        }
    }
}

/// A piece as stored in a board slot. Location is the owning slot's
/// coordinate; the piece itself carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    /// Set on the piece's first move and never cleared except by undo
    /// restoring an earlier snapshot. Gates pawn double-steps and castling.
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }
}
