//! The board itself: 64 slots, each holding at most one piece.
//!
//! This layer is mechanical. It places, removes, and relocates pieces with
//! no legality checking; the rules live in `crate::rules`. The board owns
//! every placed piece outright, and a piece's location is exactly the index
//! of the slot holding it.

use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::board::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; 64],
}

impl Board {
    /// An empty board with no pieces placed.
    pub const fn empty() -> Self {
        Board { slots: [None; 64] }
    }

    /// A board with the standard starting position.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        board.setup_color(PieceColor::White);
        board.setup_color(PieceColor::Black);
        board
    }

    fn setup_color(&mut self, color: PieceColor) {
        let pawn_row = match color {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        };
        let piece_row = color.home_row();

        for column in 0..8 {
            self.slots[(pawn_row * 8 + column) as usize] =
                Some(Piece::new(PieceKind::Pawn, color));
        }

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (column, kind) in back_rank.into_iter().enumerate() {
            self.slots[piece_row as usize * 8 + column] = Some(Piece::new(kind, color));
        }
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.slots[position.index()].as_ref()
    }

    /// Put a piece on a square, replacing whatever was there.
    pub fn place(&mut self, piece: Piece, position: Position) {
        self.slots[position.index()] = Some(piece);
    }

    /// Take the piece off a square, returning it if one was present.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.slots[position.index()].take()
    }

    /// Relocate the piece at `from` to `to`, marking it as having moved.
    /// Returns the captured occupant of `to`, if any. A relocation from an
    /// empty square is a no-op returning `None`.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let Some(mut mover) = self.slots[from.index()].take() else {
            return None;
        };
        mover.has_moved = true;
        self.slots[to.index()].replace(mover)
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref().map(|piece| {
                let position = Position::new((index / 8) as i8, (index % 8) as i8)
                    .expect("slot index is always in range");
                (position, piece)
            })
        })
    }

    /// Locate the king of a color, if present.
    pub fn king_position(&self, color: PieceColor) -> Option<Position> {
        self.occupied()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(position, _)| position)
    }
}
