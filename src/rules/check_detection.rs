//! King safety: check detection, self-check exclusion, and mobility.
//!
//! All three predicates are built on the same `is_legal_move` used for
//! ordinary play, so "can piece X reach square Y" has exactly one answer
//! throughout the engine. The pawn's forward-only attack asymmetry falls
//! out of the pawn rule itself with no special casing here.

use crate::board::grid::Board;
use crate::board::position::Position;
use crate::board::piece::PieceColor;
use crate::rules::move_validator::is_legal_move;

/// Whether `color`'s king is currently attacked. A board with no king of
/// that color reports `false`.
pub fn is_in_check(board: &Board, color: PieceColor) -> bool {
    let Some(king_square) = board.king_position(color) else {
        return false;
    };

    let attacker = color.opposite();
    board
        .occupied()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(square, _)| is_legal_move(board, square, king_square))
}

/// Whether moving the piece at `from` to `to` would leave the mover's own
/// king attacked. The move is simulated on a scratch copy of the board, so
/// the live board is never touched. Only the single piece moves in the
/// simulation; for castling that means the king's destination is vetted
/// but its transit squares are not.
pub fn would_expose_check(board: &Board, from: Position, to: Position) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let mover_color = mover.color;

    let mut scratch = *board;
    scratch.relocate(from, to);
    is_in_check(&scratch, mover_color)
}

/// Whether `color` has at least one legal, king-safe move. Scans every
/// from/to pair and short-circuits on the first success; bounded by 64x64
/// validator calls, fine for a human-paced game.
pub fn has_any_legal_move(board: &Board, color: PieceColor) -> bool {
    let from_squares: Vec<Position> = board
        .occupied()
        .filter(|(_, piece)| piece.color == color)
        .map(|(square, _)| square)
        .collect();

    for from in from_squares {
        for row in 0..8 {
            for column in 0..8 {
                let Ok(to) = Position::new(row, column) else {
                    continue;
                };
                if is_legal_move(board, from, to) && !would_expose_check(board, from, to) {
                    return true;
                }
            }
        }
    }

    false
}
