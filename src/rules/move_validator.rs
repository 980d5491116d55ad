//! Per-piece move legality and path clearance.
//!
//! `is_legal_move` is the one attack predicate for the whole engine: the
//! check detector asks it whether an enemy piece could reach the king's
//! square, so ordinary legality and king safety can never disagree. It
//! knows nothing about self-check; that filter is layered on top by
//! `crate::rules::check_detection`.
//!
//! Known deviation from full FIDE rules, kept from the original design:
//! castling does not verify that the king's transit squares are unattacked.
//! Only the king's final destination is vetted, by the check layer. En
//! passant is unsupported.

use crate::board::grid::Board;
use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;

/// Whether the piece at `from` may move to `to` under its own movement
/// rules. Returns `false` when `from` is empty, the squares are equal, or
/// `to` holds a piece of the mover's color.
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, piece, from, to),
        PieceKind::Knight => is_legal_knight_move(from, to),
        PieceKind::Bishop => is_legal_bishop_move(board, from, to),
        PieceKind::Rook => is_legal_rook_move(board, from, to),
        PieceKind::Queen => is_legal_queen_move(board, from, to),
        PieceKind::King => is_legal_king_move(board, piece, from, to),
    }
}

fn is_legal_pawn_move(board: &Board, pawn: &Piece, from: Position, to: Position) -> bool {
    let direction = pawn.color.forward_direction();
    let row_diff = to.row() - from.row();
    let column_diff = (to.column() - from.column()).abs();

    if column_diff == 0 {
        // Forward movement never captures.
        if board.piece_at(to).is_some() {
            return false;
        }
        if row_diff == direction {
            return true;
        }
        // Double step: first move only, both squares empty.
        if row_diff == 2 * direction && !pawn.has_moved {
            let Ok(middle) = from.offset(direction, 0) else {
                return false;
            };
            return board.piece_at(middle).is_none();
        }
        false
    } else if column_diff == 1 && row_diff == direction {
        // Diagonal single step only onto an enemy piece.
        board
            .piece_at(to)
            .is_some_and(|target| target.color != pawn.color)
    } else {
        false
    }
}

fn is_legal_knight_move(from: Position, to: Position) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let column_diff = (to.column() - from.column()).abs();
    (row_diff == 2 && column_diff == 1) || (row_diff == 1 && column_diff == 2)
}

fn is_legal_bishop_move(board: &Board, from: Position, to: Position) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let column_diff = (to.column() - from.column()).abs();
    row_diff == column_diff && is_path_clear(board, from, to)
}

fn is_legal_rook_move(board: &Board, from: Position, to: Position) -> bool {
    (from.row() == to.row() || from.column() == to.column()) && is_path_clear(board, from, to)
}

fn is_legal_queen_move(board: &Board, from: Position, to: Position) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let column_diff = (to.column() - from.column()).abs();
    let aligned =
        from.row() == to.row() || from.column() == to.column() || row_diff == column_diff;
    aligned && is_path_clear(board, from, to)
}

fn is_legal_king_move(board: &Board, king: &Piece, from: Position, to: Position) -> bool {
    let row_diff = (to.row() - from.row()).abs();
    let column_diff = (to.column() - from.column()).abs();

    if row_diff <= 1 && column_diff <= 1 {
        return true;
    }

    // Castling: the king slides two columns along its home row.
    if king.has_moved || row_diff != 0 || column_diff != 2 {
        return false;
    }
    let kingside = to.column() > from.column();
    let rook_column = if kingside { 7 } else { 0 };
    let Ok(rook_square) = Position::new(from.row(), rook_column) else {
        return false;
    };
    let rook_present = board
        .piece_at(rook_square)
        .is_some_and(|rook| rook.kind == PieceKind::Rook && !rook.has_moved);
    if !rook_present {
        return false;
    }

    // Every square strictly between king and rook must be empty.
    let step = if kingside { 1 } else { -1 };
    let mut column = from.column() + step;
    while column != rook_column {
        let Ok(square) = Position::new(from.row(), column) else {
            return false;
        };
        if board.piece_at(square).is_some() {
            return false;
        }
        column += step;
    }

    true
}

/// Scan the straight or diagonal line from `from` toward `to`, excluding
/// both endpoints. Shared by every sliding piece.
fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let row_step = (to.row() - from.row()).signum();
    let column_step = (to.column() - from.column()).signum();

    let mut row = from.row() + row_step;
    let mut column = from.column() + column_step;
    while row != to.row() || column != to.column() {
        let Ok(square) = Position::new(row, column) else {
            return false;
        };
        if board.piece_at(square).is_some() {
            return false;
        }
        row += row_step;
        column += column_step;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_legal_move;
    use crate::board::grid::Board;
    use crate::board::piece::{Piece, PieceColor, PieceKind};
    use crate::board::position::Position;

    fn pos(text: &str) -> Position {
        Position::from_notation(text).expect("test square should parse")
    }

    #[test]
    fn same_square_and_friendly_destination_are_rejected() {
        let board = Board::starting_position();
        assert!(!is_legal_move(&board, pos("e2"), pos("e2")));
        // Rook onto its own knight.
        assert!(!is_legal_move(&board, pos("a1"), pos("b1")));
        // Empty source square.
        assert!(!is_legal_move(&board, pos("e4"), pos("e5")));
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = Board::starting_position();
        assert!(is_legal_move(&board, pos("e2"), pos("e3")));
        assert!(is_legal_move(&board, pos("e2"), pos("e4")));
        assert!(!is_legal_move(&board, pos("e2"), pos("e5")));
        // Sideways and backward are never legal.
        assert!(!is_legal_move(&board, pos("e2"), pos("d3")));
        assert!(!is_legal_move(&board, pos("e2"), pos("e1")));
    }

    #[test]
    fn pawn_double_step_requires_unmoved_pawn_and_clear_squares() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, PieceColor::White);
        board.place(pawn, pos("e2"));
        board.place(Piece::new(PieceKind::Knight, PieceColor::Black), pos("e3"));
        // Blocked intermediate square.
        assert!(!is_legal_move(&board, pos("e2"), pos("e4")));

        board.remove(pos("e3"));
        board.place(Piece::new(PieceKind::Knight, PieceColor::Black), pos("e4"));
        // Blocked destination.
        assert!(!is_legal_move(&board, pos("e2"), pos("e4")));

        board.remove(pos("e4"));
        assert!(is_legal_move(&board, pos("e2"), pos("e4")));

        // A pawn that has already moved loses the double step.
        pawn.has_moved = true;
        board.place(pawn, pos("e2"));
        assert!(!is_legal_move(&board, pos("e2"), pos("e4")));
    }

    #[test]
    fn pawn_captures_only_diagonally_onto_enemies() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::Pawn, PieceColor::White), pos("e4"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::Black), pos("d5"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::Black), pos("e5"));

        assert!(is_legal_move(&board, pos("e4"), pos("d5")));
        // Diagonal onto an empty square is not a move (no en passant).
        assert!(!is_legal_move(&board, pos("e4"), pos("f5")));
        // Forward capture is not a move.
        assert!(!is_legal_move(&board, pos("e4"), pos("e5")));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = Board::starting_position();
        assert!(is_legal_move(&board, pos("e7"), pos("e6")));
        assert!(is_legal_move(&board, pos("e7"), pos("e5")));
        assert!(!is_legal_move(&board, pos("e7"), pos("e8")));
    }

    #[test]
    fn knight_jumps_in_l_shapes_over_pieces() {
        let board = Board::starting_position();
        assert!(is_legal_move(&board, pos("g1"), pos("f3")));
        assert!(is_legal_move(&board, pos("g1"), pos("h3")));
        assert!(!is_legal_move(&board, pos("g1"), pos("g3")));
    }

    #[test]
    fn sliders_respect_geometry_and_blocked_paths() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::Bishop, PieceColor::White), pos("c1"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("a1"));
        board.place(Piece::new(PieceKind::Queen, PieceColor::White), pos("d1"));
        board.place(Piece::new(PieceKind::Pawn, PieceColor::Black), pos("e3"));

        assert!(is_legal_move(&board, pos("c1"), pos("e3")));
        // Blocked beyond the pawn.
        assert!(!is_legal_move(&board, pos("c1"), pos("f4")));
        // Bishops never move straight.
        assert!(!is_legal_move(&board, pos("c1"), pos("c4")));

        assert!(is_legal_move(&board, pos("a1"), pos("a8")));
        assert!(is_legal_move(&board, pos("a1"), pos("b1")));
        assert!(!is_legal_move(&board, pos("a1"), pos("b2")));

        assert!(is_legal_move(&board, pos("d1"), pos("d8")));
        assert!(is_legal_move(&board, pos("d1"), pos("h5")));
        // Queen is not a knight.
        assert!(!is_legal_move(&board, pos("d1"), pos("e3")));
    }

    #[test]
    fn king_steps_one_square_any_direction() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, PieceColor::White), pos("e4"));
        for target in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
            assert!(is_legal_move(&board, pos("e4"), pos(target)));
        }
        assert!(!is_legal_move(&board, pos("e4"), pos("e6")));
        assert!(!is_legal_move(&board, pos("e4"), pos("g4")));
    }

    #[test]
    fn castling_needs_unmoved_pair_and_empty_between() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, PieceColor::White), pos("e1"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("h1"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("a1"));

        assert!(is_legal_move(&board, pos("e1"), pos("g1")), "kingside");
        assert!(is_legal_move(&board, pos("e1"), pos("c1")), "queenside");

        // Queenside blocked by a piece on b1 even though the king never
        // crosses it.
        board.place(Piece::new(PieceKind::Knight, PieceColor::White), pos("b1"));
        assert!(!is_legal_move(&board, pos("e1"), pos("c1")));

        // A moved rook forfeits its side.
        let mut moved_rook = Piece::new(PieceKind::Rook, PieceColor::White);
        moved_rook.has_moved = true;
        board.place(moved_rook, pos("h1"));
        assert!(!is_legal_move(&board, pos("e1"), pos("g1")));

        // A moved king forfeits both.
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("h1"));
        board.remove(pos("b1"));
        let mut moved_king = Piece::new(PieceKind::King, PieceColor::White);
        moved_king.has_moved = true;
        board.place(moved_king, pos("e1"));
        assert!(!is_legal_move(&board, pos("e1"), pos("g1")));
        assert!(!is_legal_move(&board, pos("e1"), pos("c1")));
    }

    #[test]
    fn castling_in_the_starting_position_is_blocked() {
        let board = Board::starting_position();
        assert!(!is_legal_move(&board, pos("e1"), pos("g1")));
        assert!(!is_legal_move(&board, pos("e1"), pos("c1")));
    }
}
