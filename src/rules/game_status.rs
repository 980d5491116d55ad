//! The game's status and the transition table that derives it.

use serde::{Deserialize, Serialize};

use crate::board::grid::Board;
use crate::board::piece::PieceColor;
use crate::rules::check_detection::{has_any_legal_move, is_in_check};

/// Overall state of a game, recomputed after every committed half-move.
/// Serialized by variant name in the persisted format.
///
/// `Draw` is never derived automatically: no repetition, fifty-move, or
/// material rules exist here. It can only be entered manually through the
/// session, and like `Checkmate` and `Stalemate` it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// Terminal states reject further move submission until new-game,
    /// load, or undo.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// Derive the status for the side about to move.
///
/// check and immobile -> Checkmate; check and mobile -> Check;
/// quiet and immobile -> Stalemate; otherwise InProgress.
pub fn evaluate_status(board: &Board, side_to_move: PieceColor) -> GameStatus {
    let in_check = is_in_check(board, side_to_move);
    let mobile = has_any_legal_move(board, side_to_move);

    match (in_check, mobile) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate_status, GameStatus};
    use crate::board::grid::Board;
    use crate::board::piece::{Piece, PieceColor, PieceKind};
    use crate::board::position::Position;

    fn pos(text: &str) -> Position {
        Position::from_notation(text).expect("test square should parse")
    }

    #[test]
    fn fresh_game_is_in_progress() {
        let board = Board::starting_position();
        assert_eq!(
            evaluate_status(&board, PieceColor::White),
            GameStatus::InProgress
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        // Black king h8 hemmed in by its own pawns, white rook delivers on
        // the back rank.
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, PieceColor::Black), pos("h8"));
        board.place(Piece::new(PieceKind::Pawn, PieceColor::Black), pos("g7"));
        board.place(Piece::new(PieceKind::Pawn, PieceColor::Black), pos("h7"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("a8"));
        board.place(Piece::new(PieceKind::King, PieceColor::White), pos("a1"));

        assert_eq!(
            evaluate_status(&board, PieceColor::Black),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn escapable_attack_is_check() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, PieceColor::Black), pos("e8"));
        board.place(Piece::new(PieceKind::Rook, PieceColor::White), pos("e1"));
        board.place(Piece::new(PieceKind::King, PieceColor::White), pos("a1"));

        assert_eq!(evaluate_status(&board, PieceColor::Black), GameStatus::Check);
    }

    #[test]
    fn boxed_quiet_king_is_stalemate() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, PieceColor::Black), pos("a8"));
        board.place(Piece::new(PieceKind::Queen, PieceColor::White), pos("c7"));
        board.place(Piece::new(PieceKind::King, PieceColor::White), pos("c6"));

        assert_eq!(
            evaluate_status(&board, PieceColor::Black),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn terminal_flags() {
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
