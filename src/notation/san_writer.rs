//! Standard Algebraic Notation generation for a committed half-move.

use crate::board::piece::PieceKind;
use crate::board::position::Position;
use crate::rules::game_status::GameStatus;

/// The facts about a half-move that SAN needs, captured before the board
/// mutated (for the source square) and after status recomputation (for the
/// `+`/`#` suffix).
#[derive(Debug, Clone, Copy)]
pub struct CompletedMove {
    pub kind: PieceKind,
    pub from: Position,
    pub to: Position,
    pub is_capture: bool,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
}

/// Render a committed move as SAN, appending `+` or `#` from the status
/// the move produced.
pub fn write_san(mv: &CompletedMove, resulting_status: GameStatus) -> String {
    let mut notation = String::new();

    if mv.is_castling {
        if mv.to.column() > mv.from.column() {
            notation.push_str("O-O");
        } else {
            notation.push_str("O-O-O");
        }
        push_status_suffix(&mut notation, resulting_status);
        return notation;
    }

    notation.push_str(mv.kind.san_letter());

    // Capturing pawns are named by their source file.
    if mv.is_capture && mv.kind == PieceKind::Pawn {
        notation.push(char::from(b'a' + mv.from.column() as u8));
    }
    if mv.is_capture {
        notation.push('x');
    }

    notation.push_str(&mv.to.notation());

    if let Some(promoted) = mv.promotion {
        notation.push('=');
        notation.push_str(promoted.san_letter());
    }

    push_status_suffix(&mut notation, resulting_status);
    notation
}

fn push_status_suffix(notation: &mut String, status: GameStatus) {
    match status {
        GameStatus::Checkmate => notation.push('#'),
        GameStatus::Check => notation.push('+'),
        _ => {}
    }
}
