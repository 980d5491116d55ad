//! Typed change events emitted toward the host UI.
//!
//! The engine holds no observer references; committed operations queue
//! events and the host drains them. Every event carries an owned snapshot
//! of the state it describes, never a live reference into the session.

use crate::board::piece::{Piece, PieceColor};
use crate::board::position::Position;
use crate::rules::game_status::GameStatus;
use crate::session::history::NotationRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// The board contents changed; carries every occupied square.
    BoardChanged(Vec<(Position, Piece)>),
    /// The game status or side to move changed.
    StatusChanged {
        status: GameStatus,
        side_to_move: PieceColor,
    },
    /// The notation history changed; carries the full paired move list.
    HistoryChanged(Vec<NotationRecord>),
}
