//! Full-state snapshots supporting single-step undo.

use crate::board::grid::Board;
use crate::board::piece::PieceColor;
use crate::rules::game_status::GameStatus;
use crate::session::game_session::MoveRecord;
use crate::session::history::NotationRecord;

/// A deep, aliasing-free copy of everything a committed move can change.
/// Captured immediately before the board mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoSnapshot {
    pub board: Board,
    pub current_player: PieceColor,
    pub status: GameStatus,
    pub move_records: Vec<MoveRecord>,
    pub notation_records: Vec<NotationRecord>,
}

/// The snapshot stack. Cleared on new-game and load; each snapshot is
/// consumed exactly once by undo.
#[derive(Debug, Default)]
pub struct UndoStack {
    snapshots: Vec<UndoSnapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        UndoStack::default()
    }

    pub fn push(&mut self, snapshot: UndoSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Drives the UI's undo affordance, not engine logic.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }
}
