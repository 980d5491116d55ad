//! The game session: single owner of all mutable game state.
//!
//! Every public operation runs to completion before returning; there is no
//! partial mutation visible to callers. A committed move follows one fixed
//! pipeline: validate, snapshot, record, mutate, switch player, recompute
//! status, notate, emit events. Promotion is an input resolved by the
//! caller (defaulting to a queen), never a callback out of the engine.

use crate::board::grid::Board;
use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::board::position::Position;
use crate::errors::ChessError;
use crate::notation::san_parser::resolve_text_move;
use crate::notation::san_writer::{write_san, CompletedMove};
use crate::rules::check_detection::would_expose_check;
use crate::rules::game_status::{evaluate_status, GameStatus};
use crate::rules::move_validator::is_legal_move;
use crate::session::events::ChangeEvent;
use crate::session::history::{MoveLog, NotationRecord};
use crate::session::undo_stack::{UndoSnapshot, UndoStack};

/// The minimal record needed to replay a half-move: coordinates plus the
/// *moving* piece's pre-move kind and color. Promotion choice and castling
/// are not recorded; replay reconstructs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// Summary of a committed half-move handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub san: String,
    pub status: GameStatus,
    pub captured: Option<PieceKind>,
}

pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: PieceColor,
    pub(crate) status: GameStatus,
    pub(crate) move_records: Vec<MoveRecord>,
    pub(crate) history: MoveLog,
    pub(crate) undo_stack: UndoStack,
    pub(crate) pending_events: Vec<ChangeEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl GameSession {
    /// A fresh session at the standard starting position, White to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::starting_position(),
            current_player: PieceColor::White,
            status: GameStatus::InProgress,
            move_records: Vec::new(),
            history: MoveLog::new(),
            undo_stack: UndoStack::new(),
            pending_events: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[NotationRecord] {
        self.history.records()
    }

    pub fn move_records(&self) -> &[MoveRecord] {
        &self.move_records
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    /// Take all queued change events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Submit a move by coordinates. `promotion` is consulted only when the
    /// move promotes; `None` promotes to a queen.
    pub fn submit_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessError> {
        self.commit_move(from, to, promotion)
    }

    /// Submit a move as SAN text for the side to move.
    pub fn submit_text_move(&mut self, text: &str) -> Result<MoveOutcome, ChessError> {
        let input = text.trim();
        if input.is_empty() {
            return Err(ChessError::ParseError(text.to_owned()));
        }
        if self.status.is_terminal() {
            return Err(ChessError::IllegalMove("the game is over".to_owned()));
        }
        let resolved = resolve_text_move(&self.board, self.current_player, input)?;
        self.commit_move(resolved.from, resolved.to, resolved.promotion)
    }

    fn commit_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessError> {
        // --- validate ---
        if self.status.is_terminal() {
            return Err(ChessError::IllegalMove("the game is over".to_owned()));
        }
        let Some(mover) = self.board.piece_at(from).copied() else {
            return Err(ChessError::IllegalMove(format!(
                "no piece on {}",
                from.notation()
            )));
        };
        if mover.color != self.current_player {
            return Err(ChessError::IllegalMove(format!(
                "it is not {:?}'s piece to move",
                mover.color
            )));
        }
        if !is_legal_move(&self.board, from, to) {
            return Err(ChessError::IllegalMove(format!(
                "{:?} cannot move from {} to {}",
                mover.kind,
                from.notation(),
                to.notation()
            )));
        }
        if would_expose_check(&self.board, from, to) {
            return Err(ChessError::IllegalMove(
                "that move would leave the king in check".to_owned(),
            ));
        }

        let is_castling =
            mover.kind == PieceKind::King && (to.column() - from.column()).abs() == 2;
        let promotes = mover.kind == PieceKind::Pawn && (to.row() == 0 || to.row() == 7);
        let promotion_kind = if promotes {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if matches!(kind, PieceKind::King | PieceKind::Pawn) {
                return Err(ChessError::IllegalMove(format!(
                    "cannot promote to {kind:?}"
                )));
            }
            Some(kind)
        } else {
            None
        };

        // --- snapshot ---
        self.undo_stack.push(UndoSnapshot {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            move_records: self.move_records.clone(),
            notation_records: self.history.records().to_vec(),
        });

        // --- record ---
        self.move_records.push(MoveRecord {
            from,
            to,
            kind: mover.kind,
            color: mover.color,
        });

        // --- mutate ---
        let is_capture = self.board.piece_at(to).is_some();
        if is_castling {
            self.move_castling_rook(from, to);
        }
        let captured = self.board.relocate(from, to);
        if let Some(promoted) = promotion_kind {
            // The pawn is consumed; the new piece keeps has_moved = true.
            self.board.place(
                Piece {
                    kind: promoted,
                    color: mover.color,
                    has_moved: true,
                },
                to,
            );
        }

        // --- switch player, recompute status ---
        self.current_player = self.current_player.opposite();
        self.status = evaluate_status(&self.board, self.current_player);

        // --- notate ---
        let san = write_san(
            &CompletedMove {
                kind: mover.kind,
                from,
                to,
                is_capture,
                promotion: promotion_kind,
                is_castling,
            },
            self.status,
        );
        self.history.add(mover.color, san.clone());

        self.emit_all_changed();
        Ok(MoveOutcome {
            san,
            status: self.status,
            captured: captured.map(|piece| piece.kind),
        })
    }

    /// Relocate the rook for an already-validated castling move.
    fn move_castling_rook(&mut self, king_from: Position, king_to: Position) {
        let kingside = king_to.column() > king_from.column();
        let rook_from = Position::new(king_from.row(), if kingside { 7 } else { 0 });
        let rook_to = Position::new(king_from.row(), if kingside { 5 } else { 3 });
        if let (Ok(rook_from), Ok(rook_to)) = (rook_from, rook_to) {
            self.board.relocate(rook_from, rook_to);
        }
    }

    /// Pop the latest snapshot and restore everything it captured.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.board = snapshot.board;
        self.current_player = snapshot.current_player;
        self.status = snapshot.status;
        self.move_records = snapshot.move_records;
        self.history.restore(snapshot.notation_records);
        self.emit_all_changed();
        true
    }

    /// Reset to the starting position, clearing history and the undo stack.
    pub fn new_game(&mut self) {
        self.board = Board::starting_position();
        self.current_player = PieceColor::White;
        self.status = GameStatus::InProgress;
        self.move_records.clear();
        self.history.clear();
        self.undo_stack.clear();
        self.emit_all_changed();
    }

    /// Enter the manual `Draw` state. No draw rule is ever computed
    /// automatically; this is the only way in. Returns `false` when the
    /// game is already over.
    pub fn declare_draw(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = GameStatus::Draw;
        self.pending_events.push(ChangeEvent::StatusChanged {
            status: self.status,
            side_to_move: self.current_player,
        });
        true
    }

    /// Serialize this session to JSON bytes.
    pub fn save(&self) -> Result<Vec<u8>, ChessError> {
        crate::persist::codec::save_game(self)
    }

    /// Replace this session with the game in `bytes`. On error the session
    /// is left unchanged.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), ChessError> {
        crate::persist::codec::load_game(self, bytes)
    }

    pub(crate) fn emit_all_changed(&mut self) {
        let occupied: Vec<(Position, Piece)> = self
            .board
            .occupied()
            .map(|(position, piece)| (position, *piece))
            .collect();
        self.pending_events.push(ChangeEvent::BoardChanged(occupied));
        self.pending_events.push(ChangeEvent::StatusChanged {
            status: self.status,
            side_to_move: self.current_player,
        });
        self.pending_events
            .push(ChangeEvent::HistoryChanged(self.history.records().to_vec()));
    }
}
