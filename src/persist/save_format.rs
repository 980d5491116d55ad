//! Wire types for saved games.
//!
//! Field names are fixed PascalCase so files written by earlier builds of
//! the desktop app keep loading. Coordinates travel as raw `i8` pairs and
//! are re-validated through `Position::new` on the way back in; a tampered
//! file fails with `LoadError` instead of indexing out of range.

use serde::{Deserialize, Serialize};

use crate::board::piece::{PieceColor, PieceKind};
use crate::board::position::Position;
use crate::errors::ChessError;
use crate::rules::game_status::GameStatus;
use crate::session::game_session::MoveRecord;

/// One persisted half-move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMove {
    #[serde(rename = "FromRow")]
    pub from_row: i8,
    #[serde(rename = "FromColumn")]
    pub from_column: i8,
    #[serde(rename = "ToRow")]
    pub to_row: i8,
    #[serde(rename = "ToColumn")]
    pub to_column: i8,
    #[serde(rename = "PieceType")]
    pub piece_type: PieceKind,
    #[serde(rename = "PlayerColor")]
    pub player_color: PieceColor,
}

/// The whole save file: final player and status plus the replayable moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(rename = "CurrentPlayer")]
    pub current_player: PieceColor,
    #[serde(rename = "GameStatus")]
    pub game_status: GameStatus,
    #[serde(rename = "Moves")]
    pub moves: Vec<SavedMove>,
}

impl SavedMove {
    pub fn from_record(record: &MoveRecord) -> Self {
        SavedMove {
            from_row: record.from.row(),
            from_column: record.from.column(),
            to_row: record.to.row(),
            to_column: record.to.column(),
            piece_type: record.kind,
            player_color: record.color,
        }
    }

    /// Rebuild a runtime record, rejecting out-of-board coordinates.
    pub fn to_record(&self) -> Result<MoveRecord, ChessError> {
        let from = Position::new(self.from_row, self.from_column)
            .map_err(|_| self.coordinate_error())?;
        let to =
            Position::new(self.to_row, self.to_column).map_err(|_| self.coordinate_error())?;
        Ok(MoveRecord {
            from,
            to,
            kind: self.piece_type,
            color: self.player_color,
        })
    }

    fn coordinate_error(&self) -> ChessError {
        ChessError::LoadError(format!(
            "saved move has off-board coordinates ({},{}) -> ({},{})",
            self.from_row, self.from_column, self.to_row, self.to_column
        ))
    }
}
