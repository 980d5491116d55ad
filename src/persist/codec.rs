//! Save and load for game sessions.
//!
//! A save file carries only the move list plus the final player and status;
//! boards are never serialized. Load replays the list through the normal
//! commit pipeline on a scratch session and swaps it in only on full
//! success, so a corrupt file cannot leave the live game half-loaded.

use crate::errors::ChessError;
use crate::persist::save_format::{SavedGame, SavedMove};
use crate::session::game_session::GameSession;

/// Serialize the session's replayable state to JSON bytes.
pub fn save_game(session: &GameSession) -> Result<Vec<u8>, ChessError> {
    let saved = SavedGame {
        current_player: session.current_player(),
        game_status: session.status(),
        moves: session
            .move_records()
            .iter()
            .map(SavedMove::from_record)
            .collect(),
    };
    serde_json::to_vec_pretty(&saved).map_err(|err| ChessError::SaveFailed(err.to_string()))
}

/// Parse and replay a save file into `session`. On any error the session
/// is left exactly as it was.
pub fn load_game(session: &mut GameSession, bytes: &[u8]) -> Result<(), ChessError> {
    let saved: SavedGame =
        serde_json::from_slice(bytes).map_err(|err| ChessError::LoadError(err.to_string()))?;

    let mut scratch = GameSession::new();
    for (index, saved_move) in saved.moves.iter().enumerate() {
        let record = saved_move.to_record()?;
        let occupant = scratch.board().piece_at(record.from).copied();
        match occupant {
            Some(piece) if piece.kind == record.kind && piece.color == record.color => {}
            _ => {
                return Err(ChessError::LoadError(format!(
                    "move {}: {} does not hold a {:?} {:?}",
                    index + 1,
                    record.from.notation(),
                    record.color,
                    record.kind
                )));
            }
        }
        // Promotion choice is not persisted; replay takes the queen default.
        scratch
            .submit_move(record.from, record.to, None)
            .map_err(|err| {
                ChessError::LoadError(format!(
                    "move {}: {} to {} cannot be replayed: {err}",
                    index + 1,
                    record.from.notation(),
                    record.to.notation()
                ))
            })?;
    }

    // The file's player and status are authoritative, covering states the
    // replay cannot reproduce (a declared draw, most notably).
    scratch.current_player = saved.current_player;
    scratch.status = saved.game_status;
    scratch.undo_stack.clear();
    scratch.pending_events.clear();
    scratch.emit_all_changed();
    *session = scratch;
    Ok(())
}
