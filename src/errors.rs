//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! notation parsing, and persistence. The enum `ChessError` is used as the
//! single error type across the crate to simplify propagation and matching.
//! Each variant carries contextual information where appropriate so callers
//! can present precise, user-facing messages.
//!
//! All variants are recoverable at the call boundary: a failed request
//! leaves the in-memory game state unchanged, so callers can display the
//! message and let the player try again.

use std::fmt;

/// Unified error type for the rules engine.
///
/// When matching on `ChessError`:
/// - Treat `ParseError`, `AmbiguousMove`, and `IllegalMove` as ordinary
///   player-input failures suitable for direct display.
/// - Treat `OutOfRange` as a programming or data error (coordinates built
///   outside the 8x8 board).
/// - Treat `LoadError` and `SaveFailed` as file-level failures; the live
///   session is untouched when they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A position was constructed outside the board.
    ///
    /// Payload: the offending (row, column) pair.
    OutOfRange { row: i8, column: i8 },

    /// A textual move did not match the algebraic notation grammar.
    ///
    /// Payload: the original input string.
    ParseError(String),

    /// More than one piece satisfies a parsed move.
    ///
    /// Payload: the original input string; the player must add a file or
    /// rank disambiguation token.
    AmbiguousMove(String),

    /// No legal move matches the request, or the move would violate the
    /// rules (wrong turn, blocked path, self-check, game already over).
    ///
    /// Payload: a human-readable reason.
    IllegalMove(String),

    /// Persisted data was malformed, or a recorded move is no longer legal
    /// against the replayed board state.
    ///
    /// Payload: a description of what failed during load.
    LoadError(String),

    /// The game could not be serialized.
    SaveFailed(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfRange { row, column } => {
                write!(f, "position ({row}, {column}) is outside the board (0-7)")
            }
            ChessError::ParseError(input) => {
                write!(f, "invalid move notation: {input}")
            }
            ChessError::AmbiguousMove(input) => {
                write!(f, "ambiguous move '{input}': please specify file or rank")
            }
            ChessError::IllegalMove(reason) => {
                write!(f, "illegal move: {reason}")
            }
            ChessError::LoadError(reason) => {
                write!(f, "failed to load game: {reason}")
            }
            ChessError::SaveFailed(reason) => {
                write!(f, "failed to save game: {reason}")
            }
        }
    }
}

impl std::error::Error for ChessError {}
