//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes all top-level subsystems (board model, move rules,
//! algebraic notation, the game session, and persistence) so binaries,
//! tests, and host UIs can import stable module paths.

pub mod errors;

pub mod board {
    pub mod grid;
    pub mod piece;
    pub mod position;
}

pub mod rules {
    pub mod check_detection;
    pub mod game_status;
    pub mod move_validator;
}

pub mod notation {
    pub mod san_parser;
    pub mod san_writer;
}

pub mod session {
    pub mod events;
    pub mod game_session;
    pub mod history;
    pub mod undo_stack;
}

pub mod persist {
    pub mod codec;
    pub mod save_format;
}
