//! Error types for the game engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game session.
///
/// Rule outcomes the player can recover from in fiction (a blocked exit, a
/// missing item, a full pack) are ordinary replies, not errors. Errors are
/// reserved for input the interpreter cannot dispatch and for save-file
/// failures; the REPL reports them and keeps the loop running.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input did not match any known command.
    #[error("Unknown command. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// The save file could not be opened, read, or written.
    #[error("cannot access save file {}: {source}", path.display())]
    SaveIo {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The save file is not valid JSON or does not match the schema.
    #[error("malformed save file: {0}")]
    SaveFormat(#[from] serde_json::Error),

    /// The save file was written by an incompatible version of the game.
    #[error("unsupported save file version {0}")]
    SaveVersion(u32),

    /// The save file does not describe this world (wrong room count).
    #[error("save file has {0} rooms, expected {1}")]
    SaveShape(usize, usize),
}
