//! Versioned JSON save files.
//!
//! The original flat label:value dump could not round-trip room items or
//! creature identity, so saves use a structured format instead: one JSON
//! document holding the player and every room, behind a version number that
//! load checks before anything else. A load replaces the running state
//! wholesale; nothing is appended to.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::player::Player;
use crate::world::{ROOM_COUNT, Room, World};

/// Current save file schema version.
pub const SAVE_VERSION: u32 = 1;

/// Everything needed to resume a game.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    /// Schema version; [`read`] rejects anything but [`SAVE_VERSION`].
    pub version: u32,
    /// When the save was written.
    pub saved_at: DateTime<Utc>,
    /// The player at save time.
    pub player: Player,
    /// All rooms, in index order.
    pub rooms: Vec<Room>,
}

/// Write the game state to `path`, overwriting any existing file.
pub fn write(path: &Path, world: &World, player: &Player) -> GameResult<()> {
    let file = SaveFile {
        version: SAVE_VERSION,
        saved_at: Utc::now(),
        player: player.clone(),
        rooms: world.rooms().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json).map_err(|source| GameError::SaveIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and validate a save file. Does not touch any game state; callers
/// apply the result only after this succeeds.
pub fn read(path: &Path) -> GameResult<SaveFile> {
    let json = fs::read_to_string(path).map_err(|source| GameError::SaveIo {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SaveFile = serde_json::from_str(&json)?;
    if file.version != SAVE_VERSION {
        return Err(GameError::SaveVersion(file.version));
    }
    if file.rooms.len() != ROOM_COUNT {
        return Err(GameError::SaveShape(file.rooms.len(), ROOM_COUNT));
    }
    Ok(file)
}
