//! Core engine for Gloomvault, a five-room terminal dungeon crawl.
//!
//! The crate is a library around [`GameSession`]: feed it one line of player
//! input at a time and it applies the command to the world and player state,
//! returning the narration to print. The binary in `gv-cli` is a thin
//! blocking REPL over it.

/// Command parsing for player input.
pub mod command;
/// Error types used throughout the crate.
pub mod error;
/// Player state: health, strength, inventory, and story flags.
pub mod player;
/// Versioned JSON save files.
pub mod save;
/// The game session: command dispatch and the rules engine.
pub mod session;
/// The fixed five-room world model.
pub mod world;

pub use command::{Command, Direction, parse_command};
pub use error::{GameError, GameResult};
pub use player::{INVENTORY_CAPACITY, Player, StoryFlag, StoryFlags};
pub use save::{SAVE_VERSION, SaveFile};
pub use session::{Ending, GameSession};
pub use world::{Creature, Exits, Room, World};
