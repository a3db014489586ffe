//! The game session: command dispatch and the rules engine.
//!
//! [`GameSession`] owns the world and the player. Feed it one line of input
//! at a time with [`GameSession::process`]; it returns the narration to
//! print. The session never exits the process: terminal states (death,
//! quit) are surfaced through [`GameSession::ending`] and the frontend
//! decides what to do with them.

use std::path::Path;

use crate::command::{Command, Direction, parse_command};
use crate::error::{GameError, GameResult};
use crate::player::{Player, StoryFlag};
use crate::save;
use crate::world::World;

/// Why a session stopped accepting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player quit.
    Quit,
    /// The player's health reached zero in combat.
    Died,
}

/// Creature defeats that set a story flag, keyed by creature name.
const DEFEAT_TRIGGERS: &[(&str, StoryFlag)] = &[
    ("Goblin", StoryFlag::KilledGoblin),
    ("Witch", StoryFlag::KilledWitch),
    ("Final Boss", StoryFlag::KilledFinalBoss),
];

fn defeat_trigger(creature: &str) -> Option<StoryFlag> {
    DEFEAT_TRIGGERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(creature))
        .map(|(_, flag)| *flag)
}

/// Room descriptions shown after the room's creature has been slain, keyed
/// by (room index, flag that records the kill).
const POST_KILL_TEXT: &[(usize, StoryFlag, &str)] = &[
    (
        1,
        StoryFlag::KilledGoblin,
        "You are in Goblins' Hell. The goblin's dead body lies on the ground.",
    ),
    (
        2,
        StoryFlag::KilledWitch,
        "You are in Witch's Holley. The witch's ashes drift through the room.",
    ),
    (
        4,
        StoryFlag::KilledFinalBoss,
        "You are in the Final Boss room. His dead body lies on the ground. Who is the boss now?!",
    ),
];

const MAP_ART: &str = r"           -----------------
          | Witch's Holley  |
           ------- && ------
          |                 |
----------     Goblins'     |--------------
 Entrance &      Hell        &  FINAL BOSS |
----------                  |--------------
          |                 |
           ------ && -------
          |       ???       |
           -----------------";

const HELP_TEXT: &str = "Available commands:
  move <direction>  - Move in a direction (up, down, left, right).
  look              - Look around the room.
  map               - Show the dungeon map.
  inventory         - View your inventory.
  pickup <item>     - Pick up an item in the room.
  attack            - Attack the creature in the room.
  save <filepath>   - Save the game state to a file.
  load <filepath>   - Load the game state from a file.
  help              - Show this list.
  quit              - Quit the game.";

/// An interactive dungeon-crawl session.
pub struct GameSession {
    world: World,
    player: Player,
    ending: Option<Ending>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a new game at the dungeon entrance.
    pub fn new() -> Self {
        Self {
            world: World::starting(),
            player: Player::new(),
            ending: None,
        }
    }

    /// The world state.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player state, for frontends and tests that need to stage a
    /// scenario directly.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Mutable world state. Direct mutation skips the rules engine; callers
    /// own the invariants listed on [`Room`](crate::world::Room).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Why the session ended, once it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Process a line of player input and return the narration to print.
    ///
    /// Blank input is a no-op. Unknown commands and save-file failures come
    /// back as errors; everything else, including blocked moves and failed
    /// pickups, is an ordinary reply with state left unchanged.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        self.execute(parse_command(trimmed))
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        match command {
            Command::Move { direction } => Ok(self.do_move(direction)),
            Command::Look => Ok(self.do_look()),
            Command::Map => Ok(MAP_ART.to_string()),
            Command::Inventory => Ok(self.do_inventory()),
            Command::Pickup { item } => Ok(self.do_pickup(&item)),
            Command::Attack => Ok(self.do_attack()),
            Command::Save { path } => self.do_save(&path),
            Command::Load { path } => self.do_load(&path),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Quit => {
                self.ending = Some(Ending::Quit);
                Ok("Thank you for playing. Goodbye!".to_string())
            }
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    fn do_move(&mut self, direction: Option<Direction>) -> String {
        let from = self.player.current_room;
        let to = direction.and_then(|d| self.world.room(from).exits.neighbor(d));
        let Some(to) = to else {
            return "You can't go that way.".to_string();
        };

        // Scripted gates, checked per (from, to) pair. A failed gate aborts
        // the move with no state change at all.
        match (from, to) {
            (0, 1) => {
                if !self.player.has_item("Sword") {
                    return "You cannot move to Goblins' Hell without a sword.".to_string();
                }
                // One-shot bonus for first braving the goblins.
                if !self.player.sword_bonus_granted {
                    self.player.strength += 10;
                    self.player.sword_bonus_granted = true;
                }
            }
            (1, 2) => {
                if !self.player.flags.killed_goblin {
                    return "You cannot move to Witch's Holley until you kill the goblin!"
                        .to_string();
                }
            }
            (1, 3) => {
                if !self.player.has_item("Key") {
                    return "You cannot move to the Treasure Room without the key.".to_string();
                }
            }
            (1, 4) => {
                if !self.player.has_item("Armor") {
                    return "You cannot move to the Final Boss room without the armor!".to_string();
                }
            }
            _ => {}
        }

        self.player.current_room = to;
        if to == 3 {
            self.player.flags.set(StoryFlag::VisitedTreasure);
        }
        format!("You move to {}.", self.world.room(to).name)
    }

    fn do_look(&self) -> String {
        let index = self.player.current_room;
        let room = self.world.room(index);

        // Post-kill override: only once the matching flag is set and the
        // creature is actually gone.
        let description = POST_KILL_TEXT
            .iter()
            .find(|(i, flag, _)| *i == index && self.player.flags.get(*flag))
            .filter(|_| room.creature.is_none())
            .map_or(room.description.as_str(), |&(_, _, text)| text);

        let mut output = description.to_string();
        if !room.items.is_empty() {
            output.push_str(&format!("\nItems: {}", room.items.join(", ")));
        }
        if let Some(creature) = &room.creature {
            output.push_str(&format!(
                "\nCreature: {} (Health: {})",
                creature.name, creature.health
            ));
        }
        output
    }

    fn do_inventory(&self) -> String {
        if self.player.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut output = "Inventory:".to_string();
        for item in &self.player.inventory {
            output.push_str(&format!("\n- {item}"));
        }
        output
    }

    fn do_pickup(&mut self, item: &str) -> String {
        let index = self.player.current_room;
        let Some(pos) = self.world.room(index).find_item(item) else {
            return "Item not found.".to_string();
        };

        let name = self.world.room(index).items[pos].clone();
        if !self.player.add_item(name.clone()) {
            return "You can't carry more items!".to_string();
        }

        let room = self.world.room_mut(index);
        room.items.swap_remove(pos);
        if index == 0 {
            room.description = "You are in the Dungeon Entrance. Let's go!".to_string();
        }
        if name.eq_ignore_ascii_case("Armor") {
            self.player.flags.set(StoryFlag::HasArmor);
        }
        format!("You picked up {name}.")
    }

    fn do_attack(&mut self) -> String {
        let room = self.world.room_mut(self.player.current_room);
        if !room.has_living_creature() {
            return "No creature to attack!".to_string();
        }
        let Some(creature) = room.creature.as_mut() else {
            return "No creature to attack!".to_string();
        };

        // Combat runs to completion in one call; no command can interrupt
        // a fight once it starts.
        let name = creature.name.clone();
        let mut lines = Vec::new();
        while self.player.health > 0 && creature.health > 0 {
            creature.health -= self.player.strength;
            lines.push(format!(
                "You hit the {}. Its health is now {}.",
                name, creature.health
            ));
            if creature.health > 0 {
                self.player.health -= 5;
                lines.push(format!(
                    "The {} hits you. Your health is now {}.",
                    name, self.player.health
                ));
            }
        }

        if self.player.is_dead() {
            self.ending = Some(Ending::Died);
            lines.push("You died. Game over!".to_string());
        } else {
            room.creature = None;
            if let Some(flag) = defeat_trigger(&name) {
                self.player.flags.set(flag);
            }
            lines.push(format!("You defeated the {name}!"));
        }
        lines.join("\n")
    }

    fn do_save(&self, path: &str) -> GameResult<String> {
        save::write(Path::new(path), &self.world, &self.player)?;
        Ok(format!("Game saved to {path}."))
    }

    fn do_load(&mut self, path: &str) -> GameResult<String> {
        // Parse and validate the whole file before touching any state, so a
        // bad save leaves the running game exactly as it was.
        let file = save::read(Path::new(path))?;
        self.world = World::from_rooms(file.rooms);
        self.player = file.player;
        Ok(format!("Game loaded from {path}."))
    }
}
