//! Player state: health, strength, inventory, and story flags.

use serde::{Deserialize, Serialize};

/// Maximum number of items the player can carry.
pub const INVENTORY_CAPACITY: usize = 5;
/// Health at the start of a new game.
pub const STARTING_HEALTH: i32 = 100;
/// Strength at the start of a new game.
pub const STARTING_STRENGTH: i32 = 15;

/// A narrative milestone recorded on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFlag {
    /// The player has entered the Treasure Room.
    VisitedTreasure,
    /// The Goblin has been defeated; unlocks Witch's Holley.
    KilledGoblin,
    /// The player has picked up the Armor.
    HasArmor,
    /// The Witch has been defeated.
    KilledWitch,
    /// The Final Boss has been defeated.
    KilledFinalBoss,
}

/// The player's story flags. Monotonic in normal play: set once, never
/// cleared except by loading a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryFlags {
    /// See [`StoryFlag::VisitedTreasure`].
    pub visited_treasure: bool,
    /// See [`StoryFlag::KilledGoblin`].
    pub killed_goblin: bool,
    /// See [`StoryFlag::HasArmor`].
    pub has_armor: bool,
    /// See [`StoryFlag::KilledWitch`].
    pub killed_witch: bool,
    /// See [`StoryFlag::KilledFinalBoss`].
    pub killed_final_boss: bool,
}

impl StoryFlags {
    /// Set a flag.
    pub fn set(&mut self, flag: StoryFlag) {
        match flag {
            StoryFlag::VisitedTreasure => self.visited_treasure = true,
            StoryFlag::KilledGoblin => self.killed_goblin = true,
            StoryFlag::HasArmor => self.has_armor = true,
            StoryFlag::KilledWitch => self.killed_witch = true,
            StoryFlag::KilledFinalBoss => self.killed_final_boss = true,
        }
    }

    /// Read a flag.
    pub fn get(&self, flag: StoryFlag) -> bool {
        match flag {
            StoryFlag::VisitedTreasure => self.visited_treasure,
            StoryFlag::KilledGoblin => self.killed_goblin,
            StoryFlag::HasArmor => self.has_armor,
            StoryFlag::KilledWitch => self.killed_witch,
            StoryFlag::KilledFinalBoss => self.killed_final_boss,
        }
    }
}

/// The player's mutable state for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Current health; the game ends when this reaches zero.
    pub health: i32,
    /// Damage dealt per combat round.
    pub strength: i32,
    /// Index of the room the player is in.
    pub current_room: usize,
    /// Carried item names, at most [`INVENTORY_CAPACITY`].
    pub inventory: Vec<String>,
    /// Narrative milestones.
    pub flags: StoryFlags,
    /// Whether the one-shot strength bonus for first entering Goblins' Hell
    /// has already been granted.
    pub sword_bonus_granted: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A fresh player at the dungeon entrance.
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            strength: STARTING_STRENGTH,
            current_room: 0,
            inventory: Vec::with_capacity(INVENTORY_CAPACITY),
            flags: StoryFlags::default(),
            sword_bonus_granted: false,
        }
    }

    /// Check for a carried item, case-insensitively.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.eq_ignore_ascii_case(name))
    }

    /// True when the inventory is at capacity.
    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= INVENTORY_CAPACITY
    }

    /// Add an item to the inventory. Returns `false` (and leaves the
    /// inventory unchanged) when the pack is full; capacity is enforced
    /// here and nowhere else.
    pub fn add_item(&mut self, name: String) -> bool {
        if self.inventory_full() {
            return false;
        }
        self.inventory.push(name);
        true
    }

    /// True once health has dropped to zero or below.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_defaults() {
        let p = Player::new();
        assert_eq!(p.health, 100);
        assert_eq!(p.strength, 15);
        assert_eq!(p.current_room, 0);
        assert!(p.inventory.is_empty());
        assert_eq!(p.flags, StoryFlags::default());
        assert!(!p.is_dead());
    }

    #[test]
    fn has_item_is_case_insensitive() {
        let mut p = Player::new();
        assert!(p.add_item("Sword".to_string()));
        assert!(p.has_item("sword"));
        assert!(p.has_item("SWORD"));
        assert!(!p.has_item("key"));
    }

    #[test]
    fn inventory_capacity_enforced() {
        let mut p = Player::new();
        for i in 0..INVENTORY_CAPACITY {
            assert!(p.add_item(format!("item-{i}")));
        }
        assert!(p.inventory_full());
        assert!(!p.add_item("one too many".to_string()));
        assert_eq!(p.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn flags_set_and_get() {
        let mut flags = StoryFlags::default();
        assert!(!flags.get(StoryFlag::KilledGoblin));
        flags.set(StoryFlag::KilledGoblin);
        assert!(flags.get(StoryFlag::KilledGoblin));
        assert!(!flags.get(StoryFlag::KilledWitch));
    }
}
