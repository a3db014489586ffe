//! The fixed five-room world model.
//!
//! The dungeon topology is hardcoded: five rooms wired by directional exits,
//! with their starting items and creatures. Rooms are mutated in place by
//! the rules engine (items picked up, creatures defeated, descriptions
//! rewritten on scripted triggers) and live for the whole session.

use serde::{Deserialize, Serialize};

use crate::command::Direction;

/// Number of rooms in the dungeon.
pub const ROOM_COUNT: usize = 5;
/// Maximum number of items a room can hold.
pub const ROOM_ITEM_CAPACITY: usize = 5;

/// A combat opponent bound to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Display name, e.g. "Goblin".
    pub name: String,
    /// Remaining health. The creature is removed from its room when this
    /// drops to zero; name and health are never cleared independently.
    pub health: i32,
}

/// Exits of a room: each direction either leads to a room index or nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exits {
    /// Room above, if any.
    pub up: Option<usize>,
    /// Room below, if any.
    pub down: Option<usize>,
    /// Room to the left, if any.
    pub left: Option<usize>,
    /// Room to the right, if any.
    pub right: Option<usize>,
}

impl Exits {
    /// The neighboring room in the given direction, if that exit exists.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// One of the five fixed locations forming the map graph.
///
/// Fields are plain data; invariants (item capacity, creature clearing) are
/// enforced by the rules engine in [`crate::session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Display name, e.g. "Goblins' Hell".
    pub name: String,
    /// Narrative description, replaced wholesale on scripted triggers.
    pub description: String,
    /// Directional connections to other rooms.
    pub exits: Exits,
    /// Items lying in the room. Removal is unordered (`swap_remove`), so
    /// listing order is not stable across pickups.
    pub items: Vec<String>,
    /// The room's creature, while it lives.
    pub creature: Option<Creature>,
}

impl Room {
    fn new(name: &str, description: &str, exits: Exits) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            exits,
            items: Vec::with_capacity(ROOM_ITEM_CAPACITY),
            creature: None,
        }
    }

    fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    fn with_creature(mut self, name: &str, health: i32) -> Self {
        self.creature = Some(Creature {
            name: name.to_string(),
            health,
        });
        self
    }

    /// Position of an item in the room, matched case-insensitively.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.eq_ignore_ascii_case(name))
    }

    /// True while the room holds a creature with health above zero.
    pub fn has_living_creature(&self) -> bool {
        self.creature.as_ref().is_some_and(|c| c.health > 0)
    }
}

/// The dungeon: all five rooms, owned and mutated by the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Build the starting dungeon with the hardcoded topology.
    pub fn starting() -> Self {
        let rooms = vec![
            Room::new(
                "Dungeon Entrance",
                "You are in the Dungeon Entrance. A sword lies on the ground.",
                Exits {
                    right: Some(1),
                    ..Exits::default()
                },
            )
            .with_item("Sword"),
            Room::new(
                "Goblins' Hell",
                "You are in Goblins' Hell. A goblin is here, ready to attack!",
                Exits {
                    up: Some(2),
                    down: Some(3),
                    left: Some(0),
                    right: Some(4),
                },
            )
            .with_creature("Goblin", 60),
            Room::new(
                "Witch's Holley",
                "You are in Witch's Holley. A scary witch looms over you, cackling!",
                Exits {
                    down: Some(1),
                    ..Exits::default()
                },
            )
            .with_item("Key")
            .with_creature("Witch", 100),
            Room::new(
                "Treasure Room",
                "You are in the Treasure Room. Glittering treasures are everywhere!",
                Exits {
                    up: Some(1),
                    ..Exits::default()
                },
            )
            .with_item("Armor"),
            Room::new(
                "Final Boss",
                "You are in the Final Boss room. The final boss awaits!",
                Exits {
                    left: Some(1),
                    ..Exits::default()
                },
            )
            .with_creature("Final Boss", 300),
        ];
        Self { rooms }
    }

    /// Rebuild a world from saved rooms.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True if the world has no rooms (never the case for a started game).
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Get a room by index.
    ///
    /// # Panics
    /// Panics if the index is out of range; the session only ever stores
    /// indices handed out by [`Exits::neighbor`].
    pub fn room(&self, index: usize) -> &Room {
        &self.rooms[index]
    }

    /// Get a mutable room by index. Same indexing contract as [`Self::room`].
    pub fn room_mut(&mut self, index: usize) -> &mut Room {
        &mut self.rooms[index]
    }

    /// Iterate over all rooms in index order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_topology_matches_map() {
        let world = World::starting();
        assert_eq!(world.len(), ROOM_COUNT);

        assert_eq!(world.room(0).exits.right, Some(1));
        assert_eq!(world.room(0).exits.left, None);

        assert_eq!(world.room(1).exits.up, Some(2));
        assert_eq!(world.room(1).exits.down, Some(3));
        assert_eq!(world.room(1).exits.left, Some(0));
        assert_eq!(world.room(1).exits.right, Some(4));

        assert_eq!(world.room(2).exits.down, Some(1));
        assert_eq!(world.room(3).exits.up, Some(1));
        assert_eq!(world.room(4).exits.left, Some(1));
    }

    #[test]
    fn starting_placement() {
        let world = World::starting();

        assert_eq!(world.room(0).items, vec!["Sword"]);
        assert!(world.room(0).creature.is_none());

        let goblin = world.room(1).creature.as_ref().unwrap();
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.health, 60);

        assert_eq!(world.room(2).items, vec!["Key"]);
        assert_eq!(world.room(2).creature.as_ref().unwrap().health, 100);

        assert_eq!(world.room(3).items, vec!["Armor"]);
        assert!(world.room(3).creature.is_none());

        assert_eq!(world.room(4).creature.as_ref().unwrap().name, "Final Boss");
        assert_eq!(world.room(4).creature.as_ref().unwrap().health, 300);
    }

    #[test]
    fn find_item_is_case_insensitive() {
        let world = World::starting();
        assert_eq!(world.room(0).find_item("sword"), Some(0));
        assert_eq!(world.room(0).find_item("SWORD"), Some(0));
        assert_eq!(world.room(0).find_item("shield"), None);
    }

    #[test]
    fn neighbor_lookup() {
        let world = World::starting();
        let exits = world.room(1).exits;
        assert_eq!(exits.neighbor(Direction::Up), Some(2));
        assert_eq!(exits.neighbor(Direction::Right), Some(4));
        assert_eq!(world.room(0).exits.neighbor(Direction::Up), None);
    }
}
