//! Command parsing for player input.

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

impl Direction {
    /// Parse a direction from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move through an exit of the current room.
    Move {
        /// The direction to move. `None` when the token after `move` is not
        /// a direction; the rules engine reports it as a blocked way, the
        /// same as a missing exit.
        direction: Option<Direction>,
    },
    /// Describe the current room.
    Look,
    /// Print the dungeon map.
    Map,
    /// List carried items.
    Inventory,
    /// Pick up an item from the current room.
    Pickup {
        /// The item name.
        item: String,
    },
    /// Attack the creature in the current room.
    Attack,
    /// Save the game to a file.
    Save {
        /// Target file path.
        path: String,
    },
    /// Load the game from a file.
    Load {
        /// Source file path.
        path: String,
    },
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Parse a line of player input into a command.
///
/// The verb is matched case-insensitively; arguments keep their original
/// spelling (item lookup is case-insensitive downstream, and file paths must
/// not be case-folded).
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("").to_lowercase();
    let rest = parts.next().map(str::trim).unwrap_or("");

    match verb.as_str() {
        "move" if !rest.is_empty() => Command::Move {
            direction: Direction::parse(rest),
        },
        "look" if rest.is_empty() => Command::Look,
        "map" if rest.is_empty() => Command::Map,
        "inventory" if rest.is_empty() => Command::Inventory,
        "pickup" if !rest.is_empty() => Command::Pickup {
            item: rest.to_string(),
        },
        "attack" if rest.is_empty() => Command::Attack,
        "save" if !rest.is_empty() => Command::Save {
            path: rest.to_string(),
        },
        "load" if !rest.is_empty() => Command::Load {
            path: rest.to_string(),
        },
        "help" if rest.is_empty() => Command::Help,
        "quit" if rest.is_empty() => Command::Quit,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_move_directions() {
        assert_eq!(
            parse_command("move right"),
            Command::Move {
                direction: Some(Direction::Right)
            }
        );
        assert_eq!(
            parse_command("MOVE Up"),
            Command::Move {
                direction: Some(Direction::Up)
            }
        );
    }

    #[test]
    fn parse_move_bad_direction_is_blocked_not_unknown() {
        assert_eq!(parse_command("move north"), Command::Move { direction: None });
    }

    #[test]
    fn parse_bare_move_is_unknown() {
        assert_eq!(
            parse_command("move"),
            Command::Unknown {
                input: "move".to_string()
            }
        );
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("map"), Command::Map);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("attack"), Command::Attack);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("QUIT"), Command::Quit);
    }

    #[test]
    fn parse_pickup_keeps_argument_spelling() {
        assert_eq!(
            parse_command("pickup SWORD"),
            Command::Pickup {
                item: "SWORD".to_string()
            }
        );
    }

    #[test]
    fn parse_save_load_keep_path_case() {
        assert_eq!(
            parse_command("save /tmp/MySave.json"),
            Command::Save {
                path: "/tmp/MySave.json".to_string()
            }
        );
        assert_eq!(
            parse_command("load /tmp/MySave.json"),
            Command::Load {
                path: "/tmp/MySave.json".to_string()
            }
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn parser_is_total(input in ".*") {
            // Every input maps to some command without panicking.
            let _ = parse_command(&input);
        }

        #[test]
        fn directions_parse_in_any_case(dir in "(?i)(up|down|left|right)") {
            prop_assert!(Direction::parse(&dir).is_some());
        }
    }
}
