//! Compass directions: a closed set of named values with exhaustive dispatch.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction in declaration order.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East  => "east",
            Direction::West  => "west",
        }
    }

    pub fn travel_message(self) -> &'static str {
        match self {
            Direction::North => "Traveling North",
            Direction::South => "Traveling South",
            Direction::East  => "Traveling East",
            Direction::West  => "Traveling West",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Case-insensitive parse from the lowercase name.
    fn from_str(s: &str) -> Result<Self, String> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid direction {s:?}"))
    }
}

/// Body of the "Enums" section.
pub fn direction_lines() -> Vec<String> {
    let travel_direction = Direction::North;
    vec![travel_direction.travel_message().to_owned()]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
