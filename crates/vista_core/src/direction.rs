//! Cardinal directions and the turn algebra

use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four facings a player can have at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Default for Direction {
    fn default() -> Self {
        Self::North
    }
}

impl Direction {
    /// All directions in clockwise order starting at north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index in `0..4`, clockwise from north
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 4
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Quarter turn counter-clockwise
    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Quarter turn clockwise
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Half turn
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Lowercase name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "east" | "e" => Ok(Self::East),
            "south" | "s" => Ok(Self::South),
            "west" | "w" => Ok(Self::West),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_full_rotation() {
        for d in Direction::ALL {
            let mut facing = d;
            for _ in 0..4 {
                facing = facing.turn_right();
            }
            assert_eq!(facing, d);
        }
    }

    #[test]
    fn test_turn_values() {
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn test_parse() {
        assert_eq!("North".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::West));
        assert!("up".parse::<Direction>().is_err());
    }
}
