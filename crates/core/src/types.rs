use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        self.step_by(direction, 1)
    }

    pub fn step_by(self, direction: Direction, cells: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self { x: self.x + dx * cells, y: self.y + dy * cells }
    }
}

/// The four navigable directions. Rendering puts row zero at the top, so
/// north decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of one grid cell. `Start` is the start room's cell; it counts as a
/// room everywhere room semantics apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Wall,
    Path,
    Room,
    Start,
}

impl CellState {
    pub fn is_room(self) -> bool {
        matches!(self, Self::Room | Self::Start)
    }
}

/// Stable room identity, assigned sequentially in carve order. Saves and
/// player-facing text both key off the `"room N"` rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    pub attack: i32,
    pub strength: i32,
    pub weight: i32,
    pub luck: i32,
    pub equipable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Jewelry,
    Tool,
    Relic,
    Sundry,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Jewelry => "jewelry",
            Self::Tool => "tool",
            Self::Relic => "relic",
            Self::Sundry => "sundry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_pair_up() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn stepping_twice_matches_a_double_stride() {
        let origin = Pos { x: 3, y: 5 };
        for direction in Direction::ALL {
            assert_eq!(origin.step(direction).step(direction), origin.step_by(direction, 2));
        }
    }

    #[test]
    fn room_ids_render_in_save_key_format() {
        assert_eq!(RoomId(0).to_string(), "room 0");
        assert_eq!(RoomId(17).to_string(), "room 17");
    }

    #[test]
    fn start_cells_count_as_rooms() {
        assert!(CellState::Room.is_room());
        assert!(CellState::Start.is_room());
        assert!(!CellState::Path.is_room());
        assert!(!CellState::Wall.is_room());
    }
}
