//! Public data model for generated world skeletons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellState, Direction, Pos, RoomId};

use super::grid::Grid;

/// Per-direction neighbor links for one room. `None` is "no exit".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exits {
    pub north: Option<RoomId>,
    pub south: Option<RoomId>,
    pub east: Option<RoomId>,
    pub west: Option<RoomId>,
}

impl Exits {
    pub fn get(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, neighbor: Option<RoomId>) {
        match direction {
            Direction::North => self.north = neighbor,
            Direction::South => self.south = neighbor,
            Direction::East => self.east = neighbor,
            Direction::West => self.west = neighbor,
        }
    }

    /// Directions with a neighbor, in fixed north/south/east/west order.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|&d| self.get(d).is_some()).collect()
    }

    pub fn degree(&self) -> usize {
        self.open_directions().len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: RoomId,
    pub pos: Pos,
    pub exits: Exits,
}

/// The finished generator output: an immutable grid plus the room graph,
/// keyed by the sequential carve-order identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSkeleton {
    pub grid: Grid,
    pub rooms: BTreeMap<RoomId, RoomRecord>,
}

impl WorldSkeleton {
    pub fn start_room(&self) -> &RoomRecord {
        self.rooms.get(&RoomId(0)).expect("a generated world always has room 0")
    }

    /// Stable byte encoding of the whole skeleton, for fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.columns() as u32).to_le_bytes());
        bytes.extend((self.grid.rows() as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(match cell {
                CellState::Wall => 0,
                CellState::Path => 1,
                CellState::Room => 2,
                CellState::Start => 3,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for record in self.rooms.values() {
            bytes.extend((record.id.0 as u32).to_le_bytes());
            bytes.extend(record.pos.x.to_le_bytes());
            bytes.extend(record.pos.y.to_le_bytes());
            for direction in Direction::ALL {
                match record.exits.get(direction) {
                    Some(neighbor) => {
                        bytes.push(1);
                        bytes.extend((neighbor.0 as u32).to_le_bytes());
                    }
                    None => bytes.push(0),
                }
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::super::grid::Dims;
    use super::*;

    fn lone_room_skeleton() -> WorldSkeleton {
        let mut grid = Grid::filled(Dims::new(4, 4).expect("valid dims"));
        let pos = Pos { x: 1, y: 1 };
        grid.set(pos, CellState::Start);
        let record = RoomRecord { id: RoomId(0), pos, exits: Exits::default() };
        WorldSkeleton { grid, rooms: BTreeMap::from([(RoomId(0), record)]) }
    }

    #[test]
    fn exits_round_trip_through_get_and_set() {
        let mut exits = Exits::default();
        exits.set(Direction::East, Some(RoomId(4)));
        exits.set(Direction::North, Some(RoomId(2)));
        assert_eq!(exits.get(Direction::East), Some(RoomId(4)));
        assert_eq!(exits.get(Direction::North), Some(RoomId(2)));
        assert_eq!(exits.get(Direction::South), None);
        assert_eq!(exits.open_directions(), vec![Direction::North, Direction::East]);
        assert_eq!(exits.degree(), 2);
    }

    #[test]
    fn fingerprint_reacts_to_any_cell_change() {
        let skeleton = lone_room_skeleton();
        let baseline = skeleton.fingerprint();

        let mut altered = skeleton.clone();
        altered.grid.set(Pos { x: 2, y: 2 }, CellState::Path);
        assert_ne!(baseline, altered.fingerprint());
    }

    #[test]
    fn fingerprint_reacts_to_exit_changes() {
        let skeleton = lone_room_skeleton();
        let baseline = skeleton.fingerprint();

        let mut altered = skeleton.clone();
        if let Some(record) = altered.rooms.get_mut(&RoomId(0)) {
            record.exits.set(Direction::West, Some(RoomId(0)));
        }
        assert_ne!(baseline, altered.fingerprint());
    }

    #[test]
    fn start_room_is_room_zero() {
        let skeleton = lone_room_skeleton();
        assert_eq!(skeleton.start_room().id, RoomId(0));
    }
}
