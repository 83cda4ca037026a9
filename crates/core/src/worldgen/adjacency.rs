//! Resolves per-direction room links by marching rays through the corridors.

use std::collections::BTreeMap;

use crate::types::{CellState, Direction, Pos, RoomId};

use super::WorldGenError;
use super::grid::Grid;
use super::model::{Exits, RoomRecord};

pub(super) fn resolve(
    grid: &Grid,
    room_positions: &[Pos],
) -> Result<BTreeMap<RoomId, RoomRecord>, WorldGenError> {
    let ids: BTreeMap<Pos, RoomId> =
        room_positions.iter().enumerate().map(|(index, &pos)| (pos, RoomId(index))).collect();

    let mut rooms = BTreeMap::new();
    for (index, &pos) in room_positions.iter().enumerate() {
        let id = RoomId(index);
        let mut exits = Exits::default();
        for direction in Direction::ALL {
            exits.set(direction, march(grid, &ids, pos, direction));
        }
        rooms.insert(id, RoomRecord { id, pos, exits });
    }

    validate_symmetry(&rooms)?;
    Ok(rooms)
}

/// Walk cell-by-cell from `from` in `direction` until something decides the
/// link: a wall (or the grid edge) means no exit, a room cell names the
/// neighbor, plain corridor keeps the march going.
fn march(grid: &Grid, ids: &BTreeMap<Pos, RoomId>, from: Pos, direction: Direction) -> Option<RoomId> {
    let mut pos = from.step(direction);
    loop {
        if !grid.in_bounds(pos) {
            return None;
        }
        let cell = grid.at(pos);
        if cell == CellState::Wall {
            return None;
        }
        if cell.is_room() {
            return ids.get(&pos).copied();
        }
        pos = pos.step(direction);
    }
}

/// Corridors are undirected, so every resolved link must have its mirror.
/// A missing mirror is a resolver or pattern-table defect.
fn validate_symmetry(rooms: &BTreeMap<RoomId, RoomRecord>) -> Result<(), WorldGenError> {
    for (&id, record) in rooms {
        for direction in Direction::ALL {
            let Some(neighbor) = record.exits.get(direction) else {
                continue;
            };
            let mirrored = rooms.get(&neighbor).and_then(|other| other.exits.get(direction.opposite()));
            if mirrored != Some(id) {
                return Err(WorldGenError::AsymmetricExit { from: id, to: neighbor, direction });
            }
        }
    }
    Ok(())
}
