//! Promotes carved cells to rooms by local neighbor-pattern matching.

use crate::types::{CellState, Direction, Pos};

use super::WorldGenError;
use super::grid::Grid;

const W: CellState = CellState::Wall;
const P: CellState = CellState::Path;

/// Neighbor patterns, ordered `[north, south, east, west]`, that qualify a
/// carved candidate as a room: dead ends, corners, and T- or four-way
/// intersections. Straight-through corridor cells (exactly two opposite
/// carved neighbors) stay plain corridor.
///
/// Candidate cells sit on odd-odd coordinates, so their orthogonal
/// neighbors are corridor-only cells that are never rooms themselves; the
/// table over wall/path states is exhaustive.
const QUALIFYING_PATTERNS: [[CellState; 4]; 13] = [
    // dead ends
    [P, W, W, W],
    [W, P, W, W],
    [W, W, P, W],
    [W, W, W, P],
    // corners
    [P, W, P, W],
    [P, W, W, P],
    [W, P, P, W],
    [W, P, W, P],
    // T intersections
    [W, P, P, P],
    [P, W, P, P],
    [P, P, W, P],
    [P, P, P, W],
    // four-way
    [P, P, P, P],
];

pub(super) struct Classified {
    pub(super) grid: Grid,
    /// Room cells in carve order; index in this list is the room's identity.
    pub(super) room_positions: Vec<Pos>,
}

pub(super) fn classify(mut grid: Grid, carve_order: &[Pos]) -> Result<Classified, WorldGenError> {
    let mut room_positions = Vec::new();

    for &pos in carve_order {
        let neighborhood = [
            grid.at(pos.step(Direction::North)),
            grid.at(pos.step(Direction::South)),
            grid.at(pos.step(Direction::East)),
            grid.at(pos.step(Direction::West)),
        ];
        if QUALIFYING_PATTERNS.contains(&neighborhood) {
            grid.set(pos, CellState::Room);
            room_positions.push(pos);
        }
    }

    let Some(&start) = room_positions.first() else {
        return Err(WorldGenError::NoRoomsClassified);
    };
    grid.set(start, CellState::Start);

    Ok(Classified { grid, room_positions })
}

#[cfg(test)]
mod tests {
    use super::super::grid::Dims;
    use super::*;

    fn carve_cells(cells: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::filled(Dims::new(6, 6).expect("valid dims"));
        for &(x, y) in cells {
            grid.set(Pos { x, y }, CellState::Path);
        }
        grid
    }

    #[test]
    fn cross_corridor_promotes_intersection_and_dead_end_tips() {
        // A plus shape centered on (3, 3): vertical corridor x=3, horizontal
        // corridor y=3. Candidates on it: the center and the four tips.
        let grid = carve_cells(&[
            (3, 1),
            (3, 2),
            (3, 3),
            (3, 4),
            (3, 5),
            (1, 3),
            (2, 3),
            (4, 3),
            (5, 3),
        ]);
        let carve_order =
            [(3, 3), (3, 1), (3, 5), (1, 3), (5, 3)].map(|(x, y)| Pos { x, y }).to_vec();

        let classified = classify(grid, &carve_order).expect("cross yields rooms");

        assert_eq!(classified.room_positions, carve_order);
        assert_eq!(classified.grid.at(Pos { x: 3, y: 3 }), CellState::Start);
        for pos in &carve_order[1..] {
            assert_eq!(classified.grid.at(*pos), CellState::Room);
        }
    }

    #[test]
    fn straight_corridor_cells_stay_plain_path() {
        // One vertical corridor: tips are dead ends, the middle candidate is
        // a straight-through segment and must not become a room.
        let grid = carve_cells(&[(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);
        let carve_order = [(3, 1), (3, 3), (3, 5)].map(|(x, y)| Pos { x, y }).to_vec();

        let classified = classify(grid, &carve_order).expect("tips qualify");

        assert_eq!(
            classified.room_positions,
            vec![Pos { x: 3, y: 1 }, Pos { x: 3, y: 5 }],
        );
        assert_eq!(classified.grid.at(Pos { x: 3, y: 3 }), CellState::Path);
        assert_eq!(classified.grid.at(Pos { x: 3, y: 1 }), CellState::Start);
        assert_eq!(classified.grid.at(Pos { x: 3, y: 5 }), CellState::Room);
    }

    #[test]
    fn first_classified_cell_in_carve_order_becomes_the_start() {
        let grid = carve_cells(&[(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);
        // Same corridor, reversed carve order: the far tip is now first.
        let carve_order = [(3, 5), (3, 3), (3, 1)].map(|(x, y)| Pos { x, y }).to_vec();

        let classified = classify(grid, &carve_order).expect("tips qualify");

        assert_eq!(classified.room_positions[0], Pos { x: 3, y: 5 });
        assert_eq!(classified.grid.at(Pos { x: 3, y: 5 }), CellState::Start);
    }

    #[test]
    fn zero_rooms_is_a_loud_failure() {
        // A lone carved candidate with no carved neighbors matches no
        // pattern; an empty classification must error, not produce an empty
        // world.
        let grid = carve_cells(&[(3, 3)]);
        let result = classify(grid, &[Pos { x: 3, y: 3 }]);
        assert!(matches!(result, Err(WorldGenError::NoRoomsClassified)));
    }

    #[test]
    fn pattern_table_excludes_exactly_the_straight_runs() {
        assert_eq!(QUALIFYING_PATTERNS.len(), 13);
        assert!(!QUALIFYING_PATTERNS.contains(&[P, P, W, W]));
        assert!(!QUALIFYING_PATTERNS.contains(&[W, W, P, P]));
        assert!(!QUALIFYING_PATTERNS.contains(&[W, W, W, W]));
    }
}
