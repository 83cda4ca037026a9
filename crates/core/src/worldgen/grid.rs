//! Maze grid storage and the dimension rules that size it.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::rng::pick;
use crate::types::{CellState, Pos};

use super::WorldGenError;

/// Logical maze dimensions. The backing grid is `(width + 1) x (height + 1)`
/// cells so every odd-coordinate candidate keeps a wall ring around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    width: usize,
    height: usize,
}

impl Dims {
    /// Widths offered to a new game; height is derived so the carvable area
    /// stays roughly constant across choices.
    pub const PRODUCTION_WIDTHS: [usize; 4] = [10, 12, 14, 18];
    pub const CARVE_AREA: usize = 148;

    pub fn new(width: usize, height: usize) -> Result<Self, WorldGenError> {
        let dims = Self { width, height };
        if dims.candidates().is_empty() {
            return Err(WorldGenError::EmptyGrid { width, height });
        }
        Ok(dims)
    }

    /// Production sizing: draw a width and derive the height.
    pub fn pick(rng: &mut ChaCha8Rng) -> Self {
        let width = *pick(rng, &Self::PRODUCTION_WIDTHS);
        Self { width, height: Self::CARVE_AREA / width }
    }

    /// Production sizing for an explicit width, validated.
    pub fn from_width(width: usize) -> Result<Self, WorldGenError> {
        let height = if width == 0 { 0 } else { Self::CARVE_AREA / width };
        Self::new(width, height)
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn height(self) -> usize {
        self.height
    }

    pub fn columns(self) -> usize {
        self.width + 1
    }

    pub fn rows(self) -> usize {
        self.height + 1
    }

    /// Every odd-odd position in bounds: the only cells that can ever
    /// become rooms.
    pub fn candidates(self) -> Vec<Pos> {
        let mut cells = Vec::new();
        for y in (1..=self.height as i32).step_by(2) {
            for x in (1..=self.width as i32).step_by(2) {
                cells.push(Pos { x, y });
            }
        }
        cells
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn filled(dims: Dims) -> Self {
        Self {
            columns: dims.columns(),
            rows: dims.rows(),
            cells: vec![CellState::Wall; dims.columns() * dims.rows()],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.columns && (pos.y as usize) < self.rows
    }

    /// Cell state at `pos`; anything out of bounds reads as wall.
    pub fn at(&self, pos: Pos) -> CellState {
        if !self.in_bounds(pos) {
            return CellState::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, state: CellState) {
        if !self.in_bounds(pos) {
            return;
        }
        let index = self.index(pos);
        self.cells[index] = state;
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.columns + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn production_heights_follow_the_area_rule() {
        for width in Dims::PRODUCTION_WIDTHS {
            let dims = Dims::from_width(width).expect("production widths are valid");
            assert_eq!(dims.height(), Dims::CARVE_AREA / width);
        }
    }

    #[test]
    fn pick_always_chooses_a_production_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..40 {
            let dims = Dims::pick(&mut rng);
            assert!(Dims::PRODUCTION_WIDTHS.contains(&dims.width()));
        }
    }

    #[test]
    fn candidates_are_all_odd_coordinates() {
        let dims = Dims::new(10, 14).expect("valid dims");
        let candidates = dims.candidates();
        assert_eq!(candidates.len(), 5 * 7);
        for pos in candidates {
            assert_eq!(pos.x % 2, 1);
            assert_eq!(pos.y % 2, 1);
        }
    }

    #[test]
    fn dimensions_without_candidates_are_rejected() {
        assert!(matches!(Dims::new(0, 14), Err(WorldGenError::EmptyGrid { .. })));
        assert!(matches!(Dims::new(10, 0), Err(WorldGenError::EmptyGrid { .. })));
        assert!(matches!(Dims::from_width(200), Err(WorldGenError::EmptyGrid { .. })));
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let grid = Grid::filled(Dims::new(4, 4).expect("valid dims"));
        assert_eq!(grid.at(Pos { x: -1, y: 0 }), CellState::Wall);
        assert_eq!(grid.at(Pos { x: 0, y: 99 }), CellState::Wall);
    }

    #[test]
    fn set_then_read_round_trips() {
        let mut grid = Grid::filled(Dims::new(4, 4).expect("valid dims"));
        grid.set(Pos { x: 1, y: 1 }, CellState::Path);
        assert_eq!(grid.at(Pos { x: 1, y: 1 }), CellState::Path);
        // Out-of-bounds writes are ignored rather than panicking.
        grid.set(Pos { x: 50, y: 50 }, CellState::Path);
    }
}
