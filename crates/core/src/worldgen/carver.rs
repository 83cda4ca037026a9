//! Growth-tree corridor carving.
//!
//! The walk starts on a random candidate cell and repeatedly carves a
//! two-cell link (the intervening wall cell plus the next candidate) in a
//! random open direction. On a dead end it steps a single entry back in the
//! carve history rather than popping a stack: `history[max(index - 1, 1)]`.
//! The history interleaves corridor and candidate cells, so one back-step
//! lands on the corridor cell of the previous link and the next failed probe
//! round walks it onto the candidate before it. That exact rule shapes which
//! branches become dead ends and must not be replaced with conventional DFS
//! backtracking.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::rng::{shuffle, uniform_index};
use crate::types::{CellState, Direction, Pos};

use super::WorldGenError;
use super::grid::{Dims, Grid};

pub(super) struct CarvedMaze {
    pub(super) grid: Grid,
    /// Candidate cells in the order they were first carved. Room identities
    /// derive from this order.
    pub(super) carve_order: Vec<Pos>,
}

pub(super) fn carve(dims: Dims, rng: &mut ChaCha8Rng) -> Result<CarvedMaze, WorldGenError> {
    let all_candidates = dims.candidates();
    if all_candidates.is_empty() {
        return Err(WorldGenError::EmptyGrid { width: dims.width(), height: dims.height() });
    }

    let start = all_candidates[uniform_index(rng, all_candidates.len())];
    let mut candidates: BTreeSet<Pos> = all_candidates.into_iter().collect();
    candidates.remove(&start);

    let mut grid = Grid::filled(dims);
    grid.set(start, CellState::Path);

    let mut history = vec![start];
    let mut carve_order = vec![start];
    let mut position = start;

    // The candidate set must shrink over any full backtrack sweep; if it
    // stops shrinking the walk is wedged (possible only on degenerate
    // single-row/column lattices, or a carving defect) and we fail instead
    // of spinning.
    let total = candidates.len() + 1;
    let round_limit = total * total * 8 + 64;
    let mut rounds = 0usize;

    while !candidates.is_empty() {
        rounds += 1;
        if rounds > round_limit {
            return Err(WorldGenError::CarveStalled { uncarved: candidates.len() });
        }

        let mut probes: [(Pos, Pos); 4] =
            Direction::ALL.map(|d| (position.step(d), position.step_by(d, 2)));
        shuffle(rng, &mut probes);

        if let Some(&(wall, next)) = probes.iter().find(|(_, next)| candidates.contains(next)) {
            grid.set(wall, CellState::Path);
            grid.set(next, CellState::Path);
            candidates.remove(&next);
            history.push(wall);
            history.push(next);
            carve_order.push(next);
            position = next;
        } else {
            let here = history
                .iter()
                .position(|&cell| cell == position)
                .expect("current position is always in carve history");
            let back = here.saturating_sub(1).max(1);
            let Some(&backtracked) = history.get(back) else {
                return Err(WorldGenError::CarveStalled { uncarved: candidates.len() });
            };
            position = backtracked;
        }
    }

    Ok(CarvedMaze { grid, carve_order })
}
