//! ASCII rendering of the maze grid.
//!
//! Pure read-only view: `#` wall, `.` corridor, `o` room, `+` the start
//! room, `@` the player overlay.

use crate::types::{CellState, Pos};
use crate::worldgen::Grid;

pub fn render_map(grid: &Grid, player: Option<Pos>) -> String {
    let mut out = String::with_capacity((grid.columns() + 1) * grid.rows());
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.columns() as i32 {
            let pos = Pos { x, y };
            let glyph = if player == Some(pos) {
                '@'
            } else {
                match grid.at(pos) {
                    CellState::Wall => '#',
                    CellState::Path => '.',
                    CellState::Room => 'o',
                    CellState::Start => '+',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
