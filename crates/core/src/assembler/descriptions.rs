//! Room description composition from the fixed sentence tables.

use rand_chacha::ChaCha8Rng;

use crate::content::{
    BRANCH_LINES, CLUTTERED_HINTS, CROSSROADS_LINES, DEAD_END_LINES, FORK_LINES, ROOM_BASES,
    SINGLE_ITEM_HINT,
};
use crate::rng::pick;
use crate::types::Direction;
use crate::worldgen::model::RoomRecord;

pub(crate) fn compose(record: &RoomRecord, item_count: usize, rng: &mut ChaCha8Rng) -> String {
    let mut lines = vec![(*pick(rng, &ROOM_BASES)).to_string()];

    let open = record.exits.open_directions();
    let flavor = match open.len() {
        0 => "No passages lead out of this place.",
        1 => *pick(rng, &DEAD_END_LINES),
        2 => *pick(rng, &FORK_LINES),
        3 => *pick(rng, &BRANCH_LINES),
        _ => *pick(rng, &CROSSROADS_LINES),
    };
    lines.push(flavor.to_string());
    if !open.is_empty() {
        lines.push(format!("Passages lead {}.", join_directions(&open)));
    }

    if item_count == 1 {
        lines.push(SINGLE_ITEM_HINT.to_string());
    } else if item_count > 2 {
        lines.push((*pick(rng, &CLUTTERED_HINTS)).to_string());
    }

    lines.join("\n")
}

fn join_directions(directions: &[Direction]) -> String {
    let names: Vec<&str> = directions.iter().map(|direction| direction.name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}
