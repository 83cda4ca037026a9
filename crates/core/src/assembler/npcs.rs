//! Denizen generation: a named wanderer with a handful of carried gear.

use rand_chacha::ChaCha8Rng;

use crate::content::{EPITHETS, GIVEN_NAMES};
use crate::rng::{pick, roll_range};

use super::items::{WeightProfile, forge_item};
use super::{ItemSpec, NpcSpec};

const CARRIED_ITEMS: (i32, i32) = (1, 3);

pub(crate) fn forge_npc(rng: &mut ChaCha8Rng) -> NpcSpec {
    let name = format!("{} {}", pick(rng, &GIVEN_NAMES), pick(rng, &EPITHETS));
    let description = format!("{name} watches you from the shadows, unhurried.");

    let item_count = roll_range(rng, CARRIED_ITEMS.0, CARRIED_ITEMS.1);
    let items: Vec<ItemSpec> =
        (0..item_count).map(|_| forge_item(rng, WeightProfile::Npc)).collect();

    let equipped =
        items.iter().filter(|item| item.stats.equipable).map(|item| item.name.clone()).collect();

    NpcSpec { name, description, items, equipped }
}
