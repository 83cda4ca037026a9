//! Item forging: weighted kind selection plus table-driven naming.

use rand_chacha::ChaCha8Rng;

use crate::content::{CONDITIONS, ITEM_KINDS, LEGENDARY_SUFFIXES, MATERIALS, stat_ranges};
use crate::rng::{one_in, pick, roll_range, weighted_index};
use crate::types::{ItemKind, ItemStats};

use super::ItemSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WeightProfile {
    /// Stocking a room: anything can turn up, mostly junk.
    Room,
    /// Outfitting a denizen: gear they would plausibly carry.
    Npc,
}

pub(crate) fn forge_item(rng: &mut ChaCha8Rng, profile: WeightProfile) -> ItemSpec {
    let weights: Vec<u32> = ITEM_KINDS
        .iter()
        .map(|spec| match profile {
            WeightProfile::Room => spec.room_weight,
            WeightProfile::Npc => spec.npc_weight,
        })
        .collect();
    let spec = &ITEM_KINDS[weighted_index(rng, &weights)];
    let base = *pick(rng, spec.bases);

    let mut name = String::new();
    if one_in(rng, 3) {
        name.push_str(*pick(rng, &CONDITIONS));
        name.push(' ');
    }
    if one_in(rng, 3) {
        name.push_str(*pick(rng, &MATERIALS));
        name.push(' ');
    }
    name.push_str(base);

    let legendary = matches!(spec.kind, ItemKind::Weapon | ItemKind::Jewelry | ItemKind::Relic)
        && one_in(rng, 12);
    if legendary {
        name.push(' ');
        name.push_str(*pick(rng, &LEGENDARY_SUFFIXES));
    }

    let ranges = stat_ranges(spec.kind);
    let mut stats = ItemStats {
        attack: roll_range(rng, ranges.attack.0, ranges.attack.1),
        strength: roll_range(rng, ranges.strength.0, ranges.strength.1),
        weight: roll_range(rng, ranges.weight.0, ranges.weight.1),
        luck: roll_range(rng, ranges.luck.0, ranges.luck.1),
        equipable: ranges.equipable,
    };
    if legendary {
        stats.luck += 5;
    }

    let description = if legendary {
        format!("A legendary {}. It hums faintly when no one is looking.", spec.kind.label())
    } else {
        format!("An unremarkable {}, as these things go.", spec.kind.label())
    };

    ItemSpec { name, kind: spec.kind, description, stats }
}
