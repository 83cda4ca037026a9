//! Immutable content tables feeding the world assembler.
//!
//! Tables are plain const data; the assembler combines them with RNG draws,
//! so everything here is deterministic configuration rather than logic.

use crate::types::ItemKind;

pub struct ItemKindSpec {
    pub kind: ItemKind,
    /// Selection weight when stocking a room.
    pub room_weight: u32,
    /// Selection weight when outfitting a denizen.
    pub npc_weight: u32,
    pub bases: &'static [&'static str],
}

pub const ITEM_KINDS: [ItemKindSpec; 6] = [
    ItemKindSpec {
        kind: ItemKind::Weapon,
        room_weight: 8,
        npc_weight: 8,
        bases: &["sword", "axe", "dagger", "spear", "maul", "shortbow"],
    },
    ItemKindSpec {
        kind: ItemKind::Armor,
        room_weight: 7,
        npc_weight: 7,
        bases: &["helm", "cuirass", "buckler", "greaves", "travel cloak"],
    },
    ItemKindSpec {
        kind: ItemKind::Jewelry,
        room_weight: 3,
        npc_weight: 0,
        bases: &["ring", "amulet", "torc", "signet"],
    },
    ItemKindSpec {
        kind: ItemKind::Tool,
        room_weight: 5,
        npc_weight: 5,
        bases: &["lantern", "coil of rope", "pickaxe", "tinderbox", "spade"],
    },
    ItemKindSpec {
        kind: ItemKind::Relic,
        room_weight: 10,
        npc_weight: 10,
        bases: &["idol", "reliquary", "grimoire", "chalice"],
    },
    ItemKindSpec {
        kind: ItemKind::Sundry,
        room_weight: 35,
        npc_weight: 0,
        bases: &[
            "gnawed bone",
            "candle stub",
            "mouldy loaf",
            "tangle of twine",
            "cracked flask",
            "river pebble",
        ],
    },
];

pub const CONDITIONS: [&str; 8] =
    ["rusty", "tarnished", "gleaming", "battered", "ancient", "chipped", "polished", "crooked"];

pub const MATERIALS: [&str; 8] =
    ["iron", "bronze", "oak", "bone", "silver", "obsidian", "leather", "copper"];

/// Of-phrases that mark an item as legendary and upgrade its kind label.
pub const LEGENDARY_SUFFIXES: [&str; 6] = [
    "of the drowned king",
    "of the last ember",
    "of whispering rot",
    "of the pale warden",
    "of endless hunger",
    "of the first dawn",
];

pub struct StatRanges {
    pub attack: (i32, i32),
    pub strength: (i32, i32),
    pub weight: (i32, i32),
    pub luck: (i32, i32),
    pub equipable: bool,
}

pub fn stat_ranges(kind: ItemKind) -> StatRanges {
    match kind {
        ItemKind::Weapon => StatRanges {
            attack: (4, 12),
            strength: (1, 6),
            weight: (2, 9),
            luck: (0, 3),
            equipable: true,
        },
        ItemKind::Armor => StatRanges {
            attack: (0, 1),
            strength: (4, 10),
            weight: (4, 12),
            luck: (0, 2),
            equipable: true,
        },
        ItemKind::Jewelry => StatRanges {
            attack: (0, 0),
            strength: (0, 2),
            weight: (1, 1),
            luck: (2, 9),
            equipable: true,
        },
        ItemKind::Tool => StatRanges {
            attack: (1, 3),
            strength: (2, 5),
            weight: (1, 7),
            luck: (0, 4),
            equipable: false,
        },
        ItemKind::Relic => StatRanges {
            attack: (0, 2),
            strength: (0, 3),
            weight: (2, 6),
            luck: (3, 8),
            equipable: false,
        },
        ItemKind::Sundry => StatRanges {
            attack: (0, 1),
            strength: (0, 1),
            weight: (1, 3),
            luck: (0, 2),
            equipable: false,
        },
    }
}

pub const GIVEN_NAMES: [&str; 10] =
    ["Brynn", "Maudie", "Osric", "Tilda", "Gammel", "Petra", "Ansel", "Wren", "Hodge", "Ilsa"];

pub const EPITHETS: [&str; 8] = [
    "the Unlucky",
    "the Mosstongued",
    "of the Narrow Stair",
    "the Half-Remembered",
    "the Lamplighter",
    "the Threadbare",
    "the Burrow-Born",
    "the Quiet",
];

pub const ROOM_BASES: [&str; 6] = [
    "You are in a low burrow with a packed-earth floor.",
    "You are in a vaulted chamber of dripping stone.",
    "You are in a crooked alcove gnawed out of the clay.",
    "You are in a round hall ringed with root-columns.",
    "You are in a damp cell where the air tastes of iron.",
    "You are in a dusty gallery hung with dead lanterns.",
];

/// Flavor lines by exit count; a passage list is appended separately.
pub const DEAD_END_LINES: [&str; 2] = [
    "The tunnel simply stops here.",
    "Whoever dug this gave up partway.",
];

pub const FORK_LINES: [&str; 4] = [
    "A draught slips between the openings.",
    "The tunnel splits around a knuckle of rock.",
    "Two mouths of darkness face each other.",
    "Scratch marks on the wall point both ways.",
];

pub const BRANCH_LINES: [&str; 3] = [
    "Passages branch off in several directions.",
    "The burrow opens into a tangle of tunnels.",
    "Echoes argue about which way is out.",
];

pub const CROSSROADS_LINES: [&str; 2] = [
    "Every direction offers its own darkness.",
    "This is a crossroads; the air moves four ways.",
];

/// Inventory hints: one line for a single item, a pool for cluttered rooms.
pub const SINGLE_ITEM_HINT: &str = "Something small catches the lamplight.";

pub const CLUTTERED_HINTS: [&str; 4] = [
    "Debris is strewn everywhere; some of it might be worth keeping.",
    "Someone left in a hurry and left their things behind.",
    "The floor is a midden of odds and ends.",
    "Heaps of abandoned gear molder in the corners.",
];
