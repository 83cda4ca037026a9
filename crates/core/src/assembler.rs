//! World assembly: turns a bare skeleton into furnished rooms.
//!
//! Rooms are decorated in id order from a single sequential RNG, so an
//! assembled world is as reproducible as the skeleton underneath it.

mod descriptions;
mod items;
mod npcs;

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::rng::roll_range;
use crate::types::{ItemKind, ItemStats, RoomId};
use crate::worldgen::model::RoomRecord;
use crate::worldgen::{self, Dims, Grid, WorldGenError, WorldSkeleton};

pub(crate) use items::WeightProfile;

/// How many items a freshly assembled room holds.
const ROOM_ITEMS: (i32, i32) = (1, 7);
/// How many denizens may share a room.
const ROOM_NPCS: (i32, i32) = (0, 2);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub stats: ItemStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpcSpec {
    pub name: String,
    pub description: String,
    pub items: Vec<ItemSpec>,
    /// Names of held items worn rather than carried.
    pub equipped: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledRoom {
    pub record: RoomRecord,
    pub name: String,
    pub description: String,
    pub items: Vec<ItemSpec>,
    pub npcs: Vec<NpcSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledWorld {
    pub grid: Grid,
    pub rooms: BTreeMap<RoomId, AssembledRoom>,
}

impl AssembledWorld {
    /// Full production pipeline: pick dimensions, generate a skeleton, and
    /// furnish it, all from one seed.
    pub fn generate(seed: u64) -> Result<Self, WorldGenError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dims = Dims::pick(&mut rng);
        let skeleton = worldgen::generate(dims, &mut rng)?;
        Ok(Self::assemble(skeleton, &mut rng))
    }

    pub fn assemble(skeleton: WorldSkeleton, rng: &mut ChaCha8Rng) -> Self {
        let WorldSkeleton { grid, rooms } = skeleton;

        let mut assembled = BTreeMap::new();
        for (id, record) in rooms {
            let item_count = roll_range(rng, ROOM_ITEMS.0, ROOM_ITEMS.1);
            let items: Vec<ItemSpec> =
                (0..item_count).map(|_| items::forge_item(rng, WeightProfile::Room)).collect();

            let npc_count = roll_range(rng, ROOM_NPCS.0, ROOM_NPCS.1);
            let npcs: Vec<NpcSpec> = (0..npc_count).map(|_| npcs::forge_npc(rng)).collect();

            let description = descriptions::compose(&record, items.len(), rng);

            assembled.insert(
                id,
                AssembledRoom { record, name: id.to_string(), description, items, npcs },
            );
        }

        Self { grid, rooms: assembled }
    }

    pub fn start_room(&self) -> &AssembledRoom {
        self.rooms.get(&RoomId(0)).expect("an assembled world always has room 0")
    }
}
