//! Live play state built from an assembled world.
//!
//! Entities live in slotmap arenas; rooms and inventories hold ids into
//! them. The generated grid itself stays immutable during play; the
//! hero's position is a cursor over the room graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use crate::assembler::{AssembledWorld, ItemSpec, NpcSpec};
use crate::types::{ItemKind, ItemStats, Pos, RoomId};
use crate::worldgen::Grid;
use crate::worldgen::model::Exits;

new_key_type! {
    pub struct ItemId;
    pub struct NpcId;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub stats: ItemStats,
}

impl From<ItemSpec> for Item {
    fn from(spec: ItemSpec) -> Self {
        Self { name: spec.name, kind: spec.kind, description: spec.description, stats: spec.stats }
    }
}

#[derive(Clone, Debug)]
pub struct Npc {
    pub name: String,
    pub description: String,
    pub inventory: Vec<ItemId>,
    pub equipped: Vec<ItemId>,
    pub home: RoomId,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub pos: Pos,
    pub exits: Exits,
    pub description: String,
    pub items: Vec<ItemId>,
    pub npcs: Vec<NpcId>,
}

#[derive(Clone, Debug)]
pub struct Hero {
    pub name: String,
    pub description: String,
    pub inventory: Vec<ItemId>,
    pub equipped: Vec<ItemId>,
    pub location: RoomId,
}

#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub rooms: BTreeMap<RoomId, Room>,
    pub items: SlotMap<ItemId, Item>,
    pub npcs: SlotMap<NpcId, Npc>,
    pub hero: Hero,
}

impl GameState {
    /// Wire an assembled world into playable state, seeding the hero in the
    /// start room.
    pub fn from_world(world: AssembledWorld, hero_name: &str) -> Self {
        let mut items: SlotMap<ItemId, Item> = SlotMap::with_key();
        let mut npcs: SlotMap<NpcId, Npc> = SlotMap::with_key();
        let mut rooms = BTreeMap::new();

        for (id, assembled) in world.rooms {
            let room_items: Vec<ItemId> =
                assembled.items.into_iter().map(|spec| items.insert(spec.into())).collect();

            let room_npcs: Vec<NpcId> = assembled
                .npcs
                .into_iter()
                .map(|spec| insert_npc(&mut items, &mut npcs, spec, id))
                .collect();

            rooms.insert(
                id,
                Room {
                    id,
                    name: assembled.name,
                    pos: assembled.record.pos,
                    exits: assembled.record.exits,
                    description: assembled.description,
                    items: room_items,
                    npcs: room_npcs,
                },
            );
        }

        let hero = Hero {
            name: hero_name.to_string(),
            description: "the newest stranger in the warren".to_string(),
            inventory: Vec::new(),
            equipped: Vec::new(),
            location: RoomId(0),
        };

        Self { grid: world.grid, rooms, items, npcs, hero }
    }

    pub fn current_room(&self) -> &Room {
        self.rooms.get(&self.hero.location).expect("hero location always names a real room")
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        self.rooms.get_mut(&self.hero.location).expect("hero location always names a real room")
    }

    pub fn hero_pos(&self) -> Pos {
        self.current_room().pos
    }

    pub fn item_name(&self, id: ItemId) -> &str {
        self.items.get(id).map(|item| item.name.as_str()).unwrap_or("nothing")
    }
}

fn insert_npc(
    items: &mut SlotMap<ItemId, Item>,
    npcs: &mut SlotMap<NpcId, Npc>,
    spec: NpcSpec,
    home: RoomId,
) -> NpcId {
    let mut inventory = Vec::new();
    let mut equipped = Vec::new();
    for item_spec in spec.items {
        let worn = spec.equipped.contains(&item_spec.name);
        let id = items.insert(item_spec.into());
        inventory.push(id);
        if worn {
            equipped.push(id);
        }
    }
    npcs.insert(Npc { name: spec.name, description: spec.description, inventory, equipped, home })
}
