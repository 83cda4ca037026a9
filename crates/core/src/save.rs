//! JSON save files, one per player name.
//!
//! Layout: a versioned envelope holding the serialized world body plus a
//! SHA-256 hex digest of the body's canonical JSON. Writes go through a
//! temp file and rename so a crash never leaves a torn save. Loading
//! validates the version and the digest before any state is rebuilt.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use slotmap::SlotMap;

use crate::state::{GameState, Hero, Item, ItemId, Npc, NpcId, Room};
use crate::types::{Pos, RoomId};
use crate::worldgen::Grid;
use crate::worldgen::model::Exits;

pub const SAVE_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub format_version: u16,
    pub player: String,
    pub world: SavedWorld,
    pub sha256_hex: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedWorld {
    pub grid: Grid,
    pub rooms: Vec<SavedRoom>,
    pub hero: SavedHero,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedRoom {
    pub id: RoomId,
    pub name: String,
    pub pos: Pos,
    pub exits: Exits,
    pub description: String,
    pub items: Vec<Item>,
    pub npcs: Vec<SavedNpc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedNpc {
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    /// Worn items, referenced by name within `items`.
    pub equipped: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedHero {
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub equipped: Vec<String>,
    pub location: RoomId,
}

#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    /// The file is not valid JSON for this format.
    Malformed(String),
    UnsupportedVersion(u16),
    /// The body does not match its recorded digest.
    IntegrityMismatch,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save I/O error: {e}"),
            Self::Malformed(message) => write!(f, "malformed save file: {message}"),
            Self::UnsupportedVersion(version) => {
                write!(f, "save format version {version} is not supported")
            }
            Self::IntegrityMismatch => {
                write!(f, "save file body does not match its integrity digest")
            }
        }
    }
}

impl std::error::Error for SaveError {}

/// `hex(SHA-256(canonical body JSON))`.
fn body_digest(world: &SavedWorld) -> Result<String, serde_json::Error> {
    let body_json = serde_json::to_string(world)?;
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    let result = hasher.finalize();
    Ok(format!("{result:064x}"))
}

/// File name for a player, with the name reduced to a safe slug.
pub fn save_path(dir: &Path, player: &str) -> PathBuf {
    dir.join(format!("{}.json", slug(player)))
}

pub fn find_save(dir: &Path, player: &str) -> Option<PathBuf> {
    let path = save_path(dir, player);
    path.exists().then_some(path)
}

fn slug(player: &str) -> String {
    let cleaned: String = player
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() { "stranger".to_string() } else { cleaned }
}

pub fn write_save(dir: &Path, state: &GameState) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let world = snapshot(state);
    let sha256_hex = body_digest(&world).map_err(io::Error::other)?;
    let file = SaveFile {
        format_version: SAVE_FORMAT_VERSION,
        player: state.hero.name.clone(),
        world,
        sha256_hex,
    };

    let path = save_path(dir, &state.hero.name);
    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(&file).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;

    Ok(path)
}

pub fn load_save(path: &Path) -> Result<GameState, SaveError> {
    let content = fs::read_to_string(path).map_err(SaveError::Io)?;
    let file: SaveFile =
        serde_json::from_str(&content).map_err(|e| SaveError::Malformed(e.to_string()))?;

    if file.format_version != SAVE_FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion(file.format_version));
    }

    let expected = body_digest(&file.world).map_err(|e| SaveError::Malformed(e.to_string()))?;
    if expected != file.sha256_hex {
        return Err(SaveError::IntegrityMismatch);
    }

    if !file.world.rooms.iter().any(|room| room.id == file.world.hero.location) {
        return Err(SaveError::Malformed(format!(
            "hero location {} names a missing room",
            file.world.hero.location
        )));
    }

    Ok(restore(file.world))
}

pub fn snapshot(state: &GameState) -> SavedWorld {
    let rooms = state
        .rooms
        .values()
        .map(|room| SavedRoom {
            id: room.id,
            name: room.name.clone(),
            pos: room.pos,
            exits: room.exits,
            description: room.description.clone(),
            items: collect_items(state, &room.items),
            npcs: room
                .npcs
                .iter()
                .filter_map(|&npc_id| state.npcs.get(npc_id))
                .map(|npc| SavedNpc {
                    name: npc.name.clone(),
                    description: npc.description.clone(),
                    items: collect_items(state, &npc.inventory),
                    equipped: npc
                        .equipped
                        .iter()
                        .map(|&id| state.item_name(id).to_string())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let hero = SavedHero {
        name: state.hero.name.clone(),
        description: state.hero.description.clone(),
        items: collect_items(state, &state.hero.inventory),
        equipped: state.hero.equipped.iter().map(|&id| state.item_name(id).to_string()).collect(),
        location: state.hero.location,
    };

    SavedWorld { grid: state.grid.clone(), rooms, hero }
}

fn collect_items(state: &GameState, ids: &[ItemId]) -> Vec<Item> {
    ids.iter().filter_map(|&id| state.items.get(id)).cloned().collect()
}

pub fn restore(world: SavedWorld) -> GameState {
    let mut items: SlotMap<ItemId, Item> = SlotMap::with_key();
    let mut npcs: SlotMap<NpcId, Npc> = SlotMap::with_key();
    let mut rooms = BTreeMap::new();

    for saved in world.rooms {
        let room_items: Vec<ItemId> =
            saved.items.into_iter().map(|item| items.insert(item)).collect();

        let room_npcs: Vec<NpcId> = saved
            .npcs
            .into_iter()
            .map(|npc| {
                let (inventory, equipped) = insert_items(&mut items, npc.items, &npc.equipped);
                npcs.insert(Npc {
                    name: npc.name,
                    description: npc.description,
                    inventory,
                    equipped,
                    home: saved.id,
                })
            })
            .collect();

        rooms.insert(
            saved.id,
            Room {
                id: saved.id,
                name: saved.name,
                pos: saved.pos,
                exits: saved.exits,
                description: saved.description,
                items: room_items,
                npcs: room_npcs,
            },
        );
    }

    let (inventory, equipped) = insert_items(&mut items, world.hero.items, &world.hero.equipped);
    let hero = Hero {
        name: world.hero.name,
        description: world.hero.description,
        inventory,
        equipped,
        location: world.hero.location,
    };

    GameState { grid: world.grid, rooms, items, npcs, hero }
}

fn insert_items(
    arena: &mut SlotMap<ItemId, Item>,
    owned: Vec<Item>,
    equipped_names: &[String],
) -> (Vec<ItemId>, Vec<ItemId>) {
    let mut inventory = Vec::new();
    let mut equipped = Vec::new();
    for item in owned {
        let worn = equipped_names.contains(&item.name);
        let id = arena.insert(item);
        inventory.push(id);
        if worn {
            equipped.push(id);
        }
    }
    (inventory, equipped)
}
