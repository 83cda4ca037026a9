//! Command application against live game state.

use xxhash_rust::xxh3::xxh3_64;

use crate::command::Command;
use crate::render::render_map;
use crate::save;
use crate::state::{GameState, ItemId};
use crate::types::Direction;

/// What the session loop should do with an applied command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Print the farewell and end the session.
    Quit(String),
    /// The caller owns persistence; write the save and report the path.
    SaveRequested,
    /// The caller owns confirmation and regeneration.
    RestartRequested,
}

const HELP_TEXT: &str = "\
You wander the warren one command at a time:
  north / south / east / west (or n/s/e/w, go <dir>)  walk that way
  look                                                describe this room
  examine                                             list what lies here
  take [item] / drop [item]                           bare form moves everything
  inventory                                           what you carry
  map                                                 sketch the maze
  verbose                                             toggle item stats in listings
  save                                                write your progress
  restart                                             abandon this warren for a new one
  quit                                                leave";

pub struct Game {
    state: GameState,
    verbose: bool,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Self { state, verbose: false }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn apply(&mut self, command: Command) -> Reply {
        match command {
            Command::Move(direction) => Reply::Text(self.move_hero(direction)),
            Command::Look => Reply::Text(self.look()),
            Command::Examine => Reply::Text(self.examine()),
            Command::Inventory => Reply::Text(self.inventory()),
            Command::Take(target) => Reply::Text(self.take(target)),
            Command::Drop(target) => Reply::Text(self.drop(target)),
            Command::Map => Reply::Text(render_map(&self.state.grid, Some(self.state.hero_pos()))),
            Command::ToggleVerbose => Reply::Text(self.toggle_verbose()),
            Command::Help => Reply::Text(HELP_TEXT.to_string()),
            Command::Xyzzy => Reply::Text("A hollow voice says: plugh.".to_string()),
            Command::Save => Reply::SaveRequested,
            Command::Restart => Reply::RestartRequested,
            Command::Quit => {
                Reply::Quit(format!("Thanks for wandering the warren, {}!", self.state.hero.name))
            }
        }
    }

    /// Stable digest of the whole live state, for determinism checks.
    pub fn fingerprint(&self) -> u64 {
        let body = serde_json::to_string(&save::snapshot(&self.state))
            .expect("live state always serializes");
        xxh3_64(body.as_bytes())
    }

    fn move_hero(&mut self, direction: Direction) -> String {
        let Some(destination) = self.state.current_room().exits.get(direction) else {
            return format!("You cannot go {direction} from here.");
        };
        self.state.hero.location = destination;
        self.look()
    }

    fn look(&self) -> String {
        let room = self.state.current_room();
        let mut out = room.description.clone();
        for &npc_id in &room.npcs {
            if let Some(npc) = self.state.npcs.get(npc_id) {
                out.push('\n');
                out.push_str(&npc.description);
            }
        }
        out
    }

    fn examine(&self) -> String {
        let room = self.state.current_room();
        self.list_items(&room.name, &room.items)
    }

    fn inventory(&self) -> String {
        let hero_name = self.state.hero.name.clone();
        self.list_items(&hero_name, &self.state.hero.inventory)
    }

    fn list_items(&self, owner: &str, ids: &[ItemId]) -> String {
        if ids.is_empty() {
            return "There's nothing here.".to_string();
        }
        let mut out = format!("{owner} inventory:");
        for &id in ids {
            let Some(item) = self.state.items.get(id) else {
                continue;
            };
            out.push_str("\n    ");
            out.push_str(&item.name);
            if self.verbose {
                out.push_str(&format!("\n        kind: {}", item.kind.label()));
                out.push_str(&format!("\n        attack: {}", item.stats.attack));
                out.push_str(&format!("\n        strength: {}", item.stats.strength));
                out.push_str(&format!("\n        weight: {}", item.stats.weight));
                out.push_str(&format!("\n        luck: {}", item.stats.luck));
                out.push_str(&format!("\n        equipable: {}", item.stats.equipable));
            }
        }
        out
    }

    fn take(&mut self, target: Option<String>) -> String {
        match target {
            None => {
                let ids: Vec<ItemId> = self.state.current_room_mut().items.drain(..).collect();
                if ids.is_empty() {
                    return "There's nothing here to take.".to_string();
                }
                let mut out = String::new();
                for id in ids {
                    out.push_str(&format!("You took {}.\n", self.state.item_name(id)));
                    self.state.hero.inventory.push(id);
                }
                out.pop();
                out
            }
            Some(name) => {
                let index = self
                    .state
                    .current_room()
                    .items
                    .iter()
                    .position(|&id| self.state.items.get(id).is_some_and(|item| item.name == name));
                match index {
                    Some(index) => {
                        let id = self.state.current_room_mut().items.remove(index);
                        self.state.hero.inventory.push(id);
                        format!("You took {name}. You took it well.")
                    }
                    None => format!("There is no {name} here."),
                }
            }
        }
    }

    fn drop(&mut self, target: Option<String>) -> String {
        match target {
            None => {
                let ids: Vec<ItemId> = self.state.hero.inventory.drain(..).collect();
                if ids.is_empty() {
                    return "You aren't carrying anything.".to_string();
                }
                let mut out = String::new();
                for id in ids {
                    out.push_str(&format!("You dropped {}.\n", self.state.item_name(id)));
                    self.state.current_room_mut().items.push(id);
                }
                out.pop();
                out
            }
            Some(name) => {
                let index = self
                    .state
                    .hero
                    .inventory
                    .iter()
                    .position(|&id| self.state.items.get(id).is_some_and(|item| item.name == name));
                match index {
                    Some(index) => {
                        let id = self.state.hero.inventory.remove(index);
                        self.state.current_room_mut().items.push(id);
                        format!("You dropped {name}. How clumsy.")
                    }
                    None => format!("There is no {name} in your inventory."),
                }
            }
        }
    }

    fn toggle_verbose(&mut self) -> String {
        self.verbose = !self.verbose;
        if self.verbose {
            "verbose inventory: ON".to_string()
        } else {
            "verbose inventory: OFF".to_string()
        }
    }
}
