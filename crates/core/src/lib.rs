pub mod assembler;
pub mod command;
pub mod content;
pub mod game;
pub mod render;
pub mod save;
pub mod state;
pub mod types;
pub mod worldgen;

mod rng;

pub use assembler::AssembledWorld;
pub use command::{Command, ParseError, parse};
pub use game::{Game, Reply};
pub use save::{SaveError, find_save, load_save, write_save};
pub use state::GameState;
pub use types::*;
pub use worldgen::{Dims, Grid, WorldGenError, WorldSkeleton, generate};
