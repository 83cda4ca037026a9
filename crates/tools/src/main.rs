use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use warren_core::assembler::AssembledWorld;
use warren_core::render::render_map;
use warren_core::save;
use warren_core::state::GameState;
use warren_core::worldgen::WorldSkeleton;
use warren_core::{CellState, Dims, Direction, RoomId, generate};

#[derive(Parser)]
#[command(author, version, about = "World generation tools for warren", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the carved maze and its room graph for a seed
    Preview {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Grid width; height follows the production area rule. Defaults to
        /// the seed-drawn production width.
        #[arg(long)]
        width: Option<usize>,
    },
    /// Dump a fully assembled world as save-body JSON
    Dump {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        pretty: bool,
    },
    /// Sweep seeds and validate the generator invariants
    Check {
        #[arg(long, default_value_t = 0)]
        start_seed: u64,
        #[arg(short = 'n', long, default_value_t = 100)]
        count: u64,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Preview { seed, width } => preview(seed, width),
        Commands::Dump { seed, pretty } => dump(seed, pretty),
        Commands::Check { start_seed, count } => check(start_seed, count),
    }
}

fn skeleton_for(seed: u64, width: Option<usize>) -> Result<(Dims, WorldSkeleton)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dims = match width {
        Some(width) => Dims::from_width(width)
            .with_context(|| format!("width {width} does not make a usable maze"))?,
        None => Dims::pick(&mut rng),
    };
    let skeleton =
        generate(dims, &mut rng).with_context(|| format!("generation failed for seed {seed}"))?;
    Ok((dims, skeleton))
}

fn preview(seed: u64, width: Option<usize>) -> Result<()> {
    let (dims, skeleton) = skeleton_for(seed, width)?;

    println!(
        "seed {seed}: {}x{} grid, {} rooms",
        dims.width(),
        dims.height(),
        skeleton.rooms.len()
    );
    println!();
    print!("{}", render_map(&skeleton.grid, None));
    println!();

    for record in skeleton.rooms.values() {
        let exits: Vec<String> = Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                record.exits.get(direction).map(|neighbor| format!("{direction} -> {neighbor}"))
            })
            .collect();
        let exits = if exits.is_empty() { "sealed".to_string() } else { exits.join(", ") };
        println!("{} at ({}, {}): {exits}", record.id, record.pos.x, record.pos.y);
    }

    Ok(())
}

fn dump(seed: u64, pretty: bool) -> Result<()> {
    let world = AssembledWorld::generate(seed)
        .with_context(|| format!("generation failed for seed {seed}"))?;
    let body = save::snapshot(&GameState::from_world(world, "preview"));

    let json = if pretty {
        serde_json::to_string_pretty(&body).context("serializing world dump")?
    } else {
        serde_json::to_string(&body).context("serializing world dump")?
    };
    println!("{json}");

    Ok(())
}

fn check(start_seed: u64, count: u64) -> Result<()> {
    for seed in start_seed..start_seed.saturating_add(count) {
        let (dims, skeleton) = skeleton_for(seed, None)?;
        validate(seed, dims, &skeleton)?;
    }
    println!("checked {count} seeds from {start_seed}: all invariants hold");
    Ok(())
}

fn validate(seed: u64, dims: Dims, skeleton: &WorldSkeleton) -> Result<()> {
    if skeleton.rooms.is_empty() {
        bail!("seed {seed}: no rooms generated");
    }

    for (index, id) in skeleton.rooms.keys().enumerate() {
        if *id != RoomId(index) {
            bail!("seed {seed}: room ids are not contiguous at index {index}");
        }
    }

    for pos in dims.candidates() {
        if skeleton.grid.at(pos) == CellState::Wall {
            bail!("seed {seed}: orphan candidate cell at ({}, {})", pos.x, pos.y);
        }
    }

    for (&id, record) in &skeleton.rooms {
        for direction in Direction::ALL {
            let Some(neighbor) = record.exits.get(direction) else {
                continue;
            };
            let mirrored = skeleton
                .rooms
                .get(&neighbor)
                .and_then(|other| other.exits.get(direction.opposite()));
            if mirrored != Some(id) {
                bail!("seed {seed}: one-way link {id} {direction} {neighbor}");
            }
        }
    }

    let mut open = vec![RoomId(0)];
    let mut seen: BTreeSet<RoomId> = open.iter().copied().collect();
    while let Some(id) = open.pop() {
        for direction in Direction::ALL {
            if let Some(neighbor) = skeleton.rooms[&id].exits.get(direction)
                && seen.insert(neighbor)
            {
                open.push(neighbor);
            }
        }
    }
    if seen.len() != skeleton.rooms.len() {
        bail!("seed {seed}: {} of {} rooms unreachable", skeleton.rooms.len() - seen.len(), skeleton.rooms.len());
    }

    Ok(())
}
