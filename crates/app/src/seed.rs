//! Command-line handling and runtime seed entropy for the game binary.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub seed: SeedChoice,
    pub save_dir: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn parse_args(args: &[String], generated_seed: u64) -> Result<CliOptions, String> {
    let mut selected_seed = None;
    let mut save_dir = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            set_seed(&mut selected_seed, parse_seed_value(value)?)?;
            index += 2;
            continue;
        }
        if let Some(value) = argument.strip_prefix("--seed=") {
            set_seed(&mut selected_seed, parse_seed_value(value)?)?;
            index += 1;
            continue;
        }

        if argument == "--save-dir" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --save-dir".to_string());
            };
            set_save_dir(&mut save_dir, value)?;
            index += 2;
            continue;
        }
        if let Some(value) = argument.strip_prefix("--save-dir=") {
            set_save_dir(&mut save_dir, value)?;
            index += 1;
            continue;
        }

        return Err(format!("unknown argument '{argument}'"));
    }

    Ok(CliOptions {
        seed: match selected_seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        save_dir,
    })
}

fn set_seed(slot: &mut Option<u64>, seed: u64) -> Result<(), String> {
    if slot.is_some() {
        return Err("seed provided more than once".to_string());
    }
    *slot = Some(seed);
    Ok(())
}

fn set_save_dir(slot: &mut Option<PathBuf>, value: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err("save dir provided more than once".to_string());
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
