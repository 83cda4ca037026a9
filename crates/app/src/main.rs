use std::io;
use std::process::ExitCode;

use warren::repl::{SessionConfig, run_session};
use warren::save_dir::default_save_dir;
use warren::seed::{generate_runtime_seed, parse_args};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: warren [--seed <number>] [--save-dir <path>]");
            return ExitCode::FAILURE;
        }
    };

    let config = SessionConfig {
        seed: options.seed.value(),
        save_dir: options.save_dir.unwrap_or_else(default_save_dir),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = run_session(&config, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("session failed: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
