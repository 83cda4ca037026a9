//! The read-eval-print session: everything the terminal player sees.
//!
//! The loop is written against `BufRead`/`Write` so integration tests can
//! script entire sessions through in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use warren_core::assembler::AssembledWorld;
use warren_core::state::GameState;
use warren_core::{Command, Game, Reply, find_save, load_save, parse, write_save};

pub const TITLE: &str = "WARREN, a maze of burrows and forgotten things";

/// Stride mixed into the seed when the player starts over, so one session
/// stays reproducible from its initial seed.
const RESEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct SessionConfig {
    pub seed: u64,
    pub save_dir: PathBuf,
}

pub fn run_session<R, W>(config: &SessionConfig, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to {TITLE}.")?;
    write!(out, "What's your name, stranger? ")?;
    out.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(());
    };
    let name = if name.is_empty() { "stranger".to_string() } else { name };

    let mut seed = config.seed;
    let Some(mut game) = open_world(config, &name, seed, out)? else {
        return Ok(());
    };

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };

        let command = match parse(&line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "{error}\n")?;
                continue;
            }
        };

        match game.apply(command) {
            Reply::Text(text) => writeln!(out, "{text}\n")?,
            Reply::Quit(text) => {
                writeln!(out, "{text}")?;
                break;
            }
            Reply::SaveRequested => match write_save(&config.save_dir, game.state()) {
                Ok(path) => writeln!(out, "Your game was saved as {}.\n", display_name(&path))?,
                Err(error) => writeln!(out, "Saving failed: {error}\n")?,
            },
            Reply::RestartRequested => {
                if confirm_restart(input, out)? {
                    seed = seed.wrapping_add(RESEED_STRIDE);
                    game = new_game(&name, seed, out)?;
                } else {
                    writeln!(out, "Perhaps another time.\n")?;
                }
            }
        }
    }

    Ok(())
}

/// Load the player's save when one exists, otherwise generate a new world.
/// A save that fails validation ends the session rather than silently
/// clobbering it with a fresh world.
fn open_world<W: Write>(
    config: &SessionConfig,
    name: &str,
    seed: u64,
    out: &mut W,
) -> io::Result<Option<Game>> {
    if let Some(path) = find_save(&config.save_dir, name) {
        return match load_save(&path) {
            Ok(state) => {
                writeln!(out, "\nWelcome back, {}.\n", state.hero.name)?;
                let mut game = Game::new(state);
                print_look(&mut game, out)?;
                Ok(Some(game))
            }
            Err(error) => {
                writeln!(out, "\nYour save could not be read: {error}")?;
                writeln!(out, "Remove {} to start over.", path.display())?;
                Ok(None)
            }
        };
    }
    Ok(Some(new_game(name, seed, out)?))
}

fn new_game<W: Write>(name: &str, seed: u64, out: &mut W) -> io::Result<Game> {
    let world = AssembledWorld::generate(seed).map_err(io::Error::other)?;
    let mut game = Game::new(GameState::from_world(world, name));
    writeln!(out, "\nGreetings, {name}! You tumble into the warren.\n")?;
    print_look(&mut game, out)?;
    Ok(game)
}

fn print_look<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    if let Reply::Text(text) = game.apply(Command::Look) {
        writeln!(out, "{text}\n")?;
    }
    Ok(())
}

fn confirm_restart<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    writeln!(out, "You will lose unsaved progress.")?;
    loop {
        write!(out, "Start over? [y/n] ")?;
        out.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "That is not a valid response.")?,
        }
    }
}

/// One trimmed line; `None` on end of input. Case folding is left to the
/// command parser so player names keep their spelling.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn display_name(path: &Path) -> String {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("your save").to_string()
}
