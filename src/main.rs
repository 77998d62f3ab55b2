//! Actionbar Rogue - Entry Point
//!
//! Interactive terminal driver. Reads one command per line and prints the
//! messages each command produces.

use actionbar_rogue::core::config::{GameConfig, DEFAULT_CONFIG_PATH};
use actionbar_rogue::game::Game;
use actionbar_rogue::{GameError, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Turn-based roguelite combat on a timing bar
#[derive(Parser, Debug)]
#[command(name = "actionbar-rogue")]
struct Args {
    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Game config file (roster, log size)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("actionbar_rogue=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                GameConfig::load(&default_path)?
            } else {
                GameConfig::default()
            }
        }
    };

    let mut game = Game::with_config(config, args.seed)?;
    tracing::info!(seed = game.seed(), "Actionbar Rogue starting...");

    println!("\n=== ACTIONBAR ROGUE ===");
    println!("Seed: {}", game.seed());
    println!();
    println!("Commands:");
    println!("  new / n           - Start a new run");
    println!("  choose <i> / c    - Pick encounter option i");
    println!("  turn [pos] / t    - Resolve a combat turn (optional lock position 0-1)");
    println!("  bar / b           - Show the current action bar");
    println!("  status / s        - Show run status");
    println!("  log [n]           - Show the last n messages (default 20)");
    println!("  reset             - Abandon the run");
    println!("  quit / q          - Exit the game");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.next();
        let seen = game.messages().total_pushed();

        match command {
            "quit" | "q" => break,
            "new" | "n" => game.start_new_run(),
            "reset" => {
                game.reset();
                println!("Run abandoned.");
            }
            "status" | "s" => println!("{}", game.status()),
            "bar" | "b" => display_bar(&game),
            "log" => {
                let count = argument.and_then(|a| a.parse().ok()).unwrap_or(20);
                for message in game.messages().recent(count) {
                    println!("{}", message);
                }
            }
            "choose" | "c" => match argument.and_then(|a| a.parse::<usize>().ok()) {
                Some(index) => {
                    if let Err(e) = game.try_choose_option(index) {
                        println!("{}", GameError::from(e));
                    }
                }
                None => println!("Usage: choose <index>"),
            },
            "turn" | "t" => {
                let position = match argument.map(str::parse::<f64>) {
                    Some(Ok(position)) => Some(position),
                    Some(Err(_)) => {
                        println!("Usage: turn [position between 0 and 1]");
                        continue;
                    }
                    None => None,
                };
                match game.try_resolve_turn(position) {
                    Ok(report) if report.combat_complete => println!("-- combat over --"),
                    Ok(_) => {}
                    Err(e) => println!("{}", GameError::from(e)),
                }
            }
            _ => println!("Unknown command. Available: new, choose, turn, bar, status, log, reset, quit"),
        }

        print_new_messages(&game, seen);
    }

    println!("\nGoodbye! {}", game.status());
    Ok(())
}

/// Print messages pushed since the log held `seen` entries in total
fn print_new_messages(game: &Game, seen: usize) {
    let fresh = game.messages().total_pushed().saturating_sub(seen);
    for message in game.messages().recent(fresh) {
        println!("{}", message);
    }
}

/// Draw each track as a row of cells, one character per 5%
fn display_bar(game: &Game) {
    let Some(bar) = game.action_bar() else {
        println!("No action bar: not in combat.");
        return;
    };

    for track in bar.tracks() {
        let row: String = (0..20)
            .map(|cell| {
                let position = (cell as f64 + 0.5) / 20.0;
                match track.actions_at(position).as_slice() {
                    [single] => single.to_string().chars().next().unwrap_or('?'),
                    _ => '*',
                }
            })
            .collect();
        let segments = track
            .segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:>8} |{}| {}", track.member_name, row, segments);
    }
}
