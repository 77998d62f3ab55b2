//! Headless Auto-Play Runner
//!
//! Plays seeded runs without input and prints a summary per run, for
//! balance checks and regression comparisons.

use actionbar_rogue::encounter::EncounterType;
use actionbar_rogue::entity::EnemyKind;
use actionbar_rogue::game::{Game, GamePhase};
use actionbar_rogue::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless Auto-Play Runner - seeded runs with a fixed strategy
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play seeded runs headlessly and report how far they got")]
struct Args {
    /// Seed of the first run; later runs use seed + 1, seed + 2, ...
    #[arg(long)]
    seed: Option<u64>,

    /// Number of runs to play
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Stop a run after this many chosen encounters
    #[arg(long, default_value_t = 30)]
    max_encounters: u32,

    /// Stop a run after this many combat turns
    #[arg(long, default_value_t = 2000)]
    max_turns: u32,

    /// Take Elite fights whenever they are offered
    #[arg(long)]
    prefer_elite: bool,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every game message to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    seed: u64,
    outcome: String,
    final_level: u32,
    relics: Vec<String>,
    encounters: u32,
    fights_won: u32,
    elites_won: u32,
    turns: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("actionbar_rogue=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let results: Vec<RunResult> = (0..args.runs)
        .map(|i| play_run(base_seed.wrapping_add(u64::from(i)), &args))
        .collect();

    match args.format.as_str() {
        "text" => {
            for result in &results {
                println!("Run (seed {})", result.seed);
                println!("  Outcome: {}", result.outcome);
                println!("  Level: {}", result.final_level);
                println!(
                    "  Encounters: {} ({} fights won, {} elite)",
                    result.encounters, result.fights_won, result.elites_won
                );
                println!("  Turns: {}", result.turns);
                println!("  Relics: {}", result.relics.join(", "));
            }
        }
        format => {
            if format != "json" {
                eprintln!("Unknown format '{}', defaulting to json", format);
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn play_run(seed: u64, args: &Args) -> RunResult {
    let mut game = Game::new(Some(seed));
    game.start_new_run();

    let mut encounters = 0;
    let mut fights_won = 0;
    let mut elites_won = 0;
    let mut turns = 0;
    let mut seen = game.messages().total_pushed();

    let outcome = loop {
        match game.phase() {
            GamePhase::GameOver => break "defeated",
            GamePhase::AwaitingCommand => break "abandoned",
            GamePhase::SelectingEncounter => {
                if encounters >= args.max_encounters {
                    break "survived";
                }
                let index = pick_option(&game, args.prefer_elite);
                if game.try_choose_option(index).is_err() {
                    break "abandoned";
                }
                encounters += 1;
            }
            GamePhase::Combat => {
                if turns >= args.max_turns {
                    break "stalled";
                }
                let kind = game.encounter().kind();
                match game.try_resolve_turn(None) {
                    Ok(report) => {
                        turns += 1;
                        if report.combat_complete && game.phase() == GamePhase::SelectingEncounter {
                            fights_won += 1;
                            if kind == Some(EnemyKind::Elite) {
                                elites_won += 1;
                            }
                        }
                    }
                    Err(_) => break "abandoned",
                }
            }
        }

        if args.verbose {
            let fresh = game.messages().total_pushed() - seen;
            for message in game.messages().recent(fresh) {
                eprintln!("  {}", message);
            }
            seen = game.messages().total_pushed();
        }
    };

    RunResult {
        seed,
        outcome: outcome.to_string(),
        final_level: game.level(),
        relics: game.relics().iter().map(|r| r.name().to_string()).collect(),
        encounters,
        fights_won,
        elites_won,
        turns,
    }
}

/// First Elite (when preferred) or Normal fight on offer, else the first option
fn pick_option(game: &Game, prefer_elite: bool) -> usize {
    let find = |kind: EncounterType| game.options().iter().position(|o| o.kind == kind);
    let preferred = if prefer_elite {
        find(EncounterType::Elite).or_else(|| find(EncounterType::Normal))
    } else {
        find(EncounterType::Normal)
    };
    preferred.unwrap_or(0)
}
