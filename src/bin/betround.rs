//! Betround Binary
//!
//! Drives tables from the terminal.
//!
//! - `simulate` plays robot-only hands on independent tables in parallel
//! - `play` seats you at seat 1 against robots
//!
//! Hands are not evaluated, so showdowns are decided by drawing a random
//! winner among the remaining players.

use betround::gameplay::*;
use betround::gameroom::*;
use betround::players::*;
use betround::*;
use clap::Parser;
use clap::Subcommand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Play robot hands on independent tables", alias = "sim")]
    Simulate {
        #[arg(long, default_value_t = 1000)]
        hands: usize,
        #[arg(long, default_value_t = 4)]
        tables: usize,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        stack: Option<Chips>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Play against robots in the terminal")]
    Play {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
}

/// End-of-run numbers for one table.
#[derive(Debug, serde::Serialize)]
struct Summary {
    table: usize,
    hands: usize,
    stacks: BTreeMap<Seat, Chips>,
}

fn config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn judge(rng: &mut SmallRng) -> impl FnMut(&Game) -> Vec<Seat> + '_ {
    move |game| {
        for player in game.players().iter().filter(|p| p.is_live()) {
            log::debug!("{}", player);
        }
        game.contenders().choose(&mut *rng).copied().into_iter().collect()
    }
}

fn simulate(table: usize, hands: usize, config: Config) -> anyhow::Result<Summary> {
    let seed = config.seed.unwrap_or_else(rand::random).wrapping_add(table as u64);
    let mut room = Room::from(Config {
        seed: Some(seed),
        ..config
    });
    let mut agents = BTreeMap::<Seat, Box<dyn Agent>>::new();
    for seat in 1..=config.players {
        room.sit(seat)?;
        agents.insert(seat, Box::new(Robot::seeded(seed ^ seat as u64)));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    while room.played() < hands && room.is_ready() {
        room.play(&mut agents, judge(&mut rng))?;
    }
    log::info!("table {} finished after {} hands", table, room.played());
    Ok(Summary {
        table,
        hands: room.played(),
        stacks: room.stacks().clone(),
    })
}

fn play(config: Config) -> anyhow::Result<()> {
    let mut room = Room::from(config);
    let mut agents = BTreeMap::<Seat, Box<dyn Agent>>::new();
    room.sit(1)?;
    agents.insert(1, Box::new(Human));
    for seat in 2..=config.players {
        room.sit(seat)?;
        agents.insert(seat, Box::new(Robot::default()));
    }
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    while room.is_ready() {
        for payout in room.play(&mut agents, judge(&mut rng))? {
            println!("{}", payout);
        }
        let again = dialoguer::Confirm::new()
            .with_prompt("Deal another hand?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }
    println!("final stacks {:?}", room.stacks());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    log();
    match Cli::parse().command {
        Command::Simulate {
            hands,
            tables,
            players,
            stack,
            seed,
            config: path,
            json,
        } => {
            let mut config = config(path.as_deref())?;
            config.players = players.unwrap_or(config.players);
            config.stack = stack.unwrap_or(config.stack);
            config.seed = seed.or(config.seed);
            config.validate()?;
            let summaries = (0..tables)
                .into_par_iter()
                .map(|table| simulate(table, hands, config))
                .collect::<anyhow::Result<Vec<_>>>()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in summaries.iter() {
                    println!(
                        "table {:<3} hands {:<6} stacks {:?}",
                        summary.table, summary.hands, summary.stacks
                    );
                }
            }
            Ok(())
        }
        Command::Play {
            players,
            config: path,
        } => {
            let mut config = config(path.as_deref())?;
            config.players = players.unwrap_or(config.players);
            config.validate()?;
            play(config)
        }
    }
}
