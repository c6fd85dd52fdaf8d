//! Match driver and game-record generator for ultimate tic-tac-toe.
//!
//! `play` pits two agents against each other over a series of games and
//! reports the score. `generate` records games in MessagePack format with
//! one observation tensor per ply, the input a learned value/policy
//! estimator would train on.

mod records;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uttt_game::GameState;
use uttt_search::{
    play_match, Agent, MatchRecord, MinimaxAgent, RandomAgent, SearchConfig, Tally,
};

use records::GameRecord;

/// Ultimate tic-tac-toe match driver.
#[derive(Parser)]
#[command(name = "uttt-selfplay")]
#[command(about = "Play ultimate tic-tac-toe matches and record games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two agents and report the score.
    Play {
        /// Agent playing X (moves first).
        #[arg(short = 'x', long, value_enum, default_value = "minimax")]
        player_x: AgentKind,

        /// Agent playing O.
        #[arg(short = 'o', long, value_enum, default_value = "random")]
        player_o: AgentKind,

        /// Number of games to play.
        #[arg(short, long, default_value = "100")]
        games: usize,

        #[command(flatten)]
        settings: Settings,

        /// Log every move and the board after it.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate recorded games for a learner.
    Generate {
        /// Agent playing X.
        #[arg(short = 'x', long, value_enum, default_value = "minimax")]
        player_x: AgentKind,

        /// Agent playing O.
        #[arg(short = 'o', long, value_enum, default_value = "minimax")]
        player_o: AgentKind,

        /// Number of games to generate.
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Output directory for game files.
        #[arg(long, default_value = "data/games")]
        output: PathBuf,

        #[command(flatten)]
        settings: Settings,
    },
}

/// Options shared by every command.
#[derive(clap::Args, Clone, Copy, Debug)]
struct Settings {
    /// Minimax search depth. Omit for depth that grows with the game.
    #[arg(short, long)]
    depth: Option<usize>,

    /// Board side N (N×N sub-boards of N×N cells).
    #[arg(long, default_value = "3")]
    dim: usize,

    /// Random seed for reproducibility.
    #[arg(long, default_value = "42")]
    seed: u64,
}

impl Settings {
    fn search_config(&self) -> Result<SearchConfig> {
        Ok(match self.depth {
            Some(depth) => SearchConfig::with_depth(depth)?,
            None => SearchConfig::adaptive(),
        })
    }

    /// Seed for game `index`; each game and side gets its own stream.
    fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64 * 1000)
    }
}

/// Which agent plays a side.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AgentKind {
    Minimax,
    Random,
}

impl AgentKind {
    fn build(self, settings: &Settings, seed: u64) -> Result<Box<dyn Agent>> {
        let agent: Box<dyn Agent> = match self {
            AgentKind::Minimax => {
                Box::new(MinimaxAgent::new(settings.dim, settings.search_config()?)?)
            }
            AgentKind::Random => Box::new(RandomAgent::new(ChaCha8Rng::seed_from_u64(seed))),
        };
        Ok(agent)
    }
}

/// Play one game between freshly built agents.
fn play_game(x: AgentKind, o: AgentKind, settings: &Settings, index: usize) -> Result<MatchRecord> {
    let seed = settings.game_seed(index);
    let mut x_agent = x.build(settings, seed)?;
    let mut o_agent = o.build(settings, seed.wrapping_add(1))?;
    let record = play_match(x_agent.as_mut(), o_agent.as_mut(), GameState::new(settings.dim)?)
        .with_context(|| format!("Game {} failed", index))?;
    Ok(record)
}

/// Run the play command.
fn cmd_play(x: AgentKind, o: AgentKind, games: usize, settings: Settings) -> Result<Tally> {
    info!(
        ?x,
        ?o,
        games,
        dim = settings.dim,
        depth = ?settings.depth,
        seed = settings.seed,
        "playing"
    );
    let start = Instant::now();

    // Games share nothing, so they run in parallel.
    let tally = (0..games)
        .into_par_iter()
        .map(|i| -> Result<Tally> {
            let record = play_game(x, o, &settings, i)?;
            let mut tally = Tally::default();
            tally.record(record.winner);
            Ok(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    info!(elapsed_s = start.elapsed().as_secs_f64(), "series complete");
    Ok(tally)
}

/// Run the generate command.
fn cmd_generate(
    x: AgentKind,
    o: AgentKind,
    games: usize,
    output: PathBuf,
    settings: Settings,
) -> Result<()> {
    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory: {:?}", output))?;
    info!(?x, ?o, games, ?output, seed = settings.seed, "generating");
    let start = Instant::now();

    let game_records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| -> Result<GameRecord> {
            let record = play_game(x, o, &settings, i)?;
            GameRecord::from_match(&record, settings.dim, settings.game_seed(i))
        })
        .collect::<Result<_>>()?;

    for (i, game_record) in game_records.iter().enumerate() {
        let filename = output.join(format!("game_{:06}.msgpack", i));
        game_record.write(&filename)?;
    }

    let total_moves: usize = game_records.iter().map(|g| g.steps.len()).sum();
    let mut tally = Tally::default();
    for record in &game_records {
        tally.record(record.winner());
    }

    println!("\nCompleted in {:.2}s", start.elapsed().as_secs_f64());
    println!("Games generated: {}", games);
    println!("Average game length: {:.1} moves", total_moves as f64 / games.max(1) as f64);
    println!("Files saved to: {:?}", output);
    print_tally(&tally);

    Ok(())
}

fn print_tally(tally: &Tally) {
    println!(
        "P1: {}, P2: {}, Ties: {}",
        tally.x_wins, tally.o_wins, tally.draws
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Per-move board dumps are traced; --verbose enables them unless RUST_LOG is set.
    let default_filter = match &cli.command {
        Commands::Play { verbose: true, .. } => "info,uttt_search=trace",
        _ => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Play {
            player_x,
            player_o,
            games,
            settings,
            verbose: _,
        } => {
            let tally = cmd_play(player_x, player_o, games, settings)?;

            println!("\n================================================");
            println!("{:?} (X) vs {:?} (O), {} games", player_x, player_o, tally.total());
            println!("================================================");
            print_tally(&tally);
            Ok(())
        }

        Commands::Generate {
            player_x,
            player_o,
            games,
            output,
            settings,
        } => cmd_generate(player_x, player_o, games, output, settings),
    }
}
