//! Reversi with two AI players.
//!
//! ## Usage
//!
//! - `reversi-mc` - Choose a mode from a menu
//! - `reversi-mc play --ai mc` - Play Black against the Monte Carlo AI
//! - `reversi-mc play --ai heuristic` - Play Black against the heuristic AI
//! - `reversi-mc arena --rounds 100` - Heuristic (Black) vs Monte Carlo (White)
//! - `reversi-mc demo` - Show one engine move for each strategy

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reversi_mc::arena::run_competition;
use reversi_mc::cli::{choose_mode, render, render_state, HumanSession, Mode};
use reversi_mc::constants::{DEFAULT_PLAYOUTS, DEFAULT_ROUNDS};
use reversi_mc::engine::{Engine, EngineConfig, Strategy};
use reversi_mc::game::GameState;

/// Reversi with a Monte Carlo AI and a heuristic AI
#[derive(Parser)]
#[command(name = "reversi-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Random playouts per candidate move for the Monte Carlo AI
    #[arg(long, global = true, default_value_t = DEFAULT_PLAYOUTS)]
    playouts: usize,

    /// Wall-clock limit per Monte Carlo search, in milliseconds
    #[arg(long, global = true)]
    time_limit_ms: Option<u64>,

    /// Seed for the random source (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Black against the AI
    Play {
        /// AI strategy
        #[arg(long, value_enum, default_value_t = Strategy::MonteCarlo)]
        ai: Strategy,
    },
    /// Run AI vs AI games: heuristic as Black, Monte Carlo as White
    Arena {
        /// Number of games
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,
    },
    /// Show one move from each strategy on the opening position
    Demo,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EngineConfig {
        playouts: cli.playouts,
        time_limit: cli.time_limit_ms.map(Duration::from_millis),
        seed: cli.seed,
    };
    let engine = Engine::new(config);

    match cli.command {
        Some(Commands::Play { ai }) => play(engine, ai),
        Some(Commands::Arena { rounds }) => {
            arena(engine, rounds);
            Ok(())
        }
        Some(Commands::Demo) => {
            run_demo(engine);
            Ok(())
        }
        None => {
            let mode = choose_mode(&mut io::stdin().lock(), &mut io::stdout())?;
            match mode {
                Mode::HumanVs(ai) => play(engine, ai),
                Mode::AiVsAi => {
                    arena(engine, DEFAULT_ROUNDS);
                    Ok(())
                }
            }
        }
    }
}

fn play(engine: Engine, ai: Strategy) -> Result<()> {
    let stdin = io::stdin();
    let mut session = HumanSession::new(stdin.lock(), io::stdout(), engine, ai);
    session.run()?;
    Ok(())
}

fn arena(mut engine: Engine, rounds: usize) {
    let report = run_competition(&mut engine, rounds, Strategy::Heuristic, Strategy::MonteCarlo);
    println!("{report}");
}

fn run_demo(mut engine: Engine) {
    println!("Reversi: Monte Carlo and heuristic AI\n");

    let state = GameState::new();
    println!("=== Opening position, Black to move ===");
    print!("{}", render(state.board(), Some(&state.legal_overlay())));

    for strategy in [Strategy::Heuristic, Strategy::MonteCarlo] {
        println!("\n=== {strategy} ===");
        let next = engine.play_turn(&state, strategy);
        print!("{}", render_state(&next));
    }
}
