use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{info, warn};

use sokoban_solver::fs::{load_file, write_file};
use sokoban_solver::formatter::SolutionFormatter;
use sokoban_solver::generator::Generator;
use sokoban_solver::parser::parse;
use sokoban_solver::solver::{solve, SolveResult};

/// How many fresh draws `generate` retries before giving up, since
/// generation is randomized and an unsolvable draw just needs another
/// roll rather than being treated as a hard failure.
const GENERATE_RETRIES: u32 = 20;

#[derive(Parser)]
#[command(name = "sokoban-solver", author = "martin-t", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random board and verify it's solvable before printing it
    Generate {
        #[arg(long, default_value_t = 8)]
        width: i32,
        #[arg(long, default_value_t = 8)]
        height: i32,
        #[arg(long, default_value_t = 3)]
        boxes: u32,
        #[arg(long, default_value_t = 10)]
        walls: u32,
        /// RNG seed; omit to seed from entropy
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100_000)]
        max_iters: u64,
        /// Write the board here instead of printing it to stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a level file and solve it
    Solve {
        file: String,
        #[arg(long, default_value_t = 1_000_000)]
        max_iters: u64,
    },
    /// Parse a level file, solve it, and print the path one board at a time
    Replay {
        file: String,
        #[arg(long, default_value_t = 1_000_000)]
        max_iters: u64,
        #[arg(long, default_value_t = 200)]
        delay_ms: u64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate { width, height, boxes, walls, seed, max_iters, output } => {
            cmd_generate(width, height, boxes, walls, seed, max_iters, output)
        }
        Command::Solve { file, max_iters } => cmd_solve(&file, max_iters),
        Command::Replay { file, max_iters, delay_ms } => cmd_replay(&file, max_iters, delay_ms),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    width: i32,
    height: i32,
    boxes: u32,
    walls: u32,
    seed: Option<u64>,
    max_iters: u64,
    output: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut generator = match seed {
        Some(seed) => Generator::new(seed),
        None => Generator::from_entropy(),
    };

    for attempt in 1..=GENERATE_RETRIES {
        let board = generator.generate(width, height, walls, boxes)?;
        match solve(&board, max_iters) {
            SolveResult::Solved { stats, .. } => {
                info!("generated a solvable board on attempt {}", attempt);
                println!("{}", stats);
                let rendered = board.to_string();
                match output {
                    Some(path) => write_file(path, &rendered)?,
                    None => print!("{}", rendered),
                }
                return Ok(());
            }
            SolveResult::Unsolvable { .. } | SolveResult::BudgetExhausted { .. } => {
                warn!("generated board unsolvable, retrying with a fresh draw");
            }
        }
    }

    Err(format!("could not generate a solvable board in {} attempts", GENERATE_RETRIES).into())
}

fn cmd_solve(file: &str, max_iters: u64) -> Result<(), Box<dyn Error>> {
    let text = load_file(file)?;
    let board = parse(&text)?;

    println!("Solving {}...", file);
    match solve(&board, max_iters) {
        SolveResult::Solved { path, stats, .. } => {
            println!("{}", stats);
            println!("Found solution:");
            println!("{}", SolutionFormatter::new(&path));
            Ok(())
        }
        SolveResult::Unsolvable { stats, .. } => {
            println!("{}", stats);
            println!("No solution");
            Ok(())
        }
        SolveResult::BudgetExhausted { iterations, stats } => {
            println!("{}", stats);
            println!("Gave up after {} iterations", iterations);
            Ok(())
        }
    }
}

fn cmd_replay(file: &str, max_iters: u64, delay_ms: u64) -> Result<(), Box<dyn Error>> {
    let text = load_file(file)?;
    let board = parse(&text)?;

    match solve(&board, max_iters) {
        SolveResult::Solved { path, .. } => {
            for (i, board) in path.iter().enumerate() {
                println!("Push {}/{}:", i, path.len() - 1);
                println!("{}", board);
                if i + 1 < path.len() {
                    thread::sleep(Duration::from_millis(delay_ms));
                }
            }
            Ok(())
        }
        SolveResult::Unsolvable { .. } => {
            println!("No solution");
            Ok(())
        }
        SolveResult::BudgetExhausted { iterations, .. } => {
            println!("Gave up after {} iterations", iterations);
            Ok(())
        }
    }
}
