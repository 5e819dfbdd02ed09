//! Command-line harness: load a board document, solve it, print the result.
//!
//! Exit status is 0 when the puzzle was solved, 1 when no solution exists
//! (or the strict pass stalled), and 2 when the document could not be
//! loaded.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use gridsolve_solver::{SearchStats, SolveError, Solver};
use log::{debug, error, info};

mod document;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Full backtracking search.
    Backtrack,
    /// Forced-move propagation only; stalls when a guess is unavoidable.
    Strict,
    /// Propagation first, backtracking over whatever remains.
    Hybrid,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the board JSON document.
    #[arg(long, value_name = "JSON_FILE")]
    board: PathBuf,

    /// Solving strategy.
    #[arg(long, value_name = "MODE", default_value = "backtrack")]
    mode: Mode,

    /// Run verbosely (debug logging and search diagnostics).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut grid = match document::load_board(&args.board) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}: {err}", args.board.display());
            return ExitCode::from(2);
        }
    };
    info!("loaded board from {}", args.board.display());
    debug!("{} empty cells", grid.empty_cells().len());

    println!("{grid}");

    let mut solver = Solver::new();
    let outcome = match args.mode {
        Mode::Backtrack => solver.solve(&mut grid),
        Mode::Strict => solver.propagate(&mut grid),
        Mode::Hybrid => solver.solve_with_propagation(&mut grid),
    };

    match outcome {
        Ok(()) => {
            println!("{grid}");
            if args.verbose {
                report_dead_ends(solver.stats());
            }
            ExitCode::SUCCESS
        }
        Err(SolveError::NoSolution) => {
            println!("no solution");
            ExitCode::FAILURE
        }
        Err(SolveError::PropagationStalled { open }) => {
            error!("no strict solution: {open} cells remain open");
            println!("no solution");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn report_dead_ends(stats: &SearchStats) {
    for (depth, count) in stats.dead_ends() {
        println!("L{depth:02}: {count}");
    }
    println!("dead ends: {}", stats.total());
}
