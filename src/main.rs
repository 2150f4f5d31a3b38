use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use log::{info, LevelFilter};

use eight_puzzle::cli::Args;
use eight_puzzle::render::{write_comparison, write_grid, write_report};
use eight_puzzle::{solve, HeuristicKind, PuzzleError, Strategy};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PuzzleError> {
    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_tty();
    let mut out = stdout.lock();

    let grid = args.start_grid(&mut io::stdin().lock(), &mut out)?;

    writeln!(out, "Initial state:")?;
    write_grid(&mut out, &grid, color)?;
    writeln!(out)?;

    if !grid.is_solvable() {
        return Err(PuzzleError::Unsolvable(grid));
    }

    if args.compare {
        let mut rows = Vec::new();
        for strategy in Strategy::ALL {
            if strategy == Strategy::AStar {
                for kind in HeuristicKind::ALL {
                    info!("running {} with {}", strategy, kind);
                    rows.push((format!("{} ({})", strategy, kind), solve(strategy, grid, &kind)));
                }
            } else {
                info!("running {}", strategy);
                rows.push((strategy.to_string(), solve(strategy, grid, &args.heuristic)));
            }
        }
        write_comparison(&mut out, &rows)?;
    } else {
        let report = solve(args.strategy, grid, &args.heuristic);
        write_report(&mut out, &report, args.quiet, color)?;
    }

    out.flush()?;
    Ok(())
}
