//! CLI argument parsing using clap, and reading the start grid

use std::io::{BufRead, Write};

use clap::Parser;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::error::PuzzleError;
use crate::heuristic::HeuristicKind;
use crate::parse::ParseGridError;
use crate::puzzle::Grid;
use crate::search::Strategy;

/// 8-puzzle solver
#[derive(Parser, Debug)]
#[command(
    name = "eight-puzzle",
    about = "Solve the 8-puzzle with depth-first, breadth-first or A* search",
    version
)]
pub struct Args {
    /// Tiles in row-major order, 0 for the blank (read from stdin if omitted)
    #[arg(value_name = "TILE")]
    pub tiles: Vec<String>,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::AStar)]
    pub strategy: Strategy,

    /// Heuristic used by A*
    #[arg(short = 'H', long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    pub heuristic: HeuristicKind,

    /// Start from a uniformly random solvable grid
    #[arg(long, conflicts_with_all = ["tiles", "scramble"])]
    pub shuffle: bool,

    /// Start from the goal scrambled by this many random slides
    #[arg(long, value_name = "MOVES", conflicts_with = "tiles")]
    pub scramble: Option<usize>,

    /// Seed for --shuffle and --scramble
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run every strategy and heuristic and print a comparison table
    #[arg(long)]
    pub compare: bool,

    /// Only print the summary, not the path
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log search progress (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The start grid from the tiles given, a random source, or `input`.
    pub fn start_grid<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        prompt: &mut W,
    ) -> Result<Grid, PuzzleError> {
        if !self.tiles.is_empty() {
            return Ok(self.tiles.join(" ").parse()?);
        }

        if self.shuffle || self.scramble.is_some() {
            return Ok(match self.seed {
                Some(seed) => self.random_grid(&mut StdRng::seed_from_u64(seed)),
                None => self.random_grid(&mut thread_rng()),
            });
        }

        read_grid(input, prompt)
    }

    fn random_grid<R: Rng>(&self, rng: &mut R) -> Grid {
        match self.scramble {
            Some(moves) => Grid::scrambled(rng, moves),
            None => Grid::shuffled(rng),
        }
    }
}

/// Prompts for a grid until a valid one is entered.
///
/// Tokens are collected across lines until nine have been read, so both
/// `0 1 2 3 4 5 6 7 8` and three rows of three are accepted.
pub fn read_grid<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> Result<Grid, PuzzleError> {
    loop {
        writeln!(
            prompt,
            "Enter the initial state of your puzzle in the following format:"
        )?;
        writeln!(prompt, "0 1 2\n3 4 5\n6 7 8\n")?;
        prompt.flush()?;

        let mut text = String::new();
        while text.split_whitespace().count() < 9 {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                let found = text.split_whitespace().count();
                return Err(ParseGridError::TileCount(found).into());
            }
            text.push_str(&line);
        }

        match text.parse::<Grid>() {
            Ok(grid) => return Ok(grid),
            Err(e) => writeln!(prompt, "\nInvalid state: {}\n", e)?,
        }
    }
}
