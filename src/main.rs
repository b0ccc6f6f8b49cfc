//! Snake Cube Solver
//!
//! Folds a snake cube, a chain of 27 hinged unit cubes written in `s`/`f`/`a`
//! move-token notation, into a 3x3x3 cube. Prints the fold order and can show
//! it in an interactive 3D viewer.

mod visualization;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use snakecube::{report, search, Fold, Outcome, SearchLimits, Snake, SAMPLE_SNAKE};

/// Solves snake cube puzzles and visualizes the fold.
#[derive(Parser)]
#[command(name = "snakecube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a snake and print the fold.
    Solve {
        /// Move tokens: 's' start, 'f' forced, 'a' free.
        #[arg(default_value = SAMPLE_SNAKE)]
        snake: String,
        /// Give up after expanding this many search nodes.
        #[arg(long)]
        max_expansions: Option<usize>,
    },
    /// Solve a snake and open the 3D viewer.
    Display {
        #[arg(default_value = SAMPLE_SNAKE)]
        snake: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")?;

    match cli.command {
        Some(Command::Solve {
            snake,
            max_expansions,
        }) => {
            let limits = SearchLimits { max_expansions };
            run_solver(&snake, limits)?;
        }
        Some(Command::Display { snake }) => {
            let fold = run_solver(&snake, SearchLimits::UNLIMITED)?;
            if let Some(fold) = fold {
                run_display(fold);
            }
        }
        None => {
            // default: solve the sample and display it
            if let Some(fold) = run_solver(SAMPLE_SNAKE, SearchLimits::UNLIMITED)? {
                run_display(fold);
            }
        }
    }

    Ok(())
}

/// Solves `input`, prints the verdict and returns the fold if there is one.
fn run_solver(input: &str, limits: SearchLimits) -> anyhow::Result<Option<Fold>> {
    let snake: Snake = input
        .parse()
        .with_context(|| format!("invalid snake {:?}", input))?;

    match search::solve_snake(snake, limits) {
        Outcome::Solved(fold) => {
            println!("Solved {}", snake);
            println!();
            print!("{}", report::format_fold(&fold));
            println!();
            print!("{}", report::format_moves(&fold));
            Ok(Some(fold))
        }
        Outcome::Unsolvable => {
            println!("Unsolvable {}", snake);
            Ok(None)
        }
        Outcome::Halted { expanded } => {
            println!(
                "Gave up on {} after expanding {} nodes; raise --max-expansions",
                snake, expanded
            );
            Ok(None)
        }
        Outcome::Invalid(err) => bail!("invalid snake {:?}: {}", input, err),
    }
}

fn run_display(fold: Fold) {
    println!("Controls: Left/Right fold, Up/Down explode, R reset");
    visualization::display(fold);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::parse_from(["snakecube", "-vv", "solve", "--max-expansions", "50"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Solve {
                snake,
                max_expansions,
            }) => {
                assert_eq!(snake, SAMPLE_SNAKE);
                assert_eq!(max_expansions, Some(50));
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_run_solver_rejects_bad_input() {
        assert!(run_solver("fff", SearchLimits::UNLIMITED).is_err());
    }

    #[test]
    fn test_run_solver_returns_the_fold() {
        let fold = run_solver(SAMPLE_SNAKE, SearchLimits::UNLIMITED).unwrap();
        assert_eq!(
            fold.map(|fold| fold.snake().to_string()),
            Some(SAMPLE_SNAKE.to_string())
        );
    }
}
