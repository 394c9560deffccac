use std::io;
use std::path::PathBuf;

use battleships::{init_logging, run, Difficulty, HighScores, PlayOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "highscores.txt")]
        scores: PathBuf,
    },
    /// Print the high-score table.
    Scores {
        #[arg(long, default_value = "highscores.txt")]
        scores: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            scores,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (games will be reproducible)", s);
            }
            let stdin = io::stdin();
            run(
                stdin.lock(),
                io::stdout(),
                PlayOptions {
                    difficulty,
                    seed,
                    scores,
                },
            )?;
        }
        Commands::Scores { scores } => {
            let table = HighScores::load(&scores)?;
            print!("{}", table.render());
        }
    }
    Ok(())
}
