use battleships::{simulate_game, Difficulty, GameStats};
use serde::Serialize;

/// Results of one difficulty across every simulated seed.
#[derive(Serialize)]
struct Summary {
    difficulty: Difficulty,
    games: u64,
    average_shots: f64,
    best: Option<GameStats>,
    worst: Option<GameStats>,
}

impl Summary {
    fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            games: 0,
            average_shots: 0.0,
            best: None,
            worst: None,
        }
    }

    fn record(&mut self, stats: GameStats) {
        let total = self.average_shots * self.games as f64 + f64::from(stats.shots);
        self.games += 1;
        self.average_shots = total / self.games as f64;
        if self.best.map_or(true, |b| stats.shots < b.shots) {
            self.best = Some(stats);
        }
        if self.worst.map_or(true, |w| stats.shots > w.shots) {
            self.worst = Some(stats);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <first-seed> <games>", args[0]);
        std::process::exit(1);
    }
    let first_seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut report = Vec::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut summary = Summary::new(difficulty);
        for seed in first_seed..first_seed + games {
            summary.record(simulate_game(difficulty, seed)?);
        }
        report.push(summary);
    }

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
