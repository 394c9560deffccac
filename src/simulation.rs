//! Headless games used to measure how quickly each strategy clears a fleet.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::strategy_for;
use crate::common::{AttackOutcome, AttackResult, GridError};
use crate::game::Difficulty;
use crate::grid::Grid;
use crate::player::Player;
use crate::player_ai::AiPlayer;
use crate::ship::ShipName;

/// Shot counters of a finished simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameStats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    /// Shot (1-based) that first struck a ship.
    pub first_hit: Option<u32>,
}

fn hunt(
    difficulty: Difficulty,
    mut target: Grid,
    rng: &mut SmallRng,
) -> Result<GameStats, GridError> {
    let mut ai =
        AiPlayer::with_strategy(Player::with_grid(Grid::new()), strategy_for(difficulty));
    let mut fired = 0u32;
    let mut first_hit = None;
    let mut record = |result: &AttackResult| {
        fired += 1;
        if first_hit.is_none() && result.outcome().is_hit() {
            first_hit = Some(fired);
        }
    };
    loop {
        let last = ai.take_turn(&mut target.as_enemy(), rng, &|| false, &mut record)?;
        if last.outcome() == AttackOutcome::GameOver {
            break;
        }
    }
    let p = ai.player();
    Ok(GameStats {
        shots: p.shots(),
        hits: p.hits(),
        misses: p.misses(),
        first_hit,
    })
}

/// Let the AI at `difficulty` clear a randomly deployed standard fleet.
pub fn simulate_game(difficulty: Difficulty, seed: u64) -> Result<GameStats, GridError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut target = Grid::new();
    target.randomize_deployment(&mut rng)?;
    hunt(difficulty, target, &mut rng)
}

/// Let the AI sink a single randomly placed ship.
pub fn simulate_single_ship(
    difficulty: Difficulty,
    ship: ShipName,
    seed: u64,
) -> Result<GameStats, GridError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut target = Grid::with_fleet(&[ship]);
    target.randomize_deployment(&mut rng)?;
    hunt(difficulty, target, &mut rng)
}
