use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::ai::{strategy_for, TargetingStrategy};
use crate::common::{AttackOutcome, AttackResult, GridError};
use crate::game::Difficulty;
use crate::grid::EnemyGrid;
use crate::player::Player;

/// Computer opponent: a [`Player`] driven by a targeting strategy.
pub struct AiPlayer {
    player: Player,
    strategy: Box<dyn TargetingStrategy>,
}

impl AiPlayer {
    /// Create an AI for `difficulty` with a randomly deployed fleet.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<Self, GridError> {
        Ok(Self::with_strategy(Player::new(rng)?, strategy_for(difficulty)))
    }

    pub fn with_strategy(player: Player, strategy: Box<dyn TargetingStrategy>) -> Self {
        Self { player, strategy }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Fire until a miss, the end of the game, or `cancelled` reports the
    /// match was abandoned. `notify` sees every shot. Returns the last result.
    pub fn take_turn(
        &mut self,
        opponent: &mut EnemyGrid<'_>,
        rng: &mut SmallRng,
        cancelled: &dyn Fn() -> bool,
        notify: &mut dyn FnMut(&AttackResult),
    ) -> Result<AttackResult, GridError> {
        loop {
            let (row, col) = self
                .strategy
                .generate_coordinates(&opponent.view(), rng)?;
            let result = self.player.shoot(opponent, row, col)?;
            if result.outcome() == AttackOutcome::AlreadyShot {
                return Err(GridError::RepeatedShot { row, col });
            }
            self.strategy.process_shot_outcome(row, col, &result);
            notify(&result);
            if result.outcome().ends_turn() || cancelled() {
                debug!("ai turn over after ({}, {}): {}", row, col, result);
                return Ok(result);
            }
        }
    }
}

impl core::fmt::Debug for AiPlayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AiPlayer")
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}
