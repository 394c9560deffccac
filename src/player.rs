use log::debug;
use rand::Rng;

use crate::common::{AttackOutcome, AttackResult, GridError};
use crate::config::{HIT_POINTS, SHIP_LOST_PENALTY};
use crate::grid::{EnemyGrid, EnemyView, Grid};

/// A participant of a match: its own grid plus shot bookkeeping.
///
/// A plain `Player` makes no decisions; the caller supplies every
/// coordinate. [`crate::AiPlayer`] wraps one with a targeting strategy.
#[derive(Debug, Clone)]
pub struct Player {
    grid: Grid,
    shots: u32,
    hits: u32,
    misses: u32,
}

impl Player {
    /// Create a player whose fleet is already randomly deployed.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Grid::new();
        grid.randomize_deployment(rng)?;
        Ok(Self::with_grid(grid))
    }

    /// Create a player around an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            shots: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// How the opponent sees this player's grid.
    pub fn enemy_view(&self) -> EnemyView<'_> {
        self.grid.enemy_view()
    }

    pub fn ready_to_deploy(&self) -> bool {
        self.grid.all_deployed()
    }

    /// True once every ship of the player's fleet is sunk.
    pub fn is_destroyed(&self) -> bool {
        self.grid.all_destroyed()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn score(&self) -> i32 {
        if self.is_destroyed() {
            return 0;
        }
        self.hits as i32 * HIT_POINTS
            - self.shots as i32
            - self.grid.ships_killed() as i32 * SHIP_LOST_PENALTY
    }

    /// Fire at (`row`, `col`) on the opponent's grid.
    pub fn shoot(
        &mut self,
        opponent: &mut EnemyGrid<'_>,
        row: usize,
        col: usize,
    ) -> Result<AttackResult, GridError> {
        let result = opponent.hit_tile(row, col)?;
        self.shots += 1;
        match result.outcome() {
            AttackOutcome::Hit | AttackOutcome::Destroyed | AttackOutcome::GameOver => {
                self.hits += 1
            }
            AttackOutcome::Miss => self.misses += 1,
            AttackOutcome::AlreadyShot => {}
        }
        debug!("shot ({}, {}) -> {:?}", row, col, result.outcome());
        Ok(result)
    }
}
