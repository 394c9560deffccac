//! Targeting strategies for the computer player.
//!
//! A strategy only ever sees the opponent through an [`EnemyView`], so it
//! can learn from shot outcomes but never peek at ship positions.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{AttackOutcome, AttackResult, GridError};
use crate::config::{FLEET, GRID_SIZE};
use crate::game::Difficulty;
use crate::grid::EnemyView;
use crate::ship::ShipName;

/// Decision logic of an AI player.
pub trait TargetingStrategy: Send {
    /// Choose the next coordinate to fire at. Must never return a tile that
    /// has already been shot.
    fn generate_coordinates(
        &mut self,
        view: &EnemyView<'_>,
        rng: &mut SmallRng,
    ) -> Result<(usize, usize), GridError>;

    /// Learn from the outcome of the shot at (`row`, `col`).
    fn process_shot_outcome(&mut self, row: usize, col: usize, result: &AttackResult);
}

/// Build the strategy used at the given difficulty.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn TargetingStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(SearchStrategy::new()),
        Difficulty::Medium => Box::new(HuntTargetStrategy::new()),
        Difficulty::Hard => Box::new(LineTargetStrategy::new()),
    }
}

/// In-bounds orthogonal neighbours of (`row`, `col`): up, down, left, right.
pub fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        row.checked_sub(1).map(|r| (r, col)),
        (row + 1 < GRID_SIZE).then_some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        (col + 1 < GRID_SIZE).then_some((row, col + 1)),
    ]
    .into_iter()
    .flatten()
}

fn pick<R: Rng>(cells: &[(usize, usize)], rng: &mut R) -> Option<(usize, usize)> {
    if cells.is_empty() {
        None
    } else {
        Some(cells[rng.random_range(0..cells.len())])
    }
}

/// Uniformly random tile that has not been shot yet.
fn random_unshot<R: Rng>(
    view: &EnemyView<'_>,
    rng: &mut R,
) -> Result<(usize, usize), GridError> {
    let open = view.unshot();
    let cells: Vec<_> = open.iter_set_bits().collect();
    pick(&cells, rng).ok_or(GridError::NoTargetsRemaining)
}

/// Easy: fire at random, remembering nothing but which tiles were shot.
#[derive(Debug, Default)]
pub struct SearchStrategy;

impl SearchStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingStrategy for SearchStrategy {
    fn generate_coordinates(
        &mut self,
        view: &EnemyView<'_>,
        rng: &mut SmallRng,
    ) -> Result<(usize, usize), GridError> {
        random_unshot(view, rng)
    }

    fn process_shot_outcome(&mut self, _row: usize, _col: usize, _result: &AttackResult) {}
}

/// Whether a hunting strategy is sweeping the grid or working a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Searching,
    TargetingShip,
}

/// Medium: random search until something is hit, then work through the
/// neighbours of every hit before searching again.
#[derive(Debug, Default)]
pub struct HuntTargetStrategy {
    targets: Vec<(usize, usize)>,
}

impl HuntTargetStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AiMode {
        if self.targets.is_empty() {
            AiMode::Searching
        } else {
            AiMode::TargetingShip
        }
    }

    /// Pending targets, next one last.
    pub fn targets(&self) -> &[(usize, usize)] {
        &self.targets
    }
}

impl TargetingStrategy for HuntTargetStrategy {
    fn generate_coordinates(
        &mut self,
        view: &EnemyView<'_>,
        rng: &mut SmallRng,
    ) -> Result<(usize, usize), GridError> {
        while let Some((r, c)) = self.targets.pop() {
            if !view.is_shot(r, c) {
                return Ok((r, c));
            }
        }
        random_unshot(view, rng)
    }

    fn process_shot_outcome(&mut self, row: usize, col: usize, result: &AttackResult) {
        match result.outcome() {
            AttackOutcome::Hit => self.targets.extend(neighbours(row, col)),
            AttackOutcome::Destroyed | AttackOutcome::GameOver => self.targets.clear(),
            AttackOutcome::Miss | AttackOutcome::AlreadyShot => {}
        }
    }
}

/// Hard: hits are grouped by the ship they struck. One hit is tried on
/// all four sides; two or more fix the ship's axis and only the ends of the
/// line are tried. Searching skips tiles that cannot hold the smallest ship
/// still afloat.
#[derive(Debug)]
pub struct LineTargetStrategy {
    open_hits: BTreeMap<ShipName, Vec<(usize, usize)>>,
    afloat: Vec<ShipName>,
}

impl LineTargetStrategy {
    pub fn new() -> Self {
        Self {
            open_hits: BTreeMap::new(),
            afloat: FLEET.to_vec(),
        }
    }

    pub fn mode(&self) -> AiMode {
        if self.open_hits.is_empty() {
            AiMode::Searching
        } else {
            AiMode::TargetingShip
        }
    }

    /// Unshot tiles worth trying next for a ship with the given hits.
    fn candidates(hits: &[(usize, usize)], view: &EnemyView<'_>) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        let horizontal = hits.iter().all(|&(r, _)| r == hits[0].0);
        let vertical = hits.iter().all(|&(_, c)| c == hits[0].1);

        if hits.len() > 1 && (horizontal || vertical) {
            let along = |&(r, c): &(usize, usize)| if horizontal { c } else { r };
            let lo = hits.iter().map(along).min().unwrap_or(0);
            let hi = hits.iter().map(along).max().unwrap_or(0);
            let at = |i: usize| if horizontal { (hits[0].0, i) } else { (i, hits[0].1) };
            // gaps inside the line first, then either end
            cells.extend((lo..=hi).map(at).filter(|&(r, c)| !view.is_shot(r, c)));
            if !cells.is_empty() {
                return cells;
            }
            if let Some(before) = lo.checked_sub(1) {
                cells.push(at(before));
            }
            if hi + 1 < GRID_SIZE {
                cells.push(at(hi + 1));
            }
        }
        cells.retain(|&(r, c)| !view.is_shot(r, c));
        if cells.is_empty() {
            cells.extend(hits.iter().flat_map(|&(r, c)| neighbours(r, c)));
            cells.retain(|&(r, c)| !view.is_shot(r, c));
        }
        cells
    }

    fn search<R: Rng>(
        &self,
        view: &EnemyView<'_>,
        rng: &mut R,
    ) -> Result<(usize, usize), GridError> {
        let step = self.afloat.iter().map(|s| s.size()).min().unwrap_or(1);
        let open = view.unshot();
        let cells: Vec<_> = open
            .iter_set_bits()
            .filter(|&(r, c)| (r + c) % step == 0)
            .collect();
        match pick(&cells, rng) {
            Some(cell) => Ok(cell),
            None => random_unshot(view, rng),
        }
    }
}

impl Default for LineTargetStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetingStrategy for LineTargetStrategy {
    fn generate_coordinates(
        &mut self,
        view: &EnemyView<'_>,
        rng: &mut SmallRng,
    ) -> Result<(usize, usize), GridError> {
        for hits in self.open_hits.values() {
            let cells = Self::candidates(hits, view);
            if let Some(cell) = pick(&cells, rng) {
                return Ok(cell);
            }
        }
        self.search(view, rng)
    }

    fn process_shot_outcome(&mut self, row: usize, col: usize, result: &AttackResult) {
        let Some(ship) = result.ship() else {
            return;
        };
        match result.outcome() {
            AttackOutcome::Hit => self.open_hits.entry(ship).or_default().push((row, col)),
            AttackOutcome::Destroyed | AttackOutcome::GameOver => {
                self.open_hits.remove(&ship);
                self.afloat.retain(|&s| s != ship);
            }
            AttackOutcome::Miss | AttackOutcome::AlreadyShot => {}
        }
    }
}
