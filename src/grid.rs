//! Sea grid: tiles, the fleet deployed on them, and shot resolution.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackOutcome, AttackResult, GridError};
use crate::config::{FLEET, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipName};
use crate::tile::{Tile, TileView};

/// One bit per tile of the sea grid.
pub type SeaBoard = BitBoard<u128, GRID_SIZE>;

/// A player's own grid. Owns the tiles and the fleet; tiles refer to ships
/// by name only.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: [[Tile; GRID_SIZE]; GRID_SIZE],
    fleet: BTreeMap<ShipName, Ship>,
    shots: SeaBoard,
    hits: SeaBoard,
    ships_killed: usize,
}

impl Grid {
    /// Create a grid holding the standard fleet, nothing deployed.
    pub fn new() -> Self {
        Self::with_fleet(&FLEET)
    }

    /// Create a grid holding one ship of each given name.
    pub fn with_fleet(names: &[ShipName]) -> Self {
        let tiles = core::array::from_fn(|r| core::array::from_fn(|c| Tile::new(r, c)));
        let fleet = names.iter().map(|&name| (name, Ship::new(name))).collect();
        Grid {
            tiles,
            fleet,
            shots: SeaBoard::new(),
            hits: SeaBoard::new(),
            ships_killed: 0,
        }
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|r| r.get(col))
    }

    /// View of a tile as its owner sees it.
    pub fn view(&self, row: usize, col: usize) -> Option<TileView> {
        let tile = self.tile(row, col)?;
        Some(TileView::from_state(
            tile.ship().is_some(),
            self.is_shot(row, col),
        ))
    }

    /// Whether (`row`, `col`) has been fired at. Off-grid coordinates count
    /// as shot.
    pub fn is_shot(&self, row: usize, col: usize) -> bool {
        self.shots.get(row, col).unwrap_or(true)
    }

    pub fn ship(&self, name: ShipName) -> Option<&Ship> {
        self.fleet.get(&name)
    }

    /// Ships of the fleet, ordered by name.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.fleet.values()
    }

    pub fn ships_killed(&self) -> usize {
        self.ships_killed
    }

    pub fn all_deployed(&self) -> bool {
        self.fleet.values().all(Ship::is_deployed)
    }

    pub fn all_destroyed(&self) -> bool {
        self.ships_killed == self.fleet.len()
    }

    /// Mask of every tile that has been shot.
    pub fn shots(&self) -> SeaBoard {
        self.shots
    }

    /// Mask of every shot that struck a ship.
    pub fn hits(&self) -> SeaBoard {
        self.hits
    }

    /// Mask of every tile a ship sits on.
    pub fn occupied(&self) -> SeaBoard {
        let mut mask = SeaBoard::new();
        for &(r, c) in self.fleet.values().flat_map(|s| s.tiles()) {
            // footprints are bounds checked on placement
            let _ = mask.set(r, c);
        }
        mask
    }

    /// Read-only, fog-of-war view for the opponent.
    pub fn enemy_view(&self) -> EnemyView<'_> {
        EnemyView { grid: self }
    }

    /// Handle the opponent fires through.
    pub fn as_enemy(&mut self) -> EnemyGrid<'_> {
        EnemyGrid { grid: self }
    }

    fn footprint(
        name: ShipName,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Vec<(usize, usize)>, GridError> {
        (0..name.size())
            .map(|i| {
                let (dr, dc) = orientation.step(i);
                match (row.checked_add(dr), col.checked_add(dc)) {
                    (Some(r), Some(c)) if r < GRID_SIZE && c < GRID_SIZE => Ok((r, c)),
                    _ => Err(GridError::OutOfBounds { row, col }),
                }
            })
            .collect()
    }

    /// Tiles held by the ship being moved count as free.
    fn check_overlap(&self, name: ShipName, cells: &[(usize, usize)]) -> Result<(), GridError> {
        for &(r, c) in cells {
            match self.tiles[r][c].ship() {
                Some(other) if other != name => {
                    return Err(GridError::Overlap {
                        row: r,
                        col: c,
                        ship: other,
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Place (or move) a ship with its anchor at (`row`, `col`). On failure
    /// the grid is left untouched.
    pub fn try_place_ship(
        &mut self,
        name: ShipName,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        if !self.fleet.contains_key(&name) {
            return Err(GridError::UnknownShip(name));
        }
        let cells = Self::footprint(name, row, col, orientation)?;
        self.check_overlap(name, &cells)?;

        let ship = self.fleet.get_mut(&name).ok_or(GridError::UnknownShip(name))?;
        for (r, c) in ship.remove() {
            self.tiles[r][c].clear_ship();
        }
        for &(r, c) in &cells {
            self.tiles[r][c].assign_ship(name)?;
        }
        ship.deploy(cells, (row, col, orientation));
        debug!("placed {} at ({}, {}) {:?}", name, row, col, orientation);
        Ok(())
    }

    /// Returns a random in-bounds, non-overlapping (row, col, Orientation)
    /// for `name`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        name: ShipName,
    ) -> Result<(usize, usize, Orientation), GridError> {
        let len = name.size();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                GRID_SIZE - len
            } else {
                GRID_SIZE - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                GRID_SIZE - len
            } else {
                GRID_SIZE - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let cells = Self::footprint(name, r, c, orient)?;
            if self.check_overlap(name, &cells).is_ok() {
                return Ok((r, c, orient));
            }
        }
        Err(GridError::UnableToPlaceShip(name))
    }

    /// Deploy every ship of the fleet at a random position.
    pub fn randomize_deployment<R: Rng>(&mut self, rng: &mut R) -> Result<(), GridError> {
        let names: Vec<ShipName> = self.fleet.keys().copied().collect();
        for name in names {
            let (r, c, o) = self.random_placement(rng, name)?;
            self.try_place_ship(name, r, c, o)?;
        }
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`). The only way shot state changes.
    pub fn hit_tile(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        let occupant = self
            .tile(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?
            .ship();
        if self.shots.get(row, col)? {
            return Ok(AttackResult::new(AttackOutcome::AlreadyShot, None, row, col));
        }
        self.shots.set(row, col)?;

        let Some(name) = occupant else {
            return Ok(AttackResult::new(AttackOutcome::Miss, None, row, col));
        };
        self.hits.set(row, col)?;
        let ship = self.fleet.get_mut(&name).ok_or(GridError::UnknownShip(name))?;
        if !ship.hit() {
            return Ok(AttackResult::new(AttackOutcome::Hit, Some(name), row, col));
        }

        self.ships_killed += 1;
        let outcome = if self.all_destroyed() {
            AttackOutcome::GameOver
        } else {
            AttackOutcome::Destroyed
        };
        Ok(AttackResult::new(outcome, Some(name), row, col))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// What an opponent may know about a grid: which tiles were shot and which
/// of those were hits. Ship positions stay hidden.
#[derive(Debug, Clone, Copy)]
pub struct EnemyView<'a> {
    grid: &'a Grid,
}

impl<'a> EnemyView<'a> {
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Tile as seen through the fog: unshot tiles are always `Sea`.
    pub fn view(&self, row: usize, col: usize) -> Option<TileView> {
        self.grid.view(row, col).map(|v| match v {
            TileView::Ship => TileView::Sea,
            v => v,
        })
    }

    /// Out-of-bounds coordinates report as shot so they are never targeted.
    pub fn is_shot(&self, row: usize, col: usize) -> bool {
        self.grid.is_shot(row, col)
    }

    pub fn shots(&self) -> SeaBoard {
        self.grid.shots
    }

    pub fn hits(&self) -> SeaBoard {
        self.grid.hits
    }

    pub fn misses(&self) -> SeaBoard {
        self.grid.shots & !self.grid.hits
    }

    /// Tiles still open to attack.
    pub fn unshot(&self) -> SeaBoard {
        !self.grid.shots
    }

    pub fn ships_killed(&self) -> usize {
        self.grid.ships_killed
    }
}

/// An opponent's grid as seen by the shooter: shots can be fired and their
/// results read back, but ship positions stay hidden.
#[derive(Debug)]
pub struct EnemyGrid<'a> {
    grid: &'a mut Grid,
}

impl<'a> EnemyGrid<'a> {
    pub fn hit_tile(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        self.grid.hit_tile(row, col)
    }

    pub fn view(&self) -> EnemyView<'_> {
        self.grid.enemy_view()
    }
}
