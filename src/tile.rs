//! A single cell of the sea grid.

use crate::common::GridError;
use crate::ship::ShipName;

/// What a tile looks like to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileView {
    Sea,
    Ship,
    Hit,
    Miss,
}

impl TileView {
    pub(crate) fn from_state(occupied: bool, shot: bool) -> Self {
        match (occupied, shot) {
            (false, false) => TileView::Sea,
            (false, true) => TileView::Miss,
            (true, false) => TileView::Ship,
            (true, true) => TileView::Hit,
        }
    }
}

/// A grid cell: its position and the ship, if any, sitting on it. Whether
/// it has been shot is tracked by the grid's shot mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    row: usize,
    column: usize,
    ship: Option<ShipName>,
}

impl Tile {
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            ship: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn ship(&self) -> Option<ShipName> {
        self.ship
    }

    pub(crate) fn assign_ship(&mut self, ship: ShipName) -> Result<(), GridError> {
        if self.ship.is_some() {
            return Err(GridError::ShipAlreadyOccupiesTile {
                row: self.row,
                col: self.column,
            });
        }
        self.ship = Some(ship);
        Ok(())
    }

    pub(crate) fn clear_ship(&mut self) {
        self.ship = None;
    }
}
