//! Ship definitions: the fixed fleet enumeration and per-ship damage tracking.

use core::fmt;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Ship grows to the right of its anchor.
    Horizontal,
    /// Ship grows downwards from its anchor.
    Vertical,
}

impl Orientation {
    /// Offset of the `i`th segment from the anchor.
    pub(crate) fn step(self, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, i),
            Orientation::Vertical => (i, 0),
        }
    }
}

/// The five ships of a fleet. The discriminant is the ship's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShipName {
    Tug = 1,
    Submarine = 2,
    Destroyer = 3,
    Battleship = 4,
    AircraftCarrier = 5,
}

impl ShipName {
    /// Number of tiles the ship occupies.
    pub const fn size(self) -> usize {
        self as usize
    }

    /// Human readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            ShipName::Tug => "Tug",
            ShipName::Submarine => "Submarine",
            ShipName::Destroyer => "Destroyer",
            ShipName::Battleship => "Battleship",
            ShipName::AircraftCarrier => "Aircraft Carrier",
        }
    }
}

impl fmt::Display for ShipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A ship of the fleet. Undeployed until the grid assigns it tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: ShipName,
    hits: usize,
    tiles: Vec<(usize, usize)>,
    anchor: Option<(usize, usize, Orientation)>,
}

impl Ship {
    pub fn new(name: ShipName) -> Self {
        Self {
            name,
            hits: 0,
            tiles: Vec::with_capacity(name.size()),
            anchor: None,
        }
    }

    pub fn name(&self) -> ShipName {
        self.name
    }

    pub fn size(&self) -> usize {
        self.name.size()
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Coordinates the ship occupies, anchor first.
    pub fn tiles(&self) -> &[(usize, usize)] {
        &self.tiles
    }

    /// Anchor (row, col) and orientation of the current deployment.
    pub fn anchor(&self) -> Option<(usize, usize, Orientation)> {
        self.anchor
    }

    pub fn is_deployed(&self) -> bool {
        !self.tiles.is_empty()
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == self.size()
    }

    /// Whether (`row`, `col`) is one of the ship's tiles.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.tiles.contains(&(row, col))
    }

    pub(crate) fn deploy(
        &mut self,
        tiles: Vec<(usize, usize)>,
        anchor: (usize, usize, Orientation),
    ) {
        self.tiles = tiles;
        self.anchor = Some(anchor);
    }

    /// Forget the current deployment, returning the tiles that were occupied.
    pub(crate) fn remove(&mut self) -> Vec<(usize, usize)> {
        self.anchor = None;
        core::mem::take(&mut self.tiles)
    }

    /// Register a hit. Returns `true` if the hit sank the ship.
    pub(crate) fn hit(&mut self) -> bool {
        if self.hits < self.size() {
            self.hits += 1;
        }
        self.is_destroyed()
    }
}
