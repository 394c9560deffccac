use crate::ship::ShipName;

pub const GRID_SIZE: usize = 11;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipName; NUM_SHIPS] = [
    ShipName::Tug,
    ShipName::Submarine,
    ShipName::Destroyer,
    ShipName::Battleship,
    ShipName::AircraftCarrier,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 2 + 3 + 4 + 5;

/// Random placement gives up on a ship after this many rejected samples.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Score awarded per hit.
pub const HIT_POINTS: i32 = 12;
/// Score deducted per ship of your own fleet that has been sunk.
pub const SHIP_LOST_PENALTY: i32 = 20;

/// Width of the name column in the high-score file.
pub const NAME_WIDTH: usize = 10;
pub const MAX_HIGH_SCORES: usize = 10;

