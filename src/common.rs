//! Common types for Battleships: attack results and the error taxonomy.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::MatchState;
use crate::ship::ShipName;

/// Kind of outcome produced by resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot landed in open sea.
    Miss,
    /// Shot sank a ship.
    Destroyed,
    /// The coordinate had been shot before; nothing changed.
    AlreadyShot,
    /// Shot sank the last ship of the fleet.
    GameOver,
}

impl AttackOutcome {
    /// Whether this outcome struck a ship.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AttackOutcome::Hit | AttackOutcome::Destroyed | AttackOutcome::GameOver
        )
    }

    /// Whether the shooter's turn ends with this outcome.
    pub fn ends_turn(self) -> bool {
        matches!(self, AttackOutcome::Miss | AttackOutcome::GameOver)
    }
}

/// Immutable record of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    outcome: AttackOutcome,
    ship: Option<ShipName>,
    row: usize,
    column: usize,
}

impl AttackResult {
    pub(crate) fn new(
        outcome: AttackOutcome,
        ship: Option<ShipName>,
        row: usize,
        column: usize,
    ) -> Self {
        Self {
            outcome,
            ship,
            row,
            column,
        }
    }

    pub fn outcome(&self) -> AttackOutcome {
        self.outcome
    }

    /// Ship involved, present for hits, sinkings and game over.
    pub fn ship(&self) -> Option<ShipName> {
        self.ship
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Short text describing the outcome, without the ship name.
    pub fn description(&self) -> String {
        match self.outcome {
            AttackOutcome::Hit => "hit something!".to_string(),
            AttackOutcome::Miss => "missed".to_string(),
            AttackOutcome::Destroyed | AttackOutcome::GameOver => {
                "destroyed the enemy's".to_string()
            }
            AttackOutcome::AlreadyShot => {
                format!("have already attacked [{},{}]!", self.row, self.column)
            }
        }
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ship {
            Some(ship) => write!(f, "{} {}", self.description(), ship),
            None => f.write_str(&self.description()),
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate or placement falls outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement overlaps another ship.
    Overlap { row: usize, col: usize, ship: ShipName },
    /// A second ship was assigned to an occupied tile.
    ShipAlreadyOccupiesTile { row: usize, col: usize },
    /// A tile was shot twice outside the already-shot path.
    RepeatedShot { row: usize, col: usize },
    /// Random placement gave up.
    UnableToPlaceShip(ShipName),
    /// Tile references a ship missing from the fleet.
    UnknownShip(ShipName),
    /// Every tile of the opponent grid has been shot.
    NoTargetsRemaining,
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoardError(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GridError::OutOfBounds { row, col } => {
                write!(f, "Position [{}, {}] is outside the grid", row, col)
            }
            GridError::Overlap { row, col, ship } => {
                write!(f, "The {} is already at [{}, {}]", ship, row, col)
            }
            GridError::ShipAlreadyOccupiesTile { row, col } => {
                write!(f, "There is already a ship at [{}, {}]", row, col)
            }
            GridError::RepeatedShot { row, col } => {
                write!(f, "Tile [{}, {}] has already been shot", row, col)
            }
            GridError::UnableToPlaceShip(ship) => write!(f, "Unable to place the {}", ship),
            GridError::UnknownShip(ship) => write!(f, "The {} is not part of the fleet", ship),
            GridError::NoTargetsRemaining => write!(f, "Every tile has already been shot"),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors returned by match commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Command is not valid in the current match state.
    WrongState {
        expected: MatchState,
        actual: MatchState,
    },
    /// The human tried to fire while the computer holds the turn.
    NotHumanTurn,
    /// Battle cannot begin before both fleets are deployed.
    FleetNotDeployed,
    Grid(GridError),
}

impl From<GridError> for MatchError {
    fn from(err: GridError) -> Self {
        MatchError::Grid(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::WrongState { expected, actual } => write!(
                f,
                "Match is {:?}, command requires {:?}",
                actual, expected
            ),
            MatchError::NotHumanTurn => write!(f, "It is not the human player's turn"),
            MatchError::FleetNotDeployed => write!(f, "Every ship must be deployed first"),
            MatchError::Grid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MatchError {}
