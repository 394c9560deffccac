use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::{AttackOutcome, AttackResult, MatchError};
use crate::grid::EnemyView;
use crate::player::Player;
use crate::player_ai::AiPlayer;
use crate::ship::{Orientation, ShipName};

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Random search only.
    Easy,
    /// Hunts the neighbours of every hit.
    Medium,
    /// Follows the line of a hit ship.
    #[default]
    Hard,
}

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    Deploying,
    Discovering,
    Ending,
}

/// The two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Shared flag used to abandon a match, e.g. when the window is closed.
#[derive(Debug, Clone, Default)]
pub struct AbandonHandle(Arc<AtomicBool>);

impl AbandonHandle {
    pub fn abandon(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_abandoned(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

type AttackListener = Box<dyn FnMut(Side, &AttackResult)>;

/// One human-versus-computer match.
pub struct BattleshipsMatch {
    difficulty: Difficulty,
    state: MatchState,
    turn: Side,
    winner: Option<Side>,
    human: Player,
    computer: AiPlayer,
    rng: SmallRng,
    listeners: Vec<AttackListener>,
    abandon: AbandonHandle,
}

impl BattleshipsMatch {
    /// Start a reproducible match; every random decision derives from `seed`.
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self, MatchError> {
        Self::with_rng(difficulty, SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(difficulty: Difficulty) -> Result<Self, MatchError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(difficulty, SmallRng::from_rng(&mut seed_rng))
    }

    /// Both fleets start randomly deployed; the human may rearrange theirs
    /// until the battle begins.
    pub fn with_rng(difficulty: Difficulty, mut rng: SmallRng) -> Result<Self, MatchError> {
        let human = Player::new(&mut rng)?;
        let computer = AiPlayer::new(difficulty, &mut rng)?;
        info!("new {:?} match", difficulty);
        Ok(Self {
            difficulty,
            state: MatchState::Deploying,
            turn: Side::Human,
            winner: None,
            human,
            computer,
            rng,
            listeners: Vec::new(),
            abandon: AbandonHandle::default(),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> MatchState {
        if self.abandon.is_abandoned() {
            MatchState::Ending
        } else {
            self.state
        }
    }

    /// Side whose shot is awaited.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Winner once the match has ended; `None` while running or if abandoned.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        self.computer.player()
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => self.human(),
            Side::Computer => self.computer(),
        }
    }

    /// What `side` can see of its opponent's grid.
    pub fn enemy_view(&self, side: Side) -> EnemyView<'_> {
        self.player(side.opponent()).enemy_view()
    }

    /// Register a callback run after every resolved shot, with the side that
    /// fired it.
    pub fn subscribe_on_attack_completed<F>(&mut self, listener: F)
    where
        F: FnMut(Side, &AttackResult) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn abandon_handle(&self) -> AbandonHandle {
        self.abandon.clone()
    }

    /// Abandon the match. An AI turn in progress stops before its next shot.
    pub fn abandon(&mut self) {
        self.abandon.abandon();
        self.finish(None);
    }

    fn expect_state(&mut self, expected: MatchState) -> Result<(), MatchError> {
        if self.abandon.is_abandoned() && self.state != MatchState::Ending {
            self.finish(None);
        }
        if self.state != expected {
            return Err(MatchError::WrongState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    fn finish(&mut self, winner: Option<Side>) {
        if self.state == MatchState::Ending {
            return;
        }
        self.state = MatchState::Ending;
        self.winner = winner;
        match winner {
            Some(side) => info!(
                "match over, {:?} wins with score {}",
                side,
                self.player(side).score()
            ),
            None => info!("match abandoned"),
        }
    }

    /// Move one of the human's ships.
    pub fn place_ship(
        &mut self,
        name: ShipName,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), MatchError> {
        self.expect_state(MatchState::Deploying)?;
        self.human
            .grid_mut()
            .try_place_ship(name, row, col, orientation)?;
        Ok(())
    }

    /// Redeploy the human's whole fleet at random.
    pub fn randomize_deployment(&mut self) -> Result<(), MatchError> {
        self.expect_state(MatchState::Deploying)?;
        self.human.grid_mut().randomize_deployment(&mut self.rng)?;
        Ok(())
    }

    pub fn begin_battle(&mut self) -> Result<(), MatchError> {
        self.expect_state(MatchState::Deploying)?;
        if !self.human.ready_to_deploy() || !self.computer.player().ready_to_deploy() {
            return Err(MatchError::FleetNotDeployed);
        }
        self.state = MatchState::Discovering;
        self.turn = Side::Human;
        info!("battle begins");
        Ok(())
    }

    /// Fire the human's shot. A miss hands the turn to the computer, which
    /// plays its whole turn before this returns.
    pub fn human_shoot(&mut self, row: usize, col: usize) -> Result<AttackResult, MatchError> {
        self.expect_state(MatchState::Discovering)?;
        if self.turn != Side::Human {
            return Err(MatchError::NotHumanTurn);
        }
        let mut target = self.computer.player_mut().grid_mut().as_enemy();
        let result = self.human.shoot(&mut target, row, col)?;
        self.notify(Side::Human, &result);

        match result.outcome() {
            AttackOutcome::GameOver => self.finish(Some(Side::Human)),
            AttackOutcome::Miss => {
                self.turn = Side::Computer;
                self.computer_turn()?;
            }
            AttackOutcome::Hit | AttackOutcome::Destroyed | AttackOutcome::AlreadyShot => {}
        }
        Ok(result)
    }

    fn computer_turn(&mut self) -> Result<(), MatchError> {
        if self.abandon.is_abandoned() {
            self.finish(None);
            return Ok(());
        }
        let Self {
            human,
            computer,
            rng,
            listeners,
            abandon,
            ..
        } = &mut *self;
        let cancelled = || abandon.is_abandoned();
        let mut notify = |result: &AttackResult| {
            for listener in listeners.iter_mut() {
                listener(Side::Computer, result);
            }
        };
        let mut target = human.grid_mut().as_enemy();
        let last = computer.take_turn(&mut target, rng, &cancelled, &mut notify)?;

        if last.outcome() == AttackOutcome::GameOver {
            self.finish(Some(Side::Computer));
        } else if self.abandon.is_abandoned() {
            self.finish(None);
        } else {
            self.turn = Side::Human;
        }
        Ok(())
    }

    fn notify(&mut self, side: Side, result: &AttackResult) {
        for listener in self.listeners.iter_mut() {
            listener(side, result);
        }
    }
}

impl core::fmt::Debug for BattleshipsMatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleshipsMatch")
            .field("difficulty", &self.difficulty)
            .field("state", &self.state)
            .field("turn", &self.turn)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
