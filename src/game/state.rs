//! Game state and read-only snapshots
//!
//! `GameState` is the single owner of everything that changes during a
//! session. The presentation layer reads it between actions and never
//! mutates it directly.

use serde::{Deserialize, Serialize};

use super::die::DieRoller;
use super::player::{Player, PlayerSpec, parse_roster};
use crate::board::{Board, Category, SpaceId};
use crate::error::{ConfigurationError, GameError};
use crate::settings::Settings;

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Players seated; nobody's turn has begun
    NotStarted,
    /// `active` may roll, move their token, or collect a wedge
    TurnActive { active: usize },
}

impl TurnPhase {
    pub fn active(self) -> Option<usize> {
        match self {
            TurnPhase::NotStarted => None,
            TurnPhase::TurnActive { active } => Some(active),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) players: Vec<Player>,
    pub(super) phase: TurnPhase,
    /// Most recent die roll, for display only
    pub(super) last_roll: Option<u8>,
    pub(super) die: DieRoller,
}

impl GameState {
    /// Seat the players and build the board
    ///
    /// Every token starts on the hub. Fails before building anything if the
    /// roster or settings are unusable.
    pub fn initialize(
        roster: &[PlayerSpec],
        settings: &Settings,
    ) -> Result<Self, ConfigurationError> {
        if roster.is_empty() {
            return Err(ConfigurationError::EmptyRoster);
        }
        settings.validate()?;
        let scheme = settings.category_scheme()?;

        let board = Board::new(scheme, settings.seam_tolerance);
        let start = board.hub();
        let players = roster
            .iter()
            .enumerate()
            .map(|(i, spec)| Player::from_spec(i, spec, settings.max_name_len, start))
            .collect::<Result<Vec<_>, _>>()?;

        let die = match settings.die_seed {
            Some(seed) => DieRoller::seeded(seed),
            None => DieRoller::from_entropy(),
        };

        log::info!(
            "Game initialized with {} players: {}",
            players.len(),
            players
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            board,
            players,
            phase: TurnPhase::NotStarted,
            last_roll: None,
            die,
        })
    }

    /// Parse `name_color` tokens and seat them
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        settings: &Settings,
    ) -> Result<Self, GameError> {
        let roster = parse_roster(tokens)?;
        Ok(Self::initialize(&roster, settings)?)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Index of the player whose turn it is
    pub fn active_index(&self) -> Option<usize> {
        self.phase.active()
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active_index().and_then(|i| self.players.get(i))
    }

    /// Player whose turn begins on the next advance
    pub fn next_index(&self) -> usize {
        match self.phase {
            TurnPhase::NotStarted => 0,
            TurnPhase::TurnActive { active } => (active + 1) % self.players.len(),
        }
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> StateSnapshot {
        let players = self
            .players
            .iter()
            .map(|p| {
                let (radius, angle) = self
                    .board
                    .space(p.token)
                    .map(|s| (s.radius, s.angle))
                    .unwrap_or_default();
                PlayerSnapshot {
                    name: p.name.clone(),
                    color: p.color.clone(),
                    token: p.token,
                    token_radius: radius,
                    token_angle: angle,
                    collected: p.collected.iter().copied().collect(),
                }
            })
            .collect();

        StateSnapshot {
            active_player: self.active_index(),
            last_roll: self.last_roll,
            players,
        }
    }
}

/// Rendering view of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub color: String,
    pub token: SpaceId,
    pub token_radius: f32,
    pub token_angle: f32,
    pub collected: Vec<Category>,
}

/// Rendering view of the whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub active_player: Option<usize>,
    pub last_roll: Option<u8>,
    pub players: Vec<PlayerSnapshot>,
}
