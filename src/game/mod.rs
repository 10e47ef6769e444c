//! Session state and turn sequencing
//!
//! Single-threaded and event-driven: actions arrive one at a time from the
//! presentation layer and mutate the one `GameState` in place.
//! - Seeded RNG only (the die)
//! - No blocking, no timeouts, no cancellation

pub mod die;
pub mod player;
pub mod state;
pub mod turn;

pub use die::DieRoller;
pub use player::{Player, PlayerSpec, ROSTER_DELIMITER, parse_roster};
pub use state::{GameState, PlayerSnapshot, StateSnapshot, TurnPhase};
pub use turn::{Action, GameEvent, apply};
