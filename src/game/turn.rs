//! Turn actions
//!
//! Every action is synchronous and either completes immediately or is a
//! silent no-op. There is no terminal state: collecting all six wedges ends
//! nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, TurnPhase};
use crate::board::{Category, SpaceId};
use crate::error::InvalidActionError;

/// Input commands from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// End the current turn and begin the next player's
    AdvanceTurn,
    /// Roll the die (observational only)
    RollDie,
    /// Move the active token to the space nearest this point
    MoveToken(Vec2),
    /// Collect the wedge under the active token
    CollectWedge,
}

/// Observations produced by actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A turn began; `token` is where that player stands
    TurnStarted {
        player: usize,
        name: String,
        token: SpaceId,
    },
    Rolled(u8),
    TokenMoved {
        player: usize,
        space: SpaceId,
    },
    WedgeCollected {
        player: usize,
        category: Category,
    },
}

/// Apply one action to the state
///
/// Returns `Ok(None)` for actions that were absorbed as no-ops.
pub fn apply(
    state: &mut GameState,
    action: Action,
) -> Result<Option<GameEvent>, InvalidActionError> {
    match action {
        Action::AdvanceTurn => Ok(Some(state.advance_turn())),
        Action::RollDie => Ok(Some(GameEvent::Rolled(state.roll_die()))),
        Action::MoveToken(point) => {
            let space = state.move_token(point)?;
            let player = state.require_active()?;
            Ok(Some(GameEvent::TokenMoved { player, space }))
        }
        Action::CollectWedge => {
            let collected = state.collect_wedge()?;
            let player = state.require_active()?;
            Ok(collected.map(|category| GameEvent::WedgeCollected { player, category }))
        }
    }
}

impl GameState {
    fn require_active(&self) -> Result<usize, InvalidActionError> {
        self.phase.active().ok_or_else(|| InvalidActionError::NotStarted {
            next: self.players[self.next_index()].name.clone(),
        })
    }

    /// Begin the next player's turn, wrapping after the last player
    pub fn advance_turn(&mut self) -> GameEvent {
        let active = self.next_index();
        self.phase = TurnPhase::TurnActive { active };

        let player = &self.players[active];
        log::info!("Team {} to move", player.name);
        GameEvent::TurnStarted {
            player: active,
            name: player.name.clone(),
            token: player.token,
        }
    }

    /// Roll the die; changes nothing but the displayed roll
    pub fn roll_die(&mut self) -> u8 {
        let roll = self.die.roll();
        self.last_roll = Some(roll);
        log::debug!("Rolled a {roll}");
        roll
    }

    /// Move the active token to the space nearest `point`
    ///
    /// Placement is free-form: no check against the roll or distance. A
    /// point with a NaN or infinite coordinate leaves the token where it is
    /// and returns its current space.
    pub fn move_token(&mut self, point: Vec2) -> Result<SpaceId, InvalidActionError> {
        let active = self.require_active()?;
        let Some(space) = self.board.try_nearest(point).map(|s| s.id) else {
            log::debug!("Ignoring move to non-finite point {point}");
            return Ok(self.players[active].token);
        };
        self.players[active].token = space;
        log::debug!("{} moved to {}", self.players[active].name, space);
        Ok(space)
    }

    /// Move the active token to the space nearest a polar point
    pub fn move_token_polar(
        &mut self,
        radius: f32,
        angle: f32,
    ) -> Result<SpaceId, InvalidActionError> {
        self.move_token(crate::polar_to_cartesian(radius, angle))
    }

    /// Collect the wedge under the active token
    ///
    /// Returns the category newly collected. Standing off a wedge space, or
    /// on one whose wedge is already held, is a silent no-op.
    pub fn collect_wedge(&mut self) -> Result<Option<Category>, InvalidActionError> {
        let active = self.require_active()?;
        let player = &mut self.players[active];

        let Some(category) = self.board.wedge_category(player.token) else {
            log::debug!("{} is not on a wedge space", player.name);
            return Ok(None);
        };
        if !player.collected.insert(category) {
            log::debug!("{} already holds this wedge", player.name);
            return Ok(None);
        }

        log::info!("Collected {} wedge", self.board.scheme().name(category));
        Ok(Some(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpaceKind;
    use crate::game::PlayerSpec;
    use crate::settings::Settings;
    use proptest::prelude::*;

    fn new_game(names: &[&str]) -> GameState {
        let roster: Vec<PlayerSpec> = names
            .iter()
            .map(|n| PlayerSpec::new(*n, "red"))
            .collect();
        let settings = Settings {
            die_seed: Some(12345),
            ..Settings::default()
        };
        GameState::initialize(&roster, &settings).expect("valid roster")
    }

    fn wedge_point(state: &GameState, category: Category) -> Vec2 {
        state
            .board()
            .wedge_space(category)
            .map(|s| s.position())
            .expect("every category has a wedge space")
    }

    #[test]
    fn test_actions_before_first_turn() {
        let mut state = new_game(&["alice", "bob"]);
        let err = state.move_token(Vec2::ZERO).unwrap_err();
        assert_eq!(
            err,
            InvalidActionError::NotStarted {
                next: "ALICE".to_string()
            }
        );
        assert!(state.collect_wedge().is_err());
        assert!(apply(&mut state, Action::CollectWedge).is_err());
        // Rolling is allowed as soon as the game exists
        let roll = state.roll_die();
        assert!((1..=6).contains(&roll));
        assert_eq!(state.phase(), TurnPhase::NotStarted);
    }

    #[test]
    fn test_advance_turn_cycles() {
        let mut state = new_game(&["a", "b", "c"]);
        state.advance_turn();
        let start = state.active_index();
        assert_eq!(start, Some(0));
        for _ in 0..3 {
            state.advance_turn();
        }
        assert_eq!(state.active_index(), start);
    }

    #[test]
    fn test_advance_reports_token_location() {
        let mut state = new_game(&["alice", "bob"]);
        let hub = state.board().hub();
        assert_eq!(
            state.advance_turn(),
            GameEvent::TurnStarted {
                player: 0,
                name: "ALICE".to_string(),
                token: hub
            }
        );
        let moved = state.move_token(Vec2::new(6.0, 0.0)).expect("turn active");
        state.advance_turn();
        let event = state.advance_turn();
        assert!(matches!(event, GameEvent::TurnStarted { player: 0, token, .. } if token == moved));
    }

    #[test]
    fn test_roll_is_observational() {
        let mut state = new_game(&["alice", "bob"]);
        state.advance_turn();
        state.move_token(Vec2::new(0.0, 6.0)).expect("turn active");
        let before = state.snapshot();
        let roll = state.roll_die();
        let after = state.snapshot();
        assert_eq!(after.last_roll, Some(roll));
        assert_eq!(after.active_player, before.active_player);
        assert_eq!(after.players, before.players);
    }

    #[test]
    fn test_roll_1000_times() {
        let mut state = new_game(&["alice"]);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let roll = state.roll_die();
            assert!((1..=6).contains(&roll));
            seen[roll as usize] = true;
        }
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_move_is_free_form() {
        let mut state = new_game(&["alice"]);
        state.advance_turn();
        let far = state.move_token_polar(6.0, 3.0).expect("turn active");
        assert_eq!(state.players()[0].token, far);
        let hub = state.move_token(Vec2::new(0.05, 0.05)).expect("turn active");
        assert_eq!(hub, state.board().hub());
    }

    #[test]
    fn test_move_to_non_finite_point_keeps_token() {
        let mut state = new_game(&["alice"]);
        state.advance_turn();
        let start = state.move_token_polar(6.0, 3.0).expect("turn active");
        assert_eq!(state.move_token(Vec2::new(f32::NAN, 1.0)), Ok(start));
        assert_eq!(state.move_token(Vec2::new(f32::INFINITY, 0.0)), Ok(start));
        assert_eq!(state.players()[0].token, start);
        assert_ne!(start, SpaceId(0));
    }

    #[test]
    fn test_collect_off_wedge_is_noop() {
        let mut state = new_game(&["alice"]);
        state.advance_turn();
        assert_eq!(state.collect_wedge(), Ok(None));
        // Neutral ring space
        state.move_token_polar(6.0, crate::ring_angle(2)).expect("turn active");
        assert_eq!(state.collect_wedge(), Ok(None));
        // Spoke space on a wedge arm
        state.move_token_polar(5.0, 0.0).expect("turn active");
        assert_eq!(state.collect_wedge(), Ok(None));
        assert!(state.players()[0].collected.is_empty());
    }

    #[test]
    fn test_collect_is_idempotent() {
        let mut state = new_game(&["alice"]);
        state.advance_turn();
        let history = Category::ALL[3];
        state.move_token(wedge_point(&state, history)).expect("turn active");

        assert_eq!(state.collect_wedge(), Ok(Some(history)));
        assert_eq!(state.collect_wedge(), Ok(None));
        assert_eq!(apply(&mut state, Action::CollectWedge), Ok(None));
        assert_eq!(state.players()[0].collected.len(), 1);
    }

    #[test]
    fn test_collect_all_six_has_no_terminal_effect() {
        let mut state = new_game(&["alice", "bob"]);
        state.advance_turn();
        for category in Category::ALL {
            state.move_token(wedge_point(&state, category)).expect("turn active");
            assert_eq!(state.collect_wedge(), Ok(Some(category)));
        }
        assert_eq!(state.players()[0].collected.len(), 6);
        state.advance_turn();
        assert_eq!(state.active_index(), Some(1));
        assert!(state.roll_die() >= 1);
    }

    #[test]
    fn test_two_player_scenario() {
        let roster = vec![PlayerSpec::new("ALICE", "red"), PlayerSpec::new("BOB", "blue")];
        let mut state =
            GameState::initialize(&roster, &Settings::default()).expect("valid roster");

        state.advance_turn();
        assert_eq!(state.active_player().map(|p| p.name.as_str()), Some("ALICE"));

        let scheme = state.board().scheme().clone();
        let wedge = scheme.by_color("yellow").expect("standard scheme has yellow");
        let point = wedge_point(&state, wedge);
        let event = apply(&mut state, Action::MoveToken(point)).expect("turn active");
        assert!(matches!(event, Some(GameEvent::TokenMoved { player: 0, .. })));

        let event = apply(&mut state, Action::CollectWedge).expect("turn active");
        assert_eq!(
            event,
            Some(GameEvent::WedgeCollected {
                player: 0,
                category: wedge
            })
        );
        assert_eq!(
            state.players()[0].collected.iter().copied().collect::<Vec<_>>(),
            vec![wedge]
        );

        state.advance_turn();
        assert_eq!(state.active_player().map(|p| p.name.as_str()), Some("BOB"));
        assert!(state.players()[1].collected.is_empty());
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Advance,
        Roll,
        Move(f32, f32),
        Collect,
    }

    fn collected_counts(state: &GameState) -> Vec<usize> {
        state.players().iter().map(|p| p.collected.len()).collect()
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Advance),
            Just(Step::Roll),
            (0.0f32..7.0, 0.0f32..std::f32::consts::TAU).prop_map(|(r, a)| Step::Move(r, a)),
            Just(Step::Collect),
        ]
    }

    proptest! {
        #[test]
        fn prop_collected_only_grows(steps in prop::collection::vec(step(), 1..60)) {
            let mut state = new_game(&["alice", "bob", "carol"]);
            for step in steps {
                let before = collected_counts(&state);
                let on_wedge = state
                    .active_player()
                    .and_then(|p| state.board().wedge_category(p.token))
                    .is_some();
                let result = match step {
                    Step::Advance => Ok(Some(state.advance_turn())),
                    Step::Roll => apply(&mut state, Action::RollDie),
                    Step::Move(r, a) => state.move_token_polar(r, a).map(|_| None),
                    Step::Collect => apply(&mut state, Action::CollectWedge),
                };
                let after = collected_counts(&state);
                for (b, a) in before.iter().zip(&after) {
                    prop_assert!(a >= b);
                    prop_assert!(*a <= b + 1);
                }
                if !on_wedge || !matches!(step, Step::Collect) {
                    prop_assert_eq!(&before, &after);
                }
                if state.phase() == TurnPhase::NotStarted {
                    prop_assert!(!matches!(step, Step::Advance));
                } else {
                    prop_assert!(result.is_ok());
                }
                // Tokens never rest on a wedge marker
                for p in state.players() {
                    let kind = state.board().space(p.token).map(|s| s.kind());
                    prop_assert_ne!(kind, Some(SpaceKind::Wedge));
                }
            }
        }
    }
}
