//! Pursuit Wheel - a circular trivia board
//!
//! Core modules:
//! - `board`: Immutable board model (geometry, category layout, pointer snapping)
//! - `game`: Players, turn sequencing, die rolls and wedge collection
//! - `settings`: Configuration (category scheme, snap tolerance, name limits)
//! - `driver`: Line-oriented command loop used by the binary
//! - `error`: Configuration and sequencing errors

pub mod board;
pub mod driver;
pub mod error;
pub mod game;
pub mod settings;

pub use board::{
    Board, Category, CategoryScheme, SchemePreset, Space, SpaceClass, SpaceId, SpaceKind,
};
pub use error::{ConfigurationError, GameError, InvalidActionError};
pub use game::{Action, GameEvent, GameState, PlayerSpec, StateSnapshot, TurnPhase};
pub use settings::Settings;

use glam::Vec2;

/// Board configuration constants
pub mod consts {
    /// Spaces on the outer ring
    pub const RING_SPACES: usize = 42;
    /// Radius of the outer ring
    pub const RING_RADIUS: f32 = 6.0;
    /// Ring indices between two spokes (every 7th ring space starts a spoke)
    pub const SPOKE_STRIDE: usize = 7;
    /// Number of spokes, one per category
    pub const SPOKE_ARMS: usize = 6;
    /// Spaces along each spoke, at radii 1..=SPOKE_DEPTH
    pub const SPOKE_DEPTH: usize = 5;
    /// Number of trivia categories
    pub const CATEGORY_COUNT: usize = 6;
    /// Total spaces: ring + spokes + wedge markers + hub
    pub const SPACE_COUNT: usize = RING_SPACES + SPOKE_ARMS * SPOKE_DEPTH + SPOKE_ARMS + 1;

    /// Pointer angles this close below 2π snap to angle 0 (radians)
    pub const SEAM_TOLERANCE: f32 = 0.01;
    /// Player names are cut to this many characters
    pub const MAX_NAME_LEN: usize = 17;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Angle of the ring space at `index` (shared by spokes and wedge markers)
#[inline]
pub fn ring_angle(index: usize) -> f32 {
    index as f32 * (std::f32::consts::TAU / consts::RING_SPACES as f32)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta), theta in [0, 2π)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_angle(pos.y.atan2(pos.x)))
}
