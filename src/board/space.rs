//! Board spaces
//!
//! Spaces live in polar coordinates (radius, angle). Each space also keeps
//! its structural slot so classification never has to compare floats.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::polar_to_cartesian;

/// Stable index of a space in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub u16);

impl SpaceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where on the board a space sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Outer ring, index in [0, 42)
    Ring(usize),
    /// Spoke space; depth in [1, 5] is also its radius, arm in [0, 6)
    Spoke { depth: usize, arm: usize },
    /// Wedge marker drawn over ring space `arm * 7`
    Wedge { arm: usize },
    /// Center space
    Hub,
}

/// Space types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Perimeter,
    Spoke,
    Wedge,
    Center,
}

/// What a space is worth in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceClass {
    /// Owned by a category
    Category(Category),
    /// "Roll again" ring space
    Neutral,
    /// Not classified (the hub)
    Unclassified,
}

impl SpaceClass {
    pub fn category(self) -> Option<Category> {
        match self {
            SpaceClass::Category(c) => Some(c),
            _ => None,
        }
    }
}

/// A single board space (immutable once the board is built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    /// Distance from the board center
    pub radius: f32,
    /// Angle in radians, [0, 2π)
    pub angle: f32,
    pub slot: Slot,
    pub class: SpaceClass,
}

impl Space {
    pub fn kind(&self) -> SpaceKind {
        match self.slot {
            Slot::Ring(_) => SpaceKind::Perimeter,
            Slot::Spoke { .. } => SpaceKind::Spoke,
            Slot::Wedge { .. } => SpaceKind::Wedge,
            Slot::Hub => SpaceKind::Center,
        }
    }

    /// Cartesian position of the space
    pub fn position(&self) -> Vec2 {
        polar_to_cartesian(self.radius, self.angle)
    }
}
