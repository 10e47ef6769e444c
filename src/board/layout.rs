//! The assembled board: classified spaces plus pointer snapping

use glam::Vec2;

use super::category::{Category, CategoryScheme};
use super::classify::{Classification, classify};
use super::geometry::generate;
use super::resolver::SpaceResolver;
use super::space::{Slot, Space, SpaceClass, SpaceId};
use crate::consts::SEAM_TOLERANCE;

/// Immutable game board
#[derive(Debug, Clone)]
pub struct Board {
    spaces: Vec<Space>,
    classification: Classification,
    resolver: SpaceResolver,
    scheme: CategoryScheme,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(CategoryScheme::default(), SEAM_TOLERANCE)
    }
}

impl Board {
    /// Generate, classify and index the board
    pub fn new(scheme: CategoryScheme, seam_tolerance: f32) -> Self {
        let raw = generate();
        let classification = classify(&raw);
        debug_assert!(
            classification.markers_agree(&raw),
            "wedge marker colors disagree with wedge anchors"
        );

        let spaces: Vec<Space> = raw
            .into_iter()
            .map(|space| Space {
                class: classification.class_of(&space),
                ..space
            })
            .collect();
        let resolver = SpaceResolver::new(&spaces, seam_tolerance);

        log::debug!(
            "Board built: {} spaces, {} wedge anchors",
            spaces.len(),
            classification.wedges.len()
        );

        Self {
            spaces,
            classification,
            resolver,
            scheme,
        }
    }

    /// All spaces in generation order
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(id.index())
    }

    /// The center space
    pub fn hub(&self) -> SpaceId {
        self.spaces
            .iter()
            .rev()
            .find(|s| s.slot == Slot::Hub)
            .map(|s| s.id)
            .unwrap_or(SpaceId(0))
    }

    pub fn scheme(&self) -> &CategoryScheme {
        &self.scheme
    }

    pub fn class_of(&self, id: SpaceId) -> SpaceClass {
        self.space(id)
            .map(|s| s.class)
            .unwrap_or(SpaceClass::Unclassified)
    }

    /// Category whose wedge is collected on `id`, if any
    pub fn wedge_category(&self, id: SpaceId) -> Option<Category> {
        self.classification.wedge_category(id)
    }

    /// Ring space where `category`'s wedge is collected
    pub fn wedge_space(&self, category: Category) -> Option<&Space> {
        self.classification
            .wedges
            .iter()
            .find(|(_, c)| **c == category)
            .and_then(|(id, _)| self.space(*id))
    }

    /// Nearest pickable space to a cartesian point
    pub fn nearest(&self, point: Vec2) -> &Space {
        &self.spaces[self.resolver.nearest(point).index()]
    }

    /// Nearest pickable space, or `None` when `point` is not finite
    pub fn try_nearest(&self, point: Vec2) -> Option<&Space> {
        self.resolver.try_nearest(point).and_then(|id| self.space(id))
    }

    /// Nearest pickable space to a polar point
    pub fn nearest_polar(&self, radius: f32, angle: f32) -> &Space {
        &self.spaces[self.resolver.nearest_polar(radius, angle).index()]
    }

    /// Human-readable label for a space's class
    pub fn class_label(&self, id: SpaceId) -> &str {
        match self.class_of(id) {
            SpaceClass::Category(c) => self.scheme.name(c),
            SpaceClass::Neutral => "ROLL AGAIN",
            SpaceClass::Unclassified => "CENTER",
        }
    }
}
