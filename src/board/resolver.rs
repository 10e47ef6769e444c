//! Pointer-to-space snapping
//!
//! Brute-force nearest neighbour over the board's cartesian positions. The
//! board has 79 spaces, so a linear scan is cheaper than any index.

use glam::Vec2;

use super::space::{Space, SpaceId, SpaceKind};
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Maps pointer positions to the nearest pickable space
#[derive(Debug, Clone)]
pub struct SpaceResolver {
    /// Pickable spaces and their positions, in generation order
    targets: Vec<(SpaceId, Vec2)>,
    /// Angles within this distance below 2π snap to 0
    seam_tolerance: f32,
}

impl SpaceResolver {
    /// Index every space except wedge markers
    ///
    /// Markers sit exactly on their ring anchors, so the anchor (generated
    /// first) always wins and markers are never pick targets.
    pub fn new(spaces: &[Space], seam_tolerance: f32) -> Self {
        let targets = spaces
            .iter()
            .filter(|s| s.kind() != SpaceKind::Wedge)
            .map(|s| (s.id, s.position()))
            .collect();
        Self {
            targets,
            seam_tolerance,
        }
    }

    /// Fold a point sitting just below the 2π seam onto angle 0
    pub fn snap_seam(&self, point: Vec2) -> Vec2 {
        let (r, theta) = cartesian_to_polar(point);
        if std::f32::consts::TAU - theta < self.seam_tolerance {
            polar_to_cartesian(r, 0.0)
        } else {
            point
        }
    }

    /// Nearest pickable space to `point`
    ///
    /// Ties go to the space generated first. A NaN or infinite coordinate
    /// falls back to the first space; use [`Self::try_nearest`] to reject it.
    pub fn nearest(&self, point: Vec2) -> SpaceId {
        self.try_nearest(point).unwrap_or(self.targets[0].0)
    }

    /// Nearest pickable space, or `None` for a non-finite point
    pub fn try_nearest(&self, point: Vec2) -> Option<SpaceId> {
        if !point.is_finite() {
            return None;
        }
        let point = self.snap_seam(point);

        let mut best = self.targets[0].0;
        let mut best_dist = f32::INFINITY;
        for (id, pos) in &self.targets {
            let dist = pos.distance_squared(point);
            // Strict comparison keeps the earliest space on ties
            if dist < best_dist {
                best = *id;
                best_dist = dist;
            }
        }
        Some(best)
    }

    /// Nearest pickable space to a polar pointer position
    pub fn nearest_polar(&self, radius: f32, angle: f32) -> SpaceId {
        self.nearest(polar_to_cartesian(radius, angle))
    }
}
