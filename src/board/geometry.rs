//! Board geometry
//!
//! Generation order is fixed and ids follow it:
//! - ring spaces 0..42 at `RING_RADIUS`
//! - spoke spaces, depth-major (depth 1..=5, arm 0..6), radius = depth
//! - wedge markers, arm 0..6, drawn over ring space `arm * 7`
//! - the hub at radius 0

use super::space::{Slot, Space, SpaceClass, SpaceId};
use crate::consts::*;
use crate::ring_angle;

/// Ring index that a spoke arm (or wedge marker) lines up with
#[inline]
pub fn arm_ring_index(arm: usize) -> usize {
    arm * SPOKE_STRIDE
}

/// Generate every board space, unclassified
///
/// Pure and deterministic: repeated calls yield identical output.
pub fn generate() -> Vec<Space> {
    let mut slots = Vec::with_capacity(SPACE_COUNT);
    slots.extend((0..RING_SPACES).map(Slot::Ring));
    for depth in 1..=SPOKE_DEPTH {
        slots.extend((0..SPOKE_ARMS).map(|arm| Slot::Spoke { depth, arm }));
    }
    slots.extend((0..SPOKE_ARMS).map(|arm| Slot::Wedge { arm }));
    slots.push(Slot::Hub);

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            let (radius, angle) = match slot {
                Slot::Ring(index) => (RING_RADIUS, ring_angle(index)),
                Slot::Spoke { depth, arm } => (depth as f32, ring_angle(arm_ring_index(arm))),
                Slot::Wedge { arm } => (RING_RADIUS, ring_angle(arm_ring_index(arm))),
                Slot::Hub => (0.0, 0.0),
            };
            Space {
                id: SpaceId(i as u16),
                radius,
                angle,
                slot,
                class: SpaceClass::Unclassified,
            }
        })
        .collect()
}
