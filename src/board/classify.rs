//! Category layout
//!
//! Reproduces the physical board's rotational pattern:
//! - Spokes: the depth-`d` row takes the category list rotated by
//!   `SPOKE_ROTATIONS[d - 1]` and lays it across the six arms.
//! - Ring: category `i` owns `(v + 7i) mod 42` for each `v` in `RING_OFFSETS`.
//!   The 12 untouched ring spaces are neutral ("roll again").
//! - Wedges: each category owns exactly one ring index divisible by 7; that
//!   ring space is where its wedge is collected.
//! - Markers: wedge markers are colored by the category list rotated by
//!   `MARKER_ROTATION`. This is drawing order only and must agree with the
//!   wedge anchors.

use std::collections::BTreeMap;

use super::category::Category;
use super::geometry::arm_ring_index;
use super::space::{Slot, Space, SpaceClass, SpaceId};
use crate::consts::*;

/// Category rotation for each spoke depth (depth 1 first)
pub const SPOKE_ROTATIONS: [usize; SPOKE_DEPTH] = [4, 2, 1, 5, 0];
/// Ring offsets owned by category 0; category `i` shifts them by `7i`
pub const RING_OFFSETS: [usize; 5] = [1, 10, 21, 32, 41];
/// Rotation of the category list used to color wedge markers
pub const MARKER_ROTATION: usize = 3;

/// Category of the spoke space at `depth` (1-based) on `arm`
pub fn spoke_category(depth: usize, arm: usize) -> Category {
    Category::ALL[SPOKE_ROTATIONS[depth - 1]].rotated(arm)
}

/// The five ring indices owned by `category`
pub fn owned_ring_indices(category: Category) -> [usize; 5] {
    let i = category.ordinal();
    std::array::from_fn(|k| {
        let v = RING_OFFSETS[(k + i) % RING_OFFSETS.len()];
        (v + i * SPOKE_STRIDE) % RING_SPACES
    })
}

/// Ring index where `category`'s wedge is collected
pub fn wedge_anchor(category: Category) -> Option<usize> {
    owned_ring_indices(category)
        .into_iter()
        .find(|idx| idx % SPOKE_STRIDE == 0)
}

/// Category whose color the wedge marker on `arm` is drawn in
pub fn marker_category(arm: usize) -> Category {
    Category::ALL[0].rotated(arm + MARKER_ROTATION)
}

/// Class of every ring index
pub fn ring_classes() -> [SpaceClass; RING_SPACES] {
    let mut classes = [SpaceClass::Neutral; RING_SPACES];
    for category in Category::ALL {
        for idx in owned_ring_indices(category) {
            classes[idx] = SpaceClass::Category(category);
        }
    }
    classes
}

/// Category assignments for a generated board, keyed by space id
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Ring spaces: a category or neutral
    pub perimeter: BTreeMap<SpaceId, SpaceClass>,
    /// Spoke spaces
    pub spokes: BTreeMap<SpaceId, Category>,
    /// Ring spaces where a wedge is collected (authoritative for play)
    pub wedges: BTreeMap<SpaceId, Category>,
    /// Wedge marker spaces (drawing order)
    pub markers: BTreeMap<SpaceId, Category>,
}

impl Classification {
    /// Class of `space` under this classification
    pub fn class_of(&self, space: &Space) -> SpaceClass {
        if let Some(class) = self.perimeter.get(&space.id) {
            return *class;
        }
        self.spokes
            .get(&space.id)
            .or_else(|| self.markers.get(&space.id))
            .map(|c| SpaceClass::Category(*c))
            .unwrap_or(SpaceClass::Unclassified)
    }

    /// Wedge awarded on `id`, either its ring anchor or its marker
    pub fn wedge_category(&self, id: SpaceId) -> Option<Category> {
        self.wedges.get(&id).or_else(|| self.markers.get(&id)).copied()
    }

    /// Whether each marker's drawing color matches the wedge on the ring
    /// space beneath it
    pub fn markers_agree(&self, spaces: &[Space]) -> bool {
        let ring_ids: BTreeMap<usize, SpaceId> = spaces
            .iter()
            .filter_map(|s| match s.slot {
                Slot::Ring(idx) => Some((idx, s.id)),
                _ => None,
            })
            .collect();

        spaces.iter().all(|s| match s.slot {
            Slot::Wedge { arm } => {
                let anchor = ring_ids.get(&arm_ring_index(arm));
                let drawn = self.markers.get(&s.id);
                drawn.is_some() && anchor.and_then(|id| self.wedges.get(id)) == drawn
            }
            _ => true,
        })
    }
}

/// Assign categories to every ring, spoke and wedge-marker space
pub fn classify(spaces: &[Space]) -> Classification {
    let ring = ring_classes();
    let mut anchors = [None; RING_SPACES];
    for category in Category::ALL {
        if let Some(idx) = wedge_anchor(category) {
            anchors[idx] = Some(category);
        }
    }

    let mut out = Classification::default();
    for space in spaces {
        match space.slot {
            Slot::Ring(idx) => {
                out.perimeter.insert(space.id, ring[idx]);
                if let Some(category) = anchors[idx] {
                    out.wedges.insert(space.id, category);
                }
            }
            Slot::Spoke { depth, arm } => {
                out.spokes.insert(space.id, spoke_category(depth, arm));
            }
            Slot::Wedge { arm } => {
                out.markers.insert(space.id, marker_category(arm));
            }
            Slot::Hub => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::generate;
    use std::collections::BTreeSet;

    #[test]
    fn test_ring_partition() {
        let mut seen = BTreeSet::new();
        for category in Category::ALL {
            for idx in owned_ring_indices(category) {
                assert!(seen.insert(idx), "ring index {idx} owned twice");
            }
        }
        assert_eq!(seen.len(), 30);

        let classes = ring_classes();
        let neutral: Vec<usize> = (0..RING_SPACES)
            .filter(|i| classes[*i] == SpaceClass::Neutral)
            .collect();
        assert_eq!(neutral, vec![2, 5, 9, 12, 16, 19, 23, 26, 30, 33, 37, 40]);
        for i in neutral {
            assert!(!seen.contains(&i));
        }
    }

    #[test]
    fn test_one_wedge_anchor_per_category() {
        for category in Category::ALL {
            let anchors = owned_ring_indices(category)
                .into_iter()
                .filter(|idx| idx % 7 == 0)
                .count();
            assert_eq!(anchors, 1, "category {category:?}");
        }
        let anchors: Vec<usize> = Category::ALL
            .into_iter()
            .filter_map(wedge_anchor)
            .collect();
        assert_eq!(anchors, vec![21, 28, 35, 0, 7, 14]);
    }

    #[test]
    fn test_spokes_five_per_category() {
        let spaces = generate();
        let classification = classify(&spaces);
        assert_eq!(classification.spokes.len(), 30);
        for category in Category::ALL {
            let n = classification
                .spokes
                .values()
                .filter(|c| **c == category)
                .count();
            assert_eq!(n, 5);
        }
        // Each depth row is one full rotation of the category list
        for depth in 1..=SPOKE_DEPTH {
            let row: BTreeSet<Category> = (0..SPOKE_ARMS)
                .map(|arm| spoke_category(depth, arm))
                .collect();
            assert_eq!(row.len(), 6);
        }
        assert_eq!(spoke_category(1, 0), Category::ALL[4]);
        assert_eq!(spoke_category(5, 2), Category::ALL[2]);
    }

    #[test]
    fn test_perimeter_five_per_category() {
        let spaces = generate();
        let classification = classify(&spaces);
        assert_eq!(classification.perimeter.len(), 42);
        for category in Category::ALL {
            let n = classification
                .perimeter
                .values()
                .filter(|c| **c == SpaceClass::Category(category))
                .count();
            assert_eq!(n, 5);
        }
        let neutral = classification
            .perimeter
            .values()
            .filter(|c| **c == SpaceClass::Neutral)
            .count();
        assert_eq!(neutral, 12);
    }

    #[test]
    fn test_markers_agree_with_anchors() {
        let spaces = generate();
        let classification = classify(&spaces);
        assert_eq!(classification.wedges.len(), 6);
        assert_eq!(classification.markers.len(), 6);
        assert!(classification.markers_agree(&spaces));

        // A marker drawn in the wrong color is caught
        let mut broken = classification.clone();
        if let Some(first) = broken.markers.values_mut().next() {
            *first = first.rotated(1);
        }
        assert!(!broken.markers_agree(&spaces));
    }

    #[test]
    fn test_wedge_anchor_owned_by_its_category() {
        let spaces = generate();
        let classification = classify(&spaces);
        for (id, category) in &classification.wedges {
            let space = &spaces[id.index()];
            assert_eq!(classification.class_of(space), SpaceClass::Category(*category));
            assert!(matches!(space.slot, Slot::Ring(i) if i % 7 == 0));
        }
    }
}
