//! Board model
//!
//! Everything here is immutable once built and fully deterministic:
//! - No randomness
//! - Stable generation order (by space id)
//! - Category lookups keyed by space id, never by float coordinates

pub mod category;
pub mod classify;
pub mod geometry;
pub mod layout;
pub mod resolver;
pub mod space;

pub use category::{Category, CategoryInfo, CategoryScheme, SchemePreset};
pub use classify::{Classification, classify};
pub use geometry::generate;
pub use layout::Board;
pub use resolver::SpaceResolver;
pub use space::{Slot, Space, SpaceClass, SpaceId, SpaceKind};
