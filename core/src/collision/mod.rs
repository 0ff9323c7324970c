//! Axis-aligned collision detection for equipment footprints.
//!
//! Two entry points share the same overlap rule:
//! - [`CollisionEngine`]: caller-owned, incrementally updated, cached; used
//!   while an item is being dragged.
//! - [`layout::validate_layout`]: one-shot audit of a whole layout against an
//!   equipment catalog, reporting overlap areas.
//!
//! Orientation is never part of the overlap math. Boxes are compared as if
//! unrotated, matching what the layout editor persists.

pub mod engine;
pub mod layout;

pub use engine::{find_collisions, CacheState, CollisionEngine, CollisionResult};
pub use layout::{
    overlap_area, validate_layout, EquipmentCatalog, EquipmentPosition, EquipmentSpec, Footprint,
    LayoutCollision, LayoutError, LayoutReport,
};

#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_layout;

use crate::geometry::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A labelled 3D box tracked by the collision engine.
///
/// Stored as center + half-extents. Half-extents are never negative: a
/// non-positive or non-finite dimension collapses that axis to zero, and a box
/// with a zero extent on any axis is degenerate and never collides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    pub id: String,
    pub position: Point3,
    pub half_extents: Vector3,
}

impl CollisionBox {
    /// `dimensions` is (width, height, depth) along (x, y, z).
    pub fn new(id: impl Into<String>, position: Point3, dimensions: Vector3) -> Self {
        let half_extents = dimensions.map(|d| if d.is_finite() && d > 0.0 { d / 2.0 } else { 0.0 });
        Self { id: id.into(), position, half_extents }
    }

    pub fn min(&self) -> Point3 {
        self.position - self.half_extents
    }

    pub fn max(&self) -> Point3 {
        self.position + self.half_extents
    }

    pub fn is_degenerate(&self) -> bool {
        self.half_extents.iter().any(|&h| h <= 0.0)
    }

    /// Interiors overlap on every axis. Touching faces do not count.
    pub fn intersects(&self, other: &CollisionBox) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        (0..3).all(|axis| a_min[axis] < b_max[axis] && a_max[axis] > b_min[axis])
    }
}
