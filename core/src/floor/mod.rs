//! Floor plane resolution for building geometry.
//!
//! Turns the editor's vertex/wall data into a validated, closed floor outline.
//! A floor plane is only ever produced whole: either every referenced vertex
//! resolves and the ring is a simple polygon, or the caller gets the reason.

pub mod rings;
pub mod types;

pub use rings::trace_ring;
pub use types::*;


use crate::geometry::utils_2d;
use crate::error::ErrorKind;
use crate::geometry::{close_ring, validate_simple_polygon, Point2, PolygonIssue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlaneIssue {
    #[error("missing ring")]
    MissingRing(String),

    #[error("missing vertex")]
    MissingVertex(VertexId),

    #[error("open ring")]
    OpenRing(VertexId),

    #[error("branching ring")]
    BranchingRing(VertexId),

    #[error("degenerate wall")]
    DegenerateWall(WallSegmentId),

    #[error(transparent)]
    Polygon(#[from] PolygonIssue),
}

impl FloorPlaneIssue {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Polygon(issue) => issue.kind(),
            _ => ErrorKind::MalformedInput,
        }
    }
}

/// A validated floor outline. `points` is closed: the last point repeats the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlane {
    pub points: Vec<Point2>,
    pub feet_per_unit: f64,
}

impl FloorPlane {
    /// Signed area in building units (positive = counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        utils_2d::polygon_signed_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn area_sq_ft(&self) -> f64 {
        self.area() * self.feet_per_unit * self.feet_per_unit
    }

    pub fn perimeter(&self) -> f64 {
        utils_2d::polygon_perimeter(&self.points)
    }

    pub fn perimeter_ft(&self) -> f64 {
        self.perimeter() * self.feet_per_unit
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Point containment in building units.
    pub fn contains(&self, point: Point2) -> bool {
        utils_2d::point_in_polygon(point, &self.points)
    }
}

/// Resolve the ring named `ring_name` against the geometry's vertices and
/// validate it as the building's floor plane.
pub fn geometry_to_floor_plane(
    geometry: &BuildingGeometry,
    ring_name: &str,
) -> Result<FloorPlane, FloorPlaneIssue> {
    let ids = geometry
        .rings
        .get(ring_name)
        .ok_or_else(|| FloorPlaneIssue::MissingRing(ring_name.to_string()))?;
    resolve_ring(geometry, ids)
}

/// Resolve an ordered vertex id ring to a validated floor plane.
///
/// A trailing id equal to the first is treated as an explicit closure. Rings
/// with fewer than three distinct positions after closing can never enclose a
/// floor and are rejected, including a ring whose last vertex lies on the first.
pub fn resolve_ring(
    geometry: &BuildingGeometry,
    ids: &[VertexId],
) -> Result<FloorPlane, FloorPlaneIssue> {
    let positions: HashMap<&VertexId, Point2> =
        geometry.vertices.iter().map(|v| (&v.id, v.position())).collect();

    let ids = match ids {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ids[..ids.len() - 1],
        _ => ids,
    };

    let points = ids
        .iter()
        .map(|id| {
            positions
                .get(id)
                .copied()
                .ok_or_else(|| FloorPlaneIssue::MissingVertex(id.clone()))
        })
        .collect::<Result<Vec<Point2>, _>>()?;

    // A last vertex sitting on the first position already closes the ring,
    // so count distinct positions only after closing.
    let points = close_ring(&points);
    let distinct = points.len().saturating_sub(1);
    if distinct < 3 {
        return Err(PolygonIssue::TooFewPoints { count: distinct }.into());
    }

    validate_simple_polygon(&points)?;

    Ok(FloorPlane { points, feet_per_unit: geometry.feet_per_unit })
}

impl BuildingGeometry {
    pub fn floor_plane(&self, ring_name: &str) -> Result<FloorPlane, FloorPlaneIssue> {
        geometry_to_floor_plane(self, ring_name)
    }

    /// Trace the wall segments into a ring and validate it as the floor plane.
    pub fn floor_plane_from_walls(&self) -> Result<FloorPlane, FloorPlaneIssue> {
        let ids = trace_ring(&self.segments)?;
        resolve_ring(self, &ids)
    }
}
