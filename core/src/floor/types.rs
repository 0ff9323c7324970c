use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Identifier of a vertex, unique within one building geometry.
/// Ids coming from the editor are opaque strings; locally created vertices
/// get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallSegmentId(pub String);

impl WallSegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for WallSegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for WallSegmentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for WallSegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn position(&self) -> Point2 {
        [self.x, self.y]
    }
}

/// A wall between two vertices of the same geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub id: WallSegmentId,
    pub a: VertexId,
    pub b: VertexId,
}

fn default_feet_per_unit() -> f64 {
    1.0
}

/// Building outline as captured by the floor geometry editor.
///
/// Positions are in building-local units; `feet_per_unit` converts them to
/// real-world feet and is only applied to derived measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingGeometry {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub segments: Vec<WallSegment>,
    /// Named rings: ring name -> ordered vertex ids.
    #[serde(default)]
    pub rings: BTreeMap<String, Vec<VertexId>>,
    #[serde(default = "default_feet_per_unit")]
    pub feet_per_unit: f64,
}

impl Default for BuildingGeometry {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            segments: Vec::new(),
            rings: BTreeMap::new(),
            feet_per_unit: default_feet_per_unit(),
        }
    }
}

impl BuildingGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, feet_per_unit: f64) -> Self {
        self.feet_per_unit = feet_per_unit;
        self
    }

    pub fn add_vertex(&mut self, x: f64, y: f64) -> VertexId {
        let id = VertexId::new();
        self.vertices.push(Vertex { id: id.clone(), x, y });
        id
    }

    pub fn add_wall(&mut self, a: &VertexId, b: &VertexId) -> WallSegmentId {
        let id = WallSegmentId::new();
        self.segments.push(WallSegment { id: id.clone(), a: a.clone(), b: b.clone() });
        id
    }

    pub fn set_ring(&mut self, name: impl Into<String>, vertex_ids: Vec<VertexId>) {
        self.rings.insert(name.into(), vertex_ids);
    }

    pub fn vertex_position(&self, id: &VertexId) -> Option<Point2> {
        self.vertices.iter().find(|v| &v.id == id).map(Vertex::position)
    }
}
