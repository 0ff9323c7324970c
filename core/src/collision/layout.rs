//! One-shot collision audit over a whole layout.
//!
//! Each position is resolved against an equipment catalog, reduced to an
//! axis-aligned width x depth footprint on the floor, and compared with every
//! other footprint. There is no cache: each call recomputes from scratch and
//! either returns a complete report or fails as a whole.

use crate::error::ErrorKind;
use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("equipment not found: {0}")]
    EquipmentNotFound(String),

    #[error("invalid dimensions for {equipment_id}: width {width_ft} ft, depth {depth_ft} ft")]
    InvalidDimensions {
        equipment_id: String,
        width_ft: f64,
        depth_ft: f64,
    },
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EquipmentNotFound(_) => ErrorKind::ReferenceNotFound,
            Self::InvalidDimensions { .. } => ErrorKind::MalformedInput,
        }
    }
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Placement of one equipment item on the shop floor, in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPosition {
    /// Instance id, when several items share one catalog entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub equipment_id: String,
    pub x: f64,
    pub y: f64,
    /// Carried through for the editor; not used in overlap math.
    #[serde(default)]
    pub orientation_degrees: f64,
    /// Overrides the catalog width when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_ft: Option<f64>,
    /// Overrides the catalog depth when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_ft: Option<f64>,
}

impl EquipmentPosition {
    pub fn new(equipment_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: None,
            equipment_id: equipment_id.into(),
            x,
            y,
            orientation_degrees: 0.0,
            width_ft: None,
            depth_ft: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_size(mut self, width_ft: f64, depth_ft: f64) -> Self {
        self.width_ft = Some(width_ft);
        self.depth_ft = Some(depth_ft);
        self
    }

    pub fn with_orientation(mut self, degrees: f64) -> Self {
        self.orientation_degrees = degrees;
        self
    }

    /// The id reported in collisions: instance id, else the equipment id.
    pub fn item_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.equipment_id)
    }
}

/// Catalog record for a piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSpec {
    pub name: String,
    pub width_ft: f64,
    pub depth_ft: f64,
}

/// Lookup of equipment records by id, supplied by the caller.
pub trait EquipmentCatalog {
    fn lookup(&self, equipment_id: &str) -> Option<&EquipmentSpec>;
}

impl<S: BuildHasher> EquipmentCatalog for HashMap<String, EquipmentSpec, S> {
    fn lookup(&self, equipment_id: &str) -> Option<&EquipmentSpec> {
        self.get(equipment_id)
    }
}

impl EquipmentCatalog for BTreeMap<String, EquipmentSpec> {
    fn lookup(&self, equipment_id: &str) -> Option<&EquipmentSpec> {
        self.get(equipment_id)
    }
}

/// Axis-aligned floor rectangle: center +/- half-extent on x and y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub center: Point2,
    pub half_extents: [f64; 2],
}

impl Footprint {
    pub fn new(center: Point2, width: f64, depth: f64) -> Self {
        Self { center, half_extents: [width / 2.0, depth / 2.0] }
    }

    /// Length of the shared interval on `axis`, zero when disjoint.
    fn overlap_on_axis(&self, other: &Footprint, axis: usize) -> f64 {
        let lo = (self.center[axis] - self.half_extents[axis])
            .max(other.center[axis] - other.half_extents[axis]);
        let hi = (self.center[axis] + self.half_extents[axis])
            .min(other.center[axis] + other.half_extents[axis]);
        (hi - lo).max(0.0)
    }

    /// Interiors overlap on both axes. Touching edges do not count.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.overlap_on_axis(other, 0) > 0.0 && self.overlap_on_axis(other, 1) > 0.0
    }
}

/// Area of the rectangular intersection of two footprints.
pub fn overlap_area(a: &Footprint, b: &Footprint) -> f64 {
    a.overlap_on_axis(b, 0) * a.overlap_on_axis(b, 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCollision {
    pub item1_id: String,
    pub item1_name: String,
    pub item2_id: String,
    pub item2_name: String,
    /// Square feet.
    pub overlap_area: f64,
}

/// Layout-level verdict, persisted by callers as a JSON snapshot plus the
/// summary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub is_valid: bool,
    pub has_collisions: bool,
    pub collision_count: usize,
    pub collisions: Vec<LayoutCollision>,
    pub message: String,
}

impl LayoutReport {
    fn from_collisions(collisions: Vec<LayoutCollision>) -> Self {
        let count = collisions.len();
        let message = match count {
            0 => "No collisions detected".to_string(),
            1 => "Found 1 collision".to_string(),
            n => format!("Found {} collisions", n),
        };
        Self {
            is_valid: count == 0,
            has_collisions: count > 0,
            collision_count: count,
            collisions,
            message,
        }
    }
}

struct ResolvedItem<'a> {
    id: &'a str,
    name: &'a str,
    footprint: Footprint,
}

fn resolve<'a, C>(position: &'a EquipmentPosition, catalog: &'a C) -> LayoutResult<ResolvedItem<'a>>
where
    C: EquipmentCatalog + ?Sized,
{
    let spec = catalog
        .lookup(&position.equipment_id)
        .ok_or_else(|| LayoutError::EquipmentNotFound(position.equipment_id.clone()))?;

    let width_ft = position.width_ft.unwrap_or(spec.width_ft);
    let depth_ft = position.depth_ft.unwrap_or(spec.depth_ft);
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(width_ft) || !usable(depth_ft) {
        return Err(LayoutError::InvalidDimensions {
            equipment_id: position.equipment_id.clone(),
            width_ft,
            depth_ft,
        });
    }

    Ok(ResolvedItem {
        id: position.item_id(),
        name: &spec.name,
        footprint: Footprint::new([position.x, position.y], width_ft, depth_ft),
    })
}

/// Check every pair of positions for overlapping footprints.
///
/// Fails without a partial report if any position references equipment
/// missing from `catalog` or resolves to unusable dimensions.
pub fn validate_layout<C>(positions: &[EquipmentPosition], catalog: &C) -> LayoutResult<LayoutReport>
where
    C: EquipmentCatalog + ?Sized,
{
    let items = positions
        .iter()
        .map(|p| resolve(p, catalog))
        .collect::<LayoutResult<Vec<_>>>()?;

    let mut collisions = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.footprint.overlaps(&b.footprint) {
                collisions.push(LayoutCollision {
                    item1_id: a.id.to_string(),
                    item1_name: a.name.to_string(),
                    item2_id: b.id.to_string(),
                    item2_name: b.name.to_string(),
                    overlap_area: overlap_area(&a.footprint, &b.footprint),
                });
            }
        }
    }

    debug!("Validated layout: {} items, {} collisions", items.len(), collisions.len());
    Ok(LayoutReport::from_collisions(collisions))
}
