use crate::error::ApiError;
use layout_core::collision::{EquipmentPosition, EquipmentSpec, LayoutReport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type Catalog = HashMap<String, EquipmentSpec>;

/// A saved layout with its last collision audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub id: Uuid,
    pub name: String,
    pub positions: Vec<EquipmentPosition>,
    /// Full report snapshot as JSON.
    pub collision_data: serde_json::Value,
    pub has_collisions: bool,
    pub collision_count: usize,
    /// Unix seconds.
    pub updated_at: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl LayoutRecord {
    pub fn new(name: String, positions: Vec<EquipmentPosition>, report: &LayoutReport) -> Self {
        let mut record = Self {
            id: Uuid::new_v4(),
            name,
            positions,
            collision_data: serde_json::Value::Null,
            has_collisions: false,
            collision_count: 0,
            updated_at: 0,
        };
        record.apply_report(report);
        record
    }

    pub fn apply_report(&mut self, report: &LayoutReport) {
        self.collision_data = serde_json::to_value(report).unwrap_or(serde_json::Value::Null);
        self.has_collisions = report.has_collisions;
        self.collision_count = report.collision_count;
        self.updated_at = now_secs();
    }
}

// Application State
pub struct AppState {
    catalog: RwLock<Catalog>,
    layouts: RwLock<HashMap<Uuid, LayoutRecord>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            layouts: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> Result<RwLockReadGuard<'_, Catalog>, ApiError> {
        self.catalog.read().map_err(|_| ApiError::StatePoisoned)
    }

    pub fn catalog_mut(&self) -> Result<RwLockWriteGuard<'_, Catalog>, ApiError> {
        self.catalog.write().map_err(|_| ApiError::StatePoisoned)
    }

    pub fn layouts(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, LayoutRecord>>, ApiError> {
        self.layouts.read().map_err(|_| ApiError::StatePoisoned)
    }

    pub fn layouts_mut(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, LayoutRecord>>, ApiError> {
        self.layouts.write().map_err(|_| ApiError::StatePoisoned)
    }
}
