use super::CollisionBox;
use crate::geometry::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Snapshot of all overlapping pairs in the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionResult {
    pub has_collision: bool,
    /// Each unordered pair once, in discovery order (earlier-inserted id first).
    pub colliding_pairs: Vec<(String, String)>,
    pub collision_count: usize,
}

impl CollisionResult {
    fn from_pairs(colliding_pairs: Vec<(String, String)>) -> Self {
        Self {
            has_collision: !colliding_pairs.is_empty(),
            collision_count: colliding_pairs.len(),
            colliding_pairs,
        }
    }

    pub fn involves(&self, id: &str) -> bool {
        self.colliding_pairs.iter().any(|(a, b)| a == id || b == id)
    }

    /// Ids paired with `id`, in the order the pairs were discovered.
    pub fn partners_of(&self, id: &str) -> Vec<String> {
        self.colliding_pairs
            .iter()
            .filter_map(|(a, b)| {
                if a == id {
                    Some(b.clone())
                } else if b == id {
                    Some(a.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Cached detection result. Every mutation of the box set moves the cache to
/// `Invalid`; the next read recomputes and stores `Valid`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CacheState {
    Valid(CollisionResult),
    #[default]
    Invalid,
}

static NO_COLLISIONS: CollisionResult =
    CollisionResult { has_collision: false, colliding_pairs: Vec::new(), collision_count: 0 };

/// All-pairs AABB test over `boxes`. O(n²); layouts hold tens of items.
pub fn find_collisions(boxes: &[CollisionBox]) -> CollisionResult {
    let mut pairs = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            if a.intersects(b) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    CollisionResult::from_pairs(pairs)
}

/// Live collision state for one editing session.
///
/// Queries never fail: unknown ids simply have no collisions. Detection takes
/// `&mut self` because it may refill the cache.
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    /// Insertion order is discovery order.
    boxes: Vec<CollisionBox>,
    cache: CacheState,
}

impl CollisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the box for `id`. An existing box keeps its slot.
    pub fn update_box(&mut self, id: &str, position: Point3, dimensions: Vector3) {
        let new_box = CollisionBox::new(id, position, dimensions);
        if new_box.is_degenerate() {
            warn!("Box {} has non-positive dimensions {:?}; it will not collide", id, dimensions);
        }
        match self.boxes.iter_mut().find(|b| b.id == id) {
            Some(existing) => *existing = new_box,
            None => self.boxes.push(new_box),
        }
        self.cache = CacheState::Invalid;
    }

    /// Remove the box for `id` if tracked.
    pub fn remove_box(&mut self, id: &str) {
        self.boxes.retain(|b| b.id != id);
        self.cache = CacheState::Invalid;
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
        self.cache = CacheState::Invalid;
    }

    pub fn detect_collisions(&mut self) -> &CollisionResult {
        if let CacheState::Invalid = self.cache {
            let result = find_collisions(&self.boxes);
            debug!(
                "Recomputed collisions: {} boxes, {} pairs",
                self.boxes.len(),
                result.collision_count
            );
            self.cache = CacheState::Valid(result);
        }

        match &self.cache {
            CacheState::Valid(result) => result,
            // Refilled above
            CacheState::Invalid => &NO_COLLISIONS,
        }
    }

    pub fn is_colliding(&mut self, id: &str) -> bool {
        self.detect_collisions().involves(id)
    }

    pub fn colliding_with(&mut self, id: &str) -> Vec<String> {
        self.detect_collisions().partners_of(id)
    }

    pub fn is_cache_valid(&self) -> bool {
        matches!(self.cache, CacheState::Valid(_))
    }

    pub fn cache_state(&self) -> &CacheState {
        &self.cache
    }

    pub fn get(&self, id: &str) -> Option<&CollisionBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn boxes(&self) -> &[CollisionBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
