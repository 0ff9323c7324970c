use super::types::{VertexId, WallSegment};
use super::FloorPlaneIssue;
use crate::geometry::PolygonIssue;
use std::collections::HashMap;

/// Orders a set of wall segments into a single ring of vertex ids.
///
/// The walk starts at `a` of the first segment and follows shared vertex ids
/// until it returns to the start. Every vertex must join exactly two walls and
/// every wall must be used; anything else is an open or branching outline.
/// The returned ids are not repeated at the end.
pub fn trace_ring(segments: &[WallSegment]) -> Result<Vec<VertexId>, FloorPlaneIssue> {
    if segments.is_empty() {
        return Err(PolygonIssue::TooFewPoints { count: 0 }.into());
    }

    // vertex id -> indices of incident segments
    let mut incident: HashMap<&VertexId, Vec<usize>> = HashMap::new();
    for (idx, seg) in segments.iter().enumerate() {
        if seg.a == seg.b {
            return Err(FloorPlaneIssue::DegenerateWall(seg.id.clone()));
        }
        incident.entry(&seg.a).or_default().push(idx);
        incident.entry(&seg.b).or_default().push(idx);
    }

    // Check in segment order so the reported issue is deterministic
    for seg in segments {
        for v in [&seg.a, &seg.b] {
            match incident.get(v).map_or(0, Vec::len) {
                2 => {}
                0 | 1 => return Err(FloorPlaneIssue::OpenRing(v.clone())),
                _ => return Err(FloorPlaneIssue::BranchingRing(v.clone())),
            }
        }
    }

    let first = &segments[0];
    let start = &first.a;
    let mut ring = vec![start.clone()];
    let mut prev = 0usize;
    let mut current = &first.b;
    let mut used = 1usize;

    while current != start {
        ring.push(current.clone());

        let next = incident
            .get(current)
            .and_then(|segs| segs.iter().copied().find(|&s| s != prev))
            .ok_or_else(|| FloorPlaneIssue::OpenRing(current.clone()))?;

        let seg = &segments[next];
        current = if &seg.a == current { &seg.b } else { &seg.a };
        prev = next;
        used += 1;

        if used > segments.len() {
            // Cannot happen with all degrees == 2, but never loop unbounded
            return Err(FloorPlaneIssue::BranchingRing(current.clone()));
        }
    }

    if used != segments.len() {
        // Walls left over form a second, disjoint loop
        let stray = segments
            .iter()
            .find(|s| !ring.contains(&s.a))
            .map_or_else(|| start.clone(), |s| s.a.clone());
        return Err(FloorPlaneIssue::BranchingRing(stray));
    }

    Ok(ring)
}
