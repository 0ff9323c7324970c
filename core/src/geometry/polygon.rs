//! Simple-polygon validation for floor outlines.
//!
//! A candidate outline is admissible when it has at least three points, is
//! explicitly closed (last point repeats the first within EPSILON), and no two
//! non-adjacent edges of the ring touch or cross.

use super::utils_2d::{points_equal, segments_intersect};
use super::Point2;
use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a point sequence was rejected as a simple polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonIssue {
    #[error("too few points")]
    TooFewPoints { count: usize },

    #[error("not closed")]
    NotClosed,

    /// Indices are edge indices: edge `i` runs from point `i` to point `i + 1`.
    #[error("self-intersects")]
    SelfIntersects { first: usize, second: usize },
}

impl PolygonIssue {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewPoints { .. } | Self::NotClosed => ErrorKind::MalformedInput,
            Self::SelfIntersects { .. } => ErrorKind::GeometricInvalid,
        }
    }
}

/// Wire form of a validation verdict: `{ok: true}` or `{ok: false, reason}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonReport {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PolygonReport {
    pub fn valid() -> Self {
        Self { ok: true, reason: None }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self { ok: false, reason: Some(reason.into()) }
    }
}

impl From<Result<(), PolygonIssue>> for PolygonReport {
    fn from(result: Result<(), PolygonIssue>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(issue) => Self::invalid(issue.to_string()),
        }
    }
}

/// Decide whether `points` is an explicitly closed simple polygon.
///
/// Adjacent edges share a vertex and are never reported as intersecting; this
/// includes the first and last edge, which meet at the closing vertex.
pub fn validate_simple_polygon(points: &[Point2]) -> Result<(), PolygonIssue> {
    let n = points.len();
    if n < 3 {
        return Err(PolygonIssue::TooFewPoints { count: n });
    }

    if !points_equal(points[0], points[n - 1]) {
        return Err(PolygonIssue::NotClosed);
    }

    let edges: Vec<(Point2, Point2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    let m = edges.len();

    for i in 0..m {
        for j in (i + 1)..m {
            if j == i + 1 || (i == 0 && j == m - 1) {
                continue;
            }
            let (a1, a2) = edges[i];
            let (b1, b2) = edges[j];
            if segments_intersect(a1, a2, b1, b2) {
                return Err(PolygonIssue::SelfIntersects { first: i, second: j });
            }
        }
    }

    Ok(())
}

/// Return `points` with the first point appended if the ring is not already
/// closed within EPSILON. Empty input stays empty.
pub fn close_ring(points: &[Point2]) -> Vec<Point2> {
    let mut closed = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if !points_equal(first, last) {
            closed.push(first);
        }
    }
    closed
}
