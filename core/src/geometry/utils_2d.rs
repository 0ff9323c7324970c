//! 2D geometry utilities for floor outlines and footprints.
//!
//! Pure functions over `[f64; 2]` points, reused by the polygon validator
//! and by floor plane measurements.

use super::Point2;

/// Tolerance for floating-point comparisons
pub const EPSILON: f64 = super::EPSILON;

// =============================================================================
// Point Operations
// =============================================================================

/// Check if two 2D points are equal within EPSILON on both axes.
///
/// The comparison is inclusive: points exactly EPSILON apart still count as
/// equal, so a ring whose closing point drifts by at most EPSILON is closed.
#[inline]
pub fn points_equal(p1: Point2, p2: Point2) -> bool {
    (p1[0] - p2[0]).abs() <= EPSILON && (p1[1] - p2[1]).abs() <= EPSILON
}

/// Compute distance between two 2D points.
#[inline]
pub fn distance(p1: Point2, p2: Point2) -> f64 {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    (dx * dx + dy * dy).sqrt()
}

// =============================================================================
// Vector Operations
// =============================================================================

/// 2D cross product (z-component of 3D cross product).
/// Positive if v2 is counter-clockwise from v1.
#[inline]
pub fn cross_2d(v1: Point2, v2: Point2) -> f64 {
    v1[0] * v2[1] - v1[1] * v2[0]
}

// =============================================================================
// Orientation / Segment Tests
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the ordered triple (p, q, r).
pub fn orientation(p: Point2, q: Point2, r: Point2) -> Orientation {
    let val = cross_2d([q[0] - p[0], q[1] - p[1]], [r[0] - p[0], r[1] - p[1]]);
    if val.abs() < EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// True if `q` lies within the bounding box of segment `p`-`r` (within EPSILON).
/// Only meaningful once p, q, r are known to be collinear.
pub fn on_segment(p: Point2, q: Point2, r: Point2) -> bool {
    q[0] <= p[0].max(r[0]) + EPSILON
        && q[0] >= p[0].min(r[0]) - EPSILON
        && q[1] <= p[1].max(r[1]) + EPSILON
        && q[1] >= p[1].min(r[1]) - EPSILON
}

/// True if closed segments `p1`-`q1` and `p2`-`q2` share at least one point.
///
/// General case: each segment's endpoints lie on opposite sides of the other.
/// Degenerate case: a collinear endpoint lying on the other segment.
pub fn segments_intersect(p1: Point2, q1: Point2, p2: Point2, q2: Point2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

// =============================================================================
// Polygon Operations
// =============================================================================

/// Compute signed area of a polygon using the Shoelace formula.
/// Positive = CCW winding, Negative = CW winding.
/// Accepts open or explicitly closed rings; a repeated closing point adds nothing.
pub fn polygon_signed_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i][0] * vertices[j][1];
        area -= vertices[j][0] * vertices[i][1];
    }
    area / 2.0
}

/// Compute absolute area of a polygon.
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Total boundary length, treating the sequence as a cycle.
pub fn polygon_perimeter(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| distance(vertices[i], vertices[(i + 1) % n])).sum()
}

/// Test if a point is inside a polygon using the winding number algorithm.
/// Works for both convex and concave polygons.
pub fn point_in_polygon(point: Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut winding: i32 = 0;

    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        if p1[1] <= point[1] {
            if p2[1] > point[1] {
                // Upward crossing
                let cross = (p2[0] - p1[0]) * (point[1] - p1[1]) - (p2[1] - p1[1]) * (point[0] - p1[0]);
                if cross > 0.0 {
                    winding += 1;
                }
            }
        } else if p2[1] <= point[1] {
            // Downward crossing
            let cross = (p2[0] - p1[0]) * (point[1] - p1[1]) - (p2[1] - p1[1]) * (point[0] - p1[0]);
            if cross < 0.0 {
                winding -= 1;
            }
        }
    }

    winding != 0
}

// =============================================================================
// Tests
// =============================================================================
