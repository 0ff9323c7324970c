use nalgebra as na;

pub type Point2 = [f64; 2];
pub type Point3 = na::Point3<f64>;
pub type Vector3 = na::Vector3<f64>;

pub const EPSILON: f64 = 1e-6;

pub mod utils_2d;

pub mod polygon;
pub use polygon::{close_ring, validate_simple_polygon, PolygonIssue, PolygonReport};
