//! Geometric validation core for shop floor layouts: simple-polygon checks for
//! building outlines and axis-aligned collision detection for equipment.

pub mod collision;
pub mod error;
pub mod floor;
pub mod geometry;

pub use error::ErrorKind;

pub fn version() -> &'static str {
    "0.1.0"
}
