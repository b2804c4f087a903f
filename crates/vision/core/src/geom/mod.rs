//! Planar geometry used to describe visible areas.
//!
//! Regions are built from convex pieces only: every shape a vision strategy
//! produces (disks, grid cells, wedges) is convex, and convex clipping keeps
//! union and difference exact without a general polygon clipper.
mod affine;
mod error;
mod point;
mod polygon;
mod region;

pub use affine::Affine;
pub use error::GeometryError;
pub use point::{Bounds, Point};
pub use polygon::ConvexPolygon;
pub use region::Region;
