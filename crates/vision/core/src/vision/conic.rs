//! Quarter-disk wedge pointing along the token's facing.

use crate::config::VisionConfig;
use crate::env::ZoneOracle;
use crate::geom::{Affine, Point, Region};

/// Width of the visible wedge.
pub const CONE_DEGREES: f64 = 90.0;

/// Wedge of radius `distance × points_per_cell` whose bisector lies on
/// `facing` (degrees, counter-clockwise on screen from +X).
///
/// The wedge is cut from a disk as the quarter `x >= 0, y <= 0`, which spans
/// 0°..90° on screen with its bisector at 45°, then turned by `45° − facing`.
pub fn build<Z>(distance: u32, facing: i32, zone: &Z, config: &VisionConfig) -> Region
where
    Z: ZoneOracle + ?Sized,
{
    let radius = f64::from(distance) * f64::from(zone.points_per_cell());
    let disk = Region::disk(Point::ORIGIN, radius, config.disk_segments);
    if disk.is_empty() {
        return disk;
    }

    let extent = 2.0 * radius;
    let below = Region::rectangle(-extent, 0.0, 2.0 * extent, extent);
    let left = Region::rectangle(-extent, -extent, extent, 2.0 * extent);
    let wedge = disk.subtract(&below).subtract(&left);

    let angle = CONE_DEGREES / 2.0 - f64::from(facing);
    wedge.transformed(&Affine::rotation_degrees(angle))
}
