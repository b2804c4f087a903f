//! Isotropic disk centered on the token.

use crate::config::VisionConfig;
use crate::env::ZoneOracle;
use crate::geom::{Point, Region};

/// Disk of radius `distance × points_per_cell` around the origin.
pub fn build<Z>(distance: u32, zone: &Z, config: &VisionConfig) -> Region
where
    Z: ZoneOracle + ?Sized,
{
    let radius = f64::from(distance) * f64::from(zone.points_per_cell());
    Region::disk(Point::ORIGIN, radius, config.disk_segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Grid, ZoneSnapshot};

    #[test]
    fn radius_scales_with_points_per_cell() {
        // 50 points per cell / 5 units per cell = 10 points per unit
        let zone = ZoneSnapshot::new(Grid::square(50));
        let region = build(3, &zone, &VisionConfig::default());
        let bounds = region.bounds().unwrap();
        assert!((bounds.max.x - 30.0).abs() < 1e-9);
        assert!((bounds.min.x + 30.0).abs() < 1e-9);
    }

    #[test]
    fn no_scale_means_nothing_visible() {
        // more units per cell than points per cell rounds the scale to zero
        let zone = ZoneSnapshot::new(Grid::square(10)).with_units_per_cell(20);
        assert!(build(3, &zone, &VisionConfig::default()).is_empty());
    }
}
