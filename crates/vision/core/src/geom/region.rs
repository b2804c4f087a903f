use std::f64::consts::TAU;

use super::polygon::{AREA_TOLERANCE, LINE_TOLERANCE};
use super::{Affine, Bounds, ConvexPolygon, GeometryError, Point};

/// Relative symmetric-difference area under which two regions count as the
/// same shape.
const SHAPE_TOLERANCE: f64 = 1e-6;

/// A planar area made of interior-disjoint convex polygons.
///
/// Every operation returns a region that keeps the pieces disjoint, so
/// [`Region::area`] is a plain sum. The empty region means "nothing".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    polygons: Vec<ConvexPolygon>,
}

impl Region {
    pub const fn empty() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    pub fn from_polygon(polygon: ConvexPolygon) -> Self {
        Self {
            polygons: vec![polygon],
        }
    }

    /// # Errors
    ///
    /// Propagates [`GeometryError`] when the ring is not a valid convex polygon.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        ConvexPolygon::new(vertices).map(Self::from_polygon)
    }

    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    /// Non-positive extents give the empty region.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        if !(width > 0.0 && height > 0.0) {
            return Self::empty();
        }
        Self::from_vertices(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
        .unwrap_or_default()
    }

    /// Regular `segments`-gon inscribed in the circle, first vertex at angle 0.
    pub fn disk(center: Point, radius: f64, segments: u32) -> Self {
        if radius.is_nan() || radius <= 0.0 || segments < 3 {
            return Self::empty();
        }
        let vertices = (0..segments)
            .map(|i| {
                let theta = TAU * f64::from(i) / f64::from(segments);
                Point::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .collect();
        Self::from_vertices(vertices).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[ConvexPolygon] {
        &self.polygons
    }

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(ConvexPolygon::area).sum()
    }

    /// Bounding box, or `None` for the empty region.
    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons
            .iter()
            .map(ConvexPolygon::bounds)
            .reduce(|acc, b| acc.merge(&b))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.polygons.iter().any(|p| p.contains(point))
    }

    /// In-place union.
    ///
    /// Only existing pieces whose bounds overlap an incoming piece are cut
    /// against it, so adding cells one at a time stays cheap.
    pub fn add(&mut self, other: &Region) {
        let mut additions = Vec::new();
        for piece in &other.polygons {
            let bounds = piece.bounds();
            let mut fresh = vec![piece.clone()];
            for existing in self
                .polygons
                .iter()
                .filter(|existing| existing.bounds().overlaps(&bounds, LINE_TOLERANCE))
            {
                fresh = carve(fresh, existing);
                if fresh.is_empty() {
                    break;
                }
            }
            additions.extend(fresh);
        }
        self.polygons.extend(additions);
    }

    #[must_use]
    pub fn union(&self, other: &Region) -> Region {
        let mut out = self.clone();
        out.add(other);
        out
    }

    #[must_use]
    pub fn subtract(&self, other: &Region) -> Region {
        let mut pieces = self.polygons.clone();
        for cut in &other.polygons {
            pieces = carve(pieces, cut);
            if pieces.is_empty() {
                break;
            }
        }
        Region { polygons: pieces }
    }

    #[must_use]
    pub fn intersect(&self, other: &Region) -> Region {
        let polygons = self
            .polygons
            .iter()
            .flat_map(|a| other.polygons.iter().filter_map(|b| a.intersect(b)))
            .collect();
        Region { polygons }
    }

    #[must_use]
    pub fn transformed(&self, transform: &Affine) -> Region {
        Region {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.transformed(transform))
                .collect(),
        }
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Region {
        self.transformed(&Affine::translation(dx, dy))
    }

    /// Shape comparison: true when the symmetric difference is negligible
    /// relative to the larger of the two areas. Piece layout is irrelevant.
    pub fn approx_eq(&self, other: &Region) -> bool {
        let scale = self.area().max(other.area()).max(1.0);
        let difference = self.subtract(other).area() + other.subtract(self).area();
        difference <= (SHAPE_TOLERANCE * scale).max(AREA_TOLERANCE)
    }
}

impl From<ConvexPolygon> for Region {
    fn from(polygon: ConvexPolygon) -> Self {
        Self::from_polygon(polygon)
    }
}

/// Removes `cut` from every piece. Pieces clear of `cut` are moved through
/// untouched and the input is returned as is when none of them overlap.
fn carve(pieces: Vec<ConvexPolygon>, cut: &ConvexPolygon) -> Vec<ConvexPolygon> {
    let cut_bounds = cut.bounds();
    let overlaps = |piece: &ConvexPolygon| piece.bounds().overlaps(&cut_bounds, LINE_TOLERANCE);
    if !pieces.iter().any(overlaps) {
        return pieces;
    }
    let mut out = Vec::with_capacity(pieces.len() + 3);
    for piece in pieces {
        if overlaps(&piece) {
            out.extend(piece.subtract(cut));
        } else {
            out.push(piece);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn disk_area_approaches_circle() {
        let disk = Region::disk(Point::ORIGIN, 10.0, 256);
        let expected = PI * 100.0;
        assert!((disk.area() - expected).abs() / expected < 1e-3);
        assert!(disk.contains(Point::new(9.9, 0.0)));
        assert!(!disk.contains(Point::new(7.2, 7.2)));
    }

    #[test]
    fn degenerate_shapes_are_empty() {
        assert!(Region::disk(Point::ORIGIN, 0.0, 64).is_empty());
        assert!(Region::disk(Point::ORIGIN, 5.0, 2).is_empty());
        assert!(Region::rectangle(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Region::empty().bounds().is_none());
    }

    #[test]
    fn union_of_overlapping_rectangles_counts_overlap_once() {
        let a = Region::rectangle(0.0, 0.0, 10.0, 10.0);
        let b = Region::rectangle(5.0, 0.0, 10.0, 10.0);
        let u = a.union(&b);
        assert!((u.area() - 150.0).abs() < 1e-9);
        assert!(u.approx_eq(&Region::rectangle(0.0, 0.0, 15.0, 10.0)));
    }

    #[test]
    fn union_is_idempotent() {
        let a = Region::disk(Point::new(3.0, 4.0), 5.0, 32);
        let u = a.union(&a);
        assert!((u.area() - a.area()).abs() < 1e-9);
        assert!(u.approx_eq(&a));
    }

    #[test]
    fn subtract_and_intersect_partition() {
        let disk = Region::disk(Point::ORIGIN, 10.0, 64);
        let half = Region::rectangle(-20.0, 0.0, 40.0, 20.0);
        let kept = disk.subtract(&half);
        let cut = disk.intersect(&half);
        assert!((kept.area() + cut.area() - disk.area()).abs() < 1e-6);
        assert!(kept.approx_eq(&cut.transformed(&Affine::rotation_degrees(180.0))));
    }

    #[test]
    fn approx_eq_ignores_decomposition() {
        let whole = Region::rectangle(0.0, 0.0, 20.0, 10.0);
        let mut halves = Region::rectangle(0.0, 0.0, 10.0, 10.0);
        halves.add(&Region::rectangle(10.0, 0.0, 10.0, 10.0));
        assert_eq!(halves.polygons().len(), 2);
        assert!(whole.approx_eq(&halves));
        assert!(!whole.approx_eq(&Region::rectangle(0.0, 0.0, 20.0, 11.0)));
    }

    #[test]
    fn bounds_span_all_pieces() {
        let mut region = Region::rectangle(-10.0, -10.0, 5.0, 5.0);
        region.add(&Region::rectangle(20.0, 30.0, 5.0, 5.0));
        let bounds = region.bounds().unwrap();
        assert_eq!(bounds.min, Point::new(-10.0, -10.0));
        assert_eq!(bounds.max, Point::new(25.0, 35.0));
    }
}
