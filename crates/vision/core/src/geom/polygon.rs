use std::f64::consts::TAU;

use super::{Affine, Bounds, GeometryError, Point};

/// Points closer than this to a clipping line count as lying on it.
pub(crate) const LINE_TOLERANCE: f64 = 1e-7;

/// Polygons with less area than this are dropped from results.
pub(crate) const AREA_TOLERANCE: f64 = 1e-9;

/// Simple convex polygon with vertices stored counter-clockwise
/// (positive signed area), so the interior lies left of every edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
    bounds: Bounds,
}

impl ConvexPolygon {
    /// Validates and normalizes a vertex ring. Either winding is accepted;
    /// collinear vertices are allowed.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the ring is non-finite, has fewer than
    /// three distinct vertices, encloses no area, or is not convex.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFinite);
        }

        let mut vertices = dedup_ring(vertices);
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let area = signed_area(&vertices);
        if area.abs() < AREA_TOLERANCE {
            return Err(GeometryError::Degenerate(area.abs()));
        }
        if area < 0.0 {
            vertices.reverse();
        }

        let n = vertices.len();
        let mut turning = 0.0;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            if side_distance(a, b, c) < -LINE_TOLERANCE {
                return Err(GeometryError::NotConvex);
            }
            let (u, v) = (b - a, c - b);
            turning += u.cross(v).atan2(u.x * v.x + u.y * v.y);
        }
        // A pentagram turns consistently but winds twice.
        if (turning - TAU).abs() > 1e-6 {
            return Err(GeometryError::NotConvex);
        }

        Ok(Self::from_ccw(vertices))
    }

    fn from_ccw(vertices: Vec<Point>) -> Self {
        let bounds = bounds_of(&vertices);
        Self { vertices, bounds }
    }

    /// Accepts output of a clip, which is convex and counter-clockwise by
    /// construction. Returns `None` when nothing measurable is left.
    fn from_clipped(vertices: Vec<Point>) -> Option<Self> {
        let vertices = dedup_ring(vertices);
        if vertices.len() < 3 || signed_area(&vertices) < AREA_TOLERANCE {
            return None;
        }
        Some(Self::from_ccw(vertices))
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Iterates edges as `(start, end)` pairs, closing the ring.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// True for points inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point, LINE_TOLERANCE)
            && self
                .edges()
                .all(|(a, b)| side_distance(a, b, point) >= -LINE_TOLERANCE)
    }

    #[must_use]
    pub fn transformed(&self, transform: &Affine) -> ConvexPolygon {
        let mut vertices: Vec<Point> = self.vertices.iter().map(|&p| transform.apply(p)).collect();
        if transform.determinant() < 0.0 {
            vertices.reverse();
        }
        Self::from_ccw(vertices)
    }

    /// Keeps the part of the polygon left of the directed line `a → b`
    /// (Sutherland–Hodgman against a single half-plane).
    pub fn clip(&self, a: Point, b: Point) -> Option<ConvexPolygon> {
        let sides: Vec<f64> = self
            .vertices
            .iter()
            .map(|&p| side_distance(a, b, p))
            .collect();

        if sides.iter().all(|&s| s >= -LINE_TOLERANCE) {
            return Some(self.clone());
        }
        if sides.iter().all(|&s| s <= LINE_TOLERANCE) {
            return None;
        }

        let n = self.vertices.len();
        let mut out = Vec::with_capacity(n + 1);
        for i in 0..n {
            let j = (i + 1) % n;
            let (current, next) = (self.vertices[i], self.vertices[j]);
            let (sc, sn) = (sides[i], sides[j]);

            if sc >= -LINE_TOLERANCE {
                out.push(current);
            }
            let crosses = (sc > LINE_TOLERANCE && sn < -LINE_TOLERANCE)
                || (sc < -LINE_TOLERANCE && sn > LINE_TOLERANCE);
            if crosses {
                let t = sc / (sc - sn);
                out.push(current + (next - current) * t);
            }
        }
        Self::from_clipped(out)
    }

    /// Overlap of two convex polygons.
    pub fn intersect(&self, other: &ConvexPolygon) -> Option<ConvexPolygon> {
        if !self.bounds.overlaps(&other.bounds, LINE_TOLERANCE) {
            return None;
        }
        other
            .edges()
            .try_fold(self.clone(), |remaining, (a, b)| remaining.clip(a, b))
    }

    /// `self − other`, decomposed into interior-disjoint convex pieces.
    ///
    /// Walks the edges of `other`: whatever lies outside an edge is emitted as
    /// a piece, whatever lies inside is carried on to the next edge. The part
    /// that survives every edge is inside `other` and is discarded.
    pub fn subtract(&self, other: &ConvexPolygon) -> Vec<ConvexPolygon> {
        if !self.bounds.overlaps(&other.bounds, LINE_TOLERANCE) {
            return vec![self.clone()];
        }

        let mut pieces = Vec::new();
        let mut remaining = self.clone();
        for (a, b) in other.edges() {
            if let Some(outside) = remaining.clip(b, a) {
                pieces.push(outside);
            }
            match remaining.clip(a, b) {
                Some(inside) => remaining = inside,
                None => return pieces,
            }
        }
        pieces
    }
}

/// Signed distance of `p` from the directed line `a → b`; positive on the left.
#[inline]
pub(crate) fn side_distance(a: Point, b: Point, p: Point) -> f64 {
    let direction = b - a;
    let length = direction.length();
    if length == 0.0 {
        return 0.0;
    }
    direction.cross(p - a) / length
}

fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum();
    twice / 2.0
}

fn bounds_of(vertices: &[Point]) -> Bounds {
    let first = vertices.first().copied().unwrap_or_default();
    vertices.iter().fold(
        Bounds {
            min: first,
            max: first,
        },
        |acc, p| Bounds {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        },
    )
}

/// Drops consecutive duplicates, including a closing vertex equal to the first.
fn dedup_ring(vertices: Vec<Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(vertices.len());
    for p in vertices {
        if out
            .last()
            .is_none_or(|last| last.distance(p) > LINE_TOLERANCE)
        {
            out.push(p);
        }
    }
    while out.len() > 1 {
        let (first, last) = (out[0], out[out.len() - 1]);
        if first.distance(last) > LINE_TOLERANCE {
            break;
        }
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> ConvexPolygon {
        ConvexPolygon::new(vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ])
        .unwrap()
    }

    #[test]
    fn either_winding_is_normalized() {
        let cw = ConvexPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap();
        assert!((cw.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_rings() {
        assert_eq!(
            ConvexPolygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]),
            Err(GeometryError::TooFewVertices(2))
        );
        assert!(matches!(
            ConvexPolygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
            ]),
            Err(GeometryError::Degenerate(_))
        ));
        let arrow = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 4.0),
        ];
        assert_eq!(ConvexPolygon::new(arrow), Err(GeometryError::NotConvex));
        assert_eq!(
            ConvexPolygon::new(vec![
                Point::new(f64::NAN, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ]),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    fn clip_keeps_left_side() {
        let sq = square(0.0, 0.0, 10.0);
        // heading toward +y at x = 4, the left side is x < 4
        let left = sq
            .clip(Point::new(4.0, 0.0), Point::new(4.0, 10.0))
            .unwrap();
        assert!((left.area() - 40.0).abs() < 1e-9);
        assert!(left.contains(Point::new(1.0, 5.0)));
        assert!(!left.contains(Point::new(9.0, 5.0)));
    }

    #[test]
    fn subtract_of_adjacent_square_is_untouched() {
        let a = square(10.0, 0.0, 10.0);
        let b = square(0.0, 0.0, 10.0);
        let pieces = a.subtract(&b);
        assert_eq!(pieces, vec![a]);
    }

    #[test]
    fn subtract_punches_hole_into_pieces() {
        let outer = square(0.0, 0.0, 30.0);
        let hole = square(10.0, 10.0, 10.0);
        let pieces = outer.subtract(&hole);
        let total: f64 = pieces.iter().map(ConvexPolygon::area).sum();
        assert_eq!(pieces.len(), 4);
        assert!((total - 800.0).abs() < 1e-9);
        assert!(pieces.iter().all(|p| !p.contains(Point::new(15.0, 15.0))));
    }

    #[test]
    fn contained_polygon_subtracts_to_nothing() {
        let inner = square(2.0, 2.0, 2.0);
        let outer = square(0.0, 0.0, 10.0);
        assert!(inner.subtract(&outer).is_empty());
    }

    #[test]
    fn intersect_of_offset_squares() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let overlap = a.intersect(&b).unwrap();
        assert!((overlap.area() - 25.0).abs() < 1e-9);
    }
}
