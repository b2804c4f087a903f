use super::Point;

/// 2D affine transform stored as the top two rows of a 3×3 matrix:
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    m00: f64,
    m01: f64,
    m02: f64,
    m10: f64,
    m11: f64,
    m12: f64,
}

impl Affine {
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m02: 0.0,
        m10: 0.0,
        m11: 1.0,
        m12: 0.0,
    };

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m02: dx,
            m12: dy,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the origin. Positive angles turn +X toward +Y, which is
    /// clockwise on screen since +Y points down.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m02: 0.0,
            m10: sin,
            m11: cos,
            m12: 0.0,
        }
    }

    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// Transform that applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Affine) -> Affine {
        Affine {
            m00: next.m00 * self.m00 + next.m01 * self.m10,
            m01: next.m00 * self.m01 + next.m01 * self.m11,
            m02: next.m00 * self.m02 + next.m01 * self.m12 + next.m02,
            m10: next.m10 * self.m00 + next.m11 * self.m10,
            m11: next.m10 * self.m01 + next.m11 * self.m11,
            m12: next.m10 * self.m02 + next.m11 * self.m12 + next.m12,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m00 * p.x + self.m01 * p.y + self.m02,
            self.m10 * p.x + self.m11 * p.y + self.m12,
        )
    }

    /// Determinant of the linear part. Negative for reflections.
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
