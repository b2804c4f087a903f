//! Geometry construction errors.

use crate::error::CodedError;

/// Errors raised when a polygon cannot be accepted into a [`super::Region`].
///
/// Region algebra itself never fails; only caller-supplied vertex lists are
/// validated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Fewer than three distinct vertices were supplied.
    #[error("polygon needs at least 3 distinct vertices, got {0}")]
    TooFewVertices(usize),

    /// The vertices turn in both directions.
    #[error("polygon is not convex")]
    NotConvex,

    /// The vertices enclose no measurable area.
    #[error("polygon is degenerate (area {0})")]
    Degenerate(f64),

    /// A coordinate was NaN or infinite.
    #[error("polygon has a non-finite coordinate")]
    NonFinite,
}

impl CodedError for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewVertices(_) => "GEOM_TOO_FEW_VERTICES",
            Self::NotConvex => "GEOM_NOT_CONVEX",
            Self::Degenerate(_) => "GEOM_DEGENERATE",
            Self::NonFinite => "GEOM_NON_FINITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{ConvexPolygon, Point};

    #[test]
    fn concave_ring_is_rejected_with_code() {
        let err = ConvexPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 4.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap_err();
        assert_eq!(err, GeometryError::NotConvex);
        assert_eq!(err.error_code(), "GEOM_NOT_CONVEX");
    }
}
