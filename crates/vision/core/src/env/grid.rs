use crate::geom::{Point, Region};

/// Cell size in zone points, clamped into [`GridSize::MIN`]..=[`GridSize::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct GridSize(u32);

impl GridSize {
    pub const MIN: u32 = 9;
    pub const MAX: u32 = 350;
    pub const DEFAULT: u32 = 50;

    pub const fn new(size: u32) -> Self {
        if size < Self::MIN {
            Self(Self::MIN)
        } else if size > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(size)
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<u32> for GridSize {
    fn from(size: u32) -> Self {
        Self::new(size)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// Which axis runs through opposite hex edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HexOrientation {
    /// Flat top and bottom edges; columns of hexes.
    #[default]
    Vertical,
    /// Flat left and right edges; rows of hexes.
    Horizontal,
}

/// Discretization of a zone into cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Grid {
    Square {
        size: GridSize,
    },
    Hex {
        size: GridSize,
        #[cfg_attr(feature = "serde", serde(default))]
        orientation: HexOrientation,
    },
    /// Free placement. Cells only exist as a measuring unit.
    Gridless {
        size: GridSize,
    },
}

impl Grid {
    /// Ratio of a regular hexagon's inner radius to its edge length.
    const REGULAR_HEX_RATIO: f64 = 0.866_025_403_784_438_6;

    pub const fn square(size: u32) -> Self {
        Self::Square {
            size: GridSize::new(size),
        }
    }

    pub const fn hex(size: u32, orientation: HexOrientation) -> Self {
        Self::Hex {
            size: GridSize::new(size),
            orientation,
        }
    }

    pub const fn gridless(size: u32) -> Self {
        Self::Gridless {
            size: GridSize::new(size),
        }
    }

    /// Square: edge length. Hex: edge-to-edge diameter.
    pub const fn size(&self) -> u32 {
        match self {
            Self::Square { size } | Self::Hex { size, .. } | Self::Gridless { size } => size.get(),
        }
    }

    /// Shape of one cell with its bounding box's top-left corner at the
    /// origin. A fresh value each call; callers own and may transform it.
    pub fn cell_shape(&self) -> Region {
        let size = f64::from(self.size());
        match self {
            Self::Square { .. } | Self::Gridless { .. } => Region::rectangle(0.0, 0.0, size, size),
            Self::Hex { orientation, .. } => {
                let minor = size / 2.0;
                let edge = minor / Self::REGULAR_HEX_RATIO;
                let projection = (edge * edge - minor * minor).sqrt();
                let ring = [
                    (0.0, minor),
                    (projection, 0.0),
                    (projection + edge, 0.0),
                    (2.0 * projection + edge, minor),
                    (projection + edge, 2.0 * minor),
                    (projection, 2.0 * minor),
                ];
                let vertices = ring
                    .into_iter()
                    .map(|(u, v)| match orientation {
                        HexOrientation::Vertical => Point::new(u, v),
                        HexOrientation::Horizontal => Point::new(v, u),
                    })
                    .collect();
                Region::from_vertices(vertices).unwrap_or_default()
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::square(GridSize::DEFAULT)
    }
}
