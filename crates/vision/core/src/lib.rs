//! Visible-area computation for tokens on a tabletop map.
//!
//! `vision-core` turns a configured [`Vision`] into the [`Region`] a token can
//! see, in zone points around the token's anchor. Three strategies are
//! provided: a round disk, a disk snapped to whole grid cells, and a 90° cone
//! that follows the token's facing. Regions are cached per vision and rebuilt
//! only when distance, grid scale or facing change.
//!
//! World data (grid, zone, tokens) is read through [`ZoneOracle`]; the crate
//! performs no I/O and holds no global state.
pub mod config;
pub mod env;
pub mod error;
pub mod geom;
pub mod vision;

pub use config::VisionConfig;
pub use env::{Grid, GridSize, HexOrientation, Token, TokenId, ZoneOracle, ZoneSnapshot};
pub use error::{CodedError, VisionError};
pub use geom::{Affine, Bounds, ConvexPolygon, GeometryError, Point, Region};
pub use vision::{
    Anchor, CacheStats, Fingerprint, InvalidationCause, RegionCache, Vision, VisionKind,
    VisionRecord, VisionStrategy,
};
