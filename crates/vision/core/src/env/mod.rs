//! Read-only world data a vision is computed against.
//!
//! The grid, the zone and its tokens belong to the surrounding application.
//! Strategies only query them through [`ZoneOracle`]; tokens are looked up by
//! [`TokenId`] each time, so a vision never keeps a token alive.
mod grid;
mod token;
mod zone;

pub use grid::{Grid, GridSize, HexOrientation};
pub use token::{Token, TokenId};
pub use zone::{ZoneOracle, ZoneSnapshot};
