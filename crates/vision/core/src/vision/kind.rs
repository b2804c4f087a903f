use std::fmt;

use crate::config::VisionConfig;
use crate::env::{TokenId, ZoneOracle};
use crate::geom::Region;

use super::{blocky, conic, round};

/// Where a region's origin sits relative to the token's cell(s).
///
/// Consumed by the renderer when positioning the region; region construction
/// ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Anchor {
    /// Origin is the token's center.
    Center,
    /// Origin is the corner shared by the four cells around the token.
    Corner,
}

/// Vision strategy without per-instance parameters.
///
/// `Display` yields the short name shown in selection lists. Parsing accepts
/// that name or its `snake_case` tag, ignoring case.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum VisionStrategy {
    #[strum(to_string = "Round")]
    Round,
    #[strum(to_string = "Blocky Round", serialize = "blocky_round")]
    BlockyRound,
    #[strum(to_string = "Conic Facing", serialize = "facing_conic")]
    FacingConic,
}

impl VisionStrategy {
    /// Selection-list order.
    pub const ALL: [VisionStrategy; 3] = [
        VisionStrategy::Round,
        VisionStrategy::FacingConic,
        VisionStrategy::BlockyRound,
    ];

    pub fn short_name(self) -> &'static str {
        self.into()
    }

    /// Binds the strategy's parameters; facing cones need `token`.
    pub const fn bind(self, token: Option<TokenId>) -> Option<VisionKind> {
        match self {
            VisionStrategy::Round => Some(VisionKind::Round),
            VisionStrategy::BlockyRound => Some(VisionKind::BlockyRound),
            VisionStrategy::FacingConic => match token {
                Some(token) => Some(VisionKind::FacingConic { token }),
                None => None,
            },
        }
    }
}

/// Vision strategy together with the parameters only that strategy needs.
///
/// `Display` yields the strategy's short name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum VisionKind {
    Round,
    BlockyRound,
    /// Forward cone of the token identified by `token`.
    FacingConic { token: TokenId },
}

impl VisionKind {
    pub const fn strategy(&self) -> VisionStrategy {
        match self {
            VisionKind::Round => VisionStrategy::Round,
            VisionKind::BlockyRound => VisionStrategy::BlockyRound,
            VisionKind::FacingConic { .. } => VisionStrategy::FacingConic,
        }
    }

    pub const fn anchor(&self) -> Anchor {
        match self {
            VisionKind::BlockyRound => Anchor::Corner,
            VisionKind::Round | VisionKind::FacingConic { .. } => Anchor::Center,
        }
    }

    /// Token whose state feeds the region, if any.
    pub const fn bound_token(&self) -> Option<TokenId> {
        match self {
            VisionKind::FacingConic { token } => Some(*token),
            VisionKind::Round | VisionKind::BlockyRound => None,
        }
    }

    /// Facing the region would be built with, re-read from `zone`.
    ///
    /// `None` for strategies that ignore facing, and for a bound token that is
    /// missing or has no facing.
    pub fn observed_facing<Z>(&self, zone: &Z) -> Option<i32>
    where
        Z: ZoneOracle + ?Sized,
    {
        self.bound_token()
            .and_then(|id| zone.token(id))
            .and_then(|token| token.facing)
    }

    /// Builds a fresh region for `distance` against the current zone state.
    ///
    /// Never fails: an unresolvable token or an undefined facing yields an
    /// empty region.
    pub fn build_region<Z>(&self, distance: u32, zone: &Z, config: &VisionConfig) -> Region
    where
        Z: ZoneOracle + ?Sized,
    {
        match self {
            VisionKind::Round => round::build(distance, zone, config),
            VisionKind::BlockyRound => blocky::build(distance, zone),
            VisionKind::FacingConic { token } => match zone.token(*token) {
                None => {
                    tracing::debug!(%token, "facing token not in zone, nothing visible");
                    Region::empty()
                }
                Some(resolved) => match resolved.facing {
                    None => {
                        tracing::debug!(%token, "token has no facing, nothing visible");
                        Region::empty()
                    }
                    Some(facing) => conic::build(distance, facing, zone, config),
                },
            },
        }
    }
}

impl fmt::Display for VisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.strategy().short_name())
    }
}
