use std::fmt;

/// Identifier a vision uses to look its token up in a zone.
///
/// Visions hold this id, never the token itself; the token is resolved again
/// on every query and may be gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only view of a token as seen by vision strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub id: TokenId,
    /// Forward orientation in degrees, counter-clockwise on screen from +X.
    /// `None` when the token has no orientation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub facing: Option<i32>,
}

impl Token {
    pub const fn new(id: TokenId) -> Self {
        Self { id, facing: None }
    }

    #[must_use]
    pub const fn with_facing(mut self, facing: i32) -> Self {
        self.facing = Some(facing);
        self
    }
}
