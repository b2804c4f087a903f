//! Common error infrastructure for vision-core.
//!
//! Only configuration mistakes are errors. A vision that cannot see anything
//! (token gone, facing unset) yields an empty [`crate::Region`] instead.

/// Shared behavior of every error type in vision crates.
pub trait CodedError: core::error::Error {
    /// Stable identifier for this error variant, for matching in logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while configuring a [`crate::Vision`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VisionError {
    /// Distance must be a positive number of distance units.
    #[error("vision distance must be positive, got {0}")]
    InvalidDistance(i32),

    /// Disk tessellation must be a multiple of 4 with at least 8 segments.
    #[error("disk segment count must be a multiple of 4 and at least 8, got {0}")]
    InvalidDiskSegments(u32),
}

impl CodedError for VisionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDistance(_) => "VISION_INVALID_DISTANCE",
            Self::InvalidDiskSegments(_) => "VISION_INVALID_DISK_SEGMENTS",
        }
    }
}
