use crate::error::VisionError;

/// Tunable parameters for region construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisionConfig {
    /// Number of straight edges used to approximate a circle.
    /// Kept a multiple of 4 so quarter turns map vertices onto vertices.
    pub disk_segments: u32,
}

impl VisionConfig {
    pub const MIN_DISK_SEGMENTS: u32 = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DISK_SEGMENTS: u32 = 64;

    pub const fn new() -> Self {
        Self {
            disk_segments: Self::DEFAULT_DISK_SEGMENTS,
        }
    }

    /// # Errors
    ///
    /// Returns [`VisionError::InvalidDiskSegments`] for counts below 8 or not
    /// divisible by 4.
    pub fn with_disk_segments(disk_segments: u32) -> Result<Self, VisionError> {
        let config = Self { disk_segments };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Same rules as [`VisionConfig::with_disk_segments`]; use after deserializing.
    pub fn validate(&self) -> Result<(), VisionError> {
        if self.disk_segments < Self::MIN_DISK_SEGMENTS || self.disk_segments % 4 != 0 {
            return Err(VisionError::InvalidDiskSegments(self.disk_segments));
        }
        Ok(())
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self::new()
    }
}
