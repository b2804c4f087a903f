//! Visions: the area a token can see, built lazily and cached.
//!
//! A [`Vision`] pairs a [`VisionKind`] with a distance and a single-entry
//! region cache. [`Vision::area`] fingerprints every input the region depends
//! on (distance, grid scale, and the bound token's facing for facing cones)
//! and rebuilds only when the fingerprint changes or the cache was flushed.
//! Strategies are pure functions of their inputs; each cell placement uses its
//! own copy of the grid's cell template.
pub mod blocky;
pub mod cache;
pub mod conic;
mod kind;
mod record;
pub mod round;

use std::fmt;

pub use cache::{CacheStats, Fingerprint, InvalidationCause, RegionCache};
pub use kind::{Anchor, VisionKind, VisionStrategy};
pub use record::VisionRecord;

use crate::config::VisionConfig;
use crate::env::{TokenId, ZoneOracle};
use crate::error::VisionError;
use crate::geom::Region;

/// A configured vision with its cached region.
///
/// Not synchronized. Callers sharing one instance across threads must hold a
/// lock around [`Vision::area`] and [`Vision::flush`].
#[derive(Clone, Debug)]
pub struct Vision {
    kind: VisionKind,
    name: Option<String>,
    distance: u32,
    enabled: bool,
    config: VisionConfig,
    cache: RegionCache,
}

impl Vision {
    /// # Errors
    ///
    /// Returns [`VisionError::InvalidDistance`] when `distance` is zero or negative.
    pub fn new(kind: VisionKind, distance: i32) -> Result<Self, VisionError> {
        Ok(Self {
            kind,
            name: None,
            distance: validate_distance(distance)?,
            enabled: true,
            config: VisionConfig::default(),
            cache: RegionCache::new(),
        })
    }

    /// # Errors
    ///
    /// See [`Vision::new`].
    pub fn round(distance: i32) -> Result<Self, VisionError> {
        Self::new(VisionKind::Round, distance)
    }

    /// # Errors
    ///
    /// See [`Vision::new`].
    pub fn blocky_round(distance: i32) -> Result<Self, VisionError> {
        Self::new(VisionKind::BlockyRound, distance)
    }

    /// # Errors
    ///
    /// See [`Vision::new`].
    pub fn facing_conic(token: TokenId, distance: i32) -> Result<Self, VisionError> {
        Self::new(VisionKind::FacingConic { token }, distance)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the tessellation settings and drops any cached region.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error; the vision is unchanged.
    pub fn with_config(mut self, config: VisionConfig) -> Result<Self, VisionError> {
        config.validate()?;
        self.config = config;
        self.flush();
        Ok(self)
    }

    pub const fn kind(&self) -> VisionKind {
        self.kind
    }

    pub const fn anchor(&self) -> Anchor {
        self.kind.anchor()
    }

    pub const fn config(&self) -> &VisionConfig {
        &self.config
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Menu label: `"{name} ({kind}-{distance})"`, or `"({kind}-{distance})"`
    /// for unnamed visions.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} ({}-{})", self.kind, self.distance),
            None => format!("({}-{})", self.kind, self.distance),
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub const fn distance(&self) -> u32 {
        self.distance
    }

    /// Changes the distance and drops the cached region.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::InvalidDistance`] and leaves the vision untouched
    /// when `distance` is zero or negative.
    pub fn set_distance(&mut self, distance: i32) -> Result<(), VisionError> {
        self.distance = validate_distance(distance)?;
        self.flush();
        Ok(())
    }

    /// Current visible region, centered on the origin in zone points.
    ///
    /// Built on first use and whenever an input changed since the last build;
    /// otherwise the cached region is returned without reconstruction.
    pub fn area<Z>(&mut self, zone: &Z) -> &Region
    where
        Z: ZoneOracle + ?Sized,
    {
        let fingerprint = self.fingerprint(zone);
        let Self {
            kind,
            distance,
            config,
            cache,
            ..
        } = self;
        cache.get_or_build(fingerprint, || kind.build_region(*distance, zone, config))
    }

    /// Drops the cached region so the next [`Vision::area`] rebuilds. Idempotent.
    pub fn flush(&mut self) {
        self.cache.clear();
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn fingerprint<Z>(&self, zone: &Z) -> Fingerprint
    where
        Z: ZoneOracle + ?Sized,
    {
        Fingerprint {
            distance: self.distance,
            grid_size: zone.grid().size(),
            points_per_cell: zone.points_per_cell(),
            facing: self.kind.observed_facing(zone),
        }
    }
}

/// Short strategy name, as listed in selection menus.
impl fmt::Display for Vision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

fn validate_distance(distance: i32) -> Result<u32, VisionError> {
    match u32::try_from(distance) {
        Ok(valid) if valid > 0 => Ok(valid),
        _ => Err(VisionError::InvalidDistance(distance)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Grid, Token, ZoneSnapshot};

    #[test]
    fn rejects_non_positive_distance() {
        assert_eq!(
            Vision::round(0).unwrap_err(),
            VisionError::InvalidDistance(0)
        );
        assert_eq!(
            Vision::blocky_round(-5).unwrap_err(),
            VisionError::InvalidDistance(-5)
        );
    }

    #[test]
    fn failed_set_distance_keeps_cache() {
        let zone = ZoneSnapshot::new(Grid::square(50));
        let mut vision = Vision::round(10).unwrap();
        vision.area(&zone);
        assert!(vision.set_distance(-1).is_err());
        assert_eq!(vision.distance(), 10);
        assert!(vision.is_cached());
    }

    #[test]
    fn labels() {
        let vision = Vision::blocky_round(30).unwrap();
        assert_eq!(vision.to_string(), "Blocky Round");
        assert_eq!(vision.label(), "(Blocky Round-30)");
        assert_eq!(vision.with_name("Darkvision").label(), "Darkvision (Blocky Round-30)");
    }

    #[test]
    fn disabled_vision_still_reports_area() {
        let zone = ZoneSnapshot::new(Grid::square(50));
        let mut vision = Vision::round(2).unwrap();
        vision.set_enabled(false);
        assert!(!vision.is_enabled());
        assert!(!vision.area(&zone).is_empty());
    }

    #[test]
    fn config_change_flushes() {
        let zone = ZoneSnapshot::new(Grid::square(50));
        let mut vision = Vision::round(2).unwrap();
        let coarse = vision.area(&zone).polygons()[0].vertices().len();
        let mut vision = vision
            .with_config(VisionConfig::with_disk_segments(16).unwrap())
            .unwrap();
        assert!(!vision.is_cached());
        assert_eq!(coarse, 64);
        assert_eq!(vision.area(&zone).polygons()[0].vertices().len(), 16);
    }

    #[test]
    fn removed_token_clears_conic_area() {
        let id = TokenId(1);
        let mut zone = ZoneSnapshot::new(Grid::square(50)).with_token(Token::new(id).with_facing(0));
        let mut vision = Vision::facing_conic(id, 5).unwrap();
        assert!(!vision.area(&zone).is_empty());
        zone.remove_token(id);
        assert!(vision.area(&zone).is_empty());
    }
}
