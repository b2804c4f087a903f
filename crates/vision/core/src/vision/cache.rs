use bitflags::bitflags;

use crate::geom::Region;

/// Inputs a cached region was built from. Any change forces a rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub distance: u32,
    pub grid_size: u32,
    pub points_per_cell: u32,
    /// Facing of the bound token; always `None` for strategies that ignore it.
    pub facing: Option<i32>,
}

impl Fingerprint {
    /// Fields that differ between `self` and `next`.
    pub fn changes(&self, next: &Fingerprint) -> InvalidationCause {
        let mut cause = InvalidationCause::empty();
        cause.set(InvalidationCause::DISTANCE, self.distance != next.distance);
        cause.set(
            InvalidationCause::GRID,
            self.grid_size != next.grid_size || self.points_per_cell != next.points_per_cell,
        );
        cause.set(InvalidationCause::FACING, self.facing != next.facing);
        cause
    }
}

bitflags! {
    /// Why a region had to be rebuilt. Empty means the cache was valid.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InvalidationCause: u8 {
        /// Nothing cached yet, or the cache was flushed.
        const EMPTY    = 1 << 0;
        const DISTANCE = 1 << 1;
        /// Grid size or distance-unit scale changed.
        const GRID     = 1 << 2;
        const FACING   = 1 << 3;
    }
}

/// Counters for cache effectiveness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Number of times a region was constructed.
    pub builds: u64,
    /// Number of queries answered from the cache.
    pub hits: u64,
}

/// Single-entry memo of the last built region and the inputs it came from.
///
/// Not synchronized: the check-then-build sequence in
/// [`RegionCache::get_or_build`] needs an external lock if one cache is
/// shared across threads.
#[derive(Clone, Debug, Default)]
pub struct RegionCache {
    entry: Option<(Fingerprint, Region)>,
    stats: CacheStats,
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached region if it was built from `fingerprint`,
    /// otherwise builds, stores and returns a new one.
    pub fn get_or_build(
        &mut self,
        fingerprint: Fingerprint,
        build: impl FnOnce() -> Region,
    ) -> &Region {
        let entry = match self.entry.take() {
            Some((cached, region)) if cached == fingerprint => {
                self.stats.hits += 1;
                tracing::trace!(?fingerprint, "vision region cache hit");
                (cached, region)
            }
            previous => {
                let cause = previous
                    .map(|(cached, _)| cached.changes(&fingerprint))
                    .unwrap_or(InvalidationCause::EMPTY);
                tracing::debug!(?cause, ?fingerprint, "rebuilding vision region");
                self.stats.builds += 1;
                (fingerprint, build())
            }
        };
        &self.entry.insert(entry).1
    }

    /// Drops the cached region. Idempotent.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_cached(&self) -> bool {
        self.entry.is_some()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fingerprint(distance: u32, facing: Option<i32>) -> Fingerprint {
        Fingerprint {
            distance,
            grid_size: 50,
            points_per_cell: 10,
            facing,
        }
    }

    #[test]
    fn changes_report_every_differing_field() {
        let a = fingerprint(5, Some(0));
        let mut b = fingerprint(6, Some(90));
        b.grid_size = 60;
        assert_eq!(
            a.changes(&b),
            InvalidationCause::DISTANCE | InvalidationCause::GRID | InvalidationCause::FACING
        );
        assert!(a.changes(&a).is_empty());
    }

    #[test]
    fn same_fingerprint_is_served_from_cache() {
        let mut cache = RegionCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            cache.get_or_build(fingerprint(5, None), || {
                calls += 1;
                Region::rectangle(0.0, 0.0, 1.0, 1.0)
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.stats(), CacheStats { builds: 1, hits: 2 });
    }

    #[test]
    fn new_fingerprint_or_clear_rebuilds() {
        let mut cache = RegionCache::new();
        cache.get_or_build(fingerprint(5, Some(0)), Region::empty);
        cache.get_or_build(fingerprint(5, Some(90)), Region::empty);
        assert_eq!(cache.stats().builds, 2);

        cache.clear();
        cache.clear();
        assert!(!cache.is_cached());
        cache.get_or_build(fingerprint(5, Some(90)), Region::empty);
        assert_eq!(cache.stats(), CacheStats { builds: 3, hits: 0 });
    }
}
