/// Discrete selection state derived from the continuous value.
///
/// `current` is the last committed index; it only moves once the value has
/// traveled a full item away from it, so small excursions around an item
/// boundary never flip it back and forth. `latest_nearest` remembers the
/// previous `round(value)` purely to detect nearest-index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexCache {
    current: i64,
    latest_nearest: Option<i64>,
}

/// What a tracker update observed. Same shape as the host-facing action
/// structs elsewhere: plain flags, the caller decides what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerEvents {
    /// The nearest index differs from the previous update. Never set on the
    /// very first update.
    pub nearest_changed: bool,
    /// The committed index moved this update.
    pub current_committed: bool,
}

impl IndexCache {
    pub const fn initial() -> Self {
        Self {
            current: 0,
            latest_nearest: None,
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn latest_nearest(&self) -> Option<i64> {
        self.latest_nearest
    }

    /// Folds a new continuous value into the cache.
    ///
    /// Values are not clamped; out-of-range values extrapolate and the
    /// caller's label lookups degrade to absent boxes.
    pub fn update(&mut self, value: f64) -> TrackerEvents {
        let nearest = value.round() as i64;
        let nearest_changed = self.latest_nearest.is_some_and(|latest| latest != nearest);
        self.latest_nearest = Some(nearest);

        let mut current_committed = false;
        if (value - self.current as f64).abs() >= 1.0 {
            current_committed = self.current != nearest;
            self.current = nearest;
        }

        TrackerEvents {
            nearest_changed,
            current_committed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_never_signals_a_nearest_change() {
        let mut cache = IndexCache::initial();
        let events = cache.update(2.0);
        assert!(!events.nearest_changed);
        assert_eq!(cache.latest_nearest(), Some(2));
    }

    #[test]
    fn hysteresis_keeps_current_on_sub_unit_excursions() {
        let mut cache = IndexCache::initial();
        cache.update(0.0);

        let forward = cache.update(0.99);
        assert_eq!(cache.current(), 0, "0.99 away must not commit");
        assert!(forward.nearest_changed, "nearest flips at the 0.5 crossing");

        let back = cache.update(0.01);
        assert_eq!(cache.current(), 0);
        assert!(back.nearest_changed, "nearest flips back");
    }

    #[test]
    fn commits_once_a_full_item_away() {
        let mut cache = IndexCache::initial();
        cache.update(0.0);
        let events = cache.update(1.0);
        assert!(events.current_committed);
        assert_eq!(cache.current(), 1);
    }

    #[test]
    fn settled_integer_matches_current() {
        let mut cache = IndexCache::initial();
        for target in [1.0, 3.0, 2.0] {
            cache.update(target);
            assert_eq!(cache.current(), target as i64);
        }
    }

    #[test]
    fn repeated_value_is_quiet() {
        let mut cache = IndexCache::initial();
        cache.update(1.0);
        let events = cache.update(1.0);
        assert_eq!(events, TrackerEvents::default());
    }

    #[test]
    fn out_of_range_values_extrapolate() {
        let mut cache = IndexCache::initial();
        cache.update(-0.6);
        assert_eq!(cache.latest_nearest(), Some(-1));
        assert_eq!(cache.current(), 0, "travel below one item keeps current");

        cache.update(-1.4);
        assert_eq!(cache.current(), -1);
    }
}
