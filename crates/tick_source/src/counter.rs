// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::num::NonZeroU64;
use std::sync::LazyLock;
use std::time::Instant;

#[cfg(any(feature = "test-util", test))]
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::ticks::TICKS_PER_SECOND;

const NANOS_PER_SECOND: NonZeroU64 = NonZeroU64::new(1_000_000_000).expect("one billion is not zero");

/// The point in time that [`InstantCounter`] counts from.
static ANCHOR: LazyLock<Instant> = LazyLock::new(Instant::now);

/// A monotonic counter of elapsed time units.
///
/// The counter is immune to wall-clock adjustments but its origin is arbitrary, so its values
/// are only meaningful relative to each other. The number of units per second is reported by
/// [`frequency`][Self::frequency].
///
/// Implementations must never return a value smaller than a value returned earlier.
pub trait ElapsedCounter: Send + Sync {
    /// Returns the number of counter units per second.
    fn frequency(&self) -> NonZeroU64;

    /// Returns the current counter value.
    fn now(&self) -> u64;
}

/// An [`ElapsedCounter`] backed by [`Instant`], counting nanoseconds.
///
/// The counter starts at zero when any `InstantCounter` is first read in the process.
/// All instances share that origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantCounter;

impl ElapsedCounter for InstantCounter {
    fn frequency(&self) -> NonZeroU64 {
        NANOS_PER_SECOND
    }

    fn now(&self) -> u64 {
        u64::try_from(ANCHOR.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// An [`ElapsedCounter`] that only moves when told to.
///
/// Clones share the same counter value, so one clone can be handed to a provider while
/// another advances it.
///
/// > **Important:** This type is only available with the `test-util` feature. Never enable
/// > it for production code.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")] {
/// use std::num::NonZeroU64;
///
/// use tick_source::ManualCounter;
/// use tick_source::ElapsedCounter;
///
/// let counter = ManualCounter::new(NonZeroU64::new(1_000).unwrap());
/// counter.advance(5);
///
/// assert_eq!(counter.now(), 5);
/// # }
/// ```
#[cfg(any(feature = "test-util", test))]
#[derive(Debug, Clone)]
pub struct ManualCounter {
    frequency: NonZeroU64,
    units: Arc<AtomicU64>,
}

#[cfg(any(feature = "test-util", test))]
impl ManualCounter {
    /// Creates a counter at zero that runs at the given number of units per second.
    #[must_use]
    pub fn new(frequency: NonZeroU64) -> Self {
        Self {
            frequency,
            units: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the counter forward, saturating at `u64::MAX`.
    pub fn advance(&self, units: u64) {
        _ = self
            .units
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| Some(current.saturating_add(units)));
    }
}

#[cfg(any(feature = "test-util", test))]
impl ElapsedCounter for ManualCounter {
    fn frequency(&self) -> NonZeroU64 {
        self.frequency
    }

    fn now(&self) -> u64 {
        self.units.load(Ordering::Acquire)
    }
}

/// Converts counter units into ticks, rounding to the nearest tick.
///
/// The intermediate product is computed in 128 bits, so no precision is lost before the final division.
pub(crate) fn units_to_ticks(units: u64, frequency: NonZeroU64) -> i64 {
    let frequency = u128::from(frequency.get());
    let scaled = u128::from(units) * u128::from(TICKS_PER_SECOND.unsigned_abs());

    i64::try_from((scaled + frequency / 2) / frequency).unwrap_or(i64::MAX)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;

    fn hz(value: u64) -> NonZeroU64 {
        NonZeroU64::new(value).unwrap()
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(InstantCounter: Send, Sync, Copy);
        static_assertions::assert_impl_all!(ManualCounter: Send, Sync, Clone);
    }

    #[test]
    fn instant_counter_is_monotonic() {
        let counter = InstantCounter;
        let first = counter.now();

        sleep(Duration::from_millis(1));

        let second = counter.now();
        assert!(second >= first + 1_000_000, "{second} < {first} + 1ms");
        assert_eq!(counter.frequency(), NANOS_PER_SECOND);
    }

    #[test]
    fn manual_counter_clones_share_value() {
        let counter = ManualCounter::new(hz(10));
        let clone = counter.clone();

        clone.advance(7);

        assert_eq!(counter.now(), 7);
        assert_eq!(counter.frequency(), hz(10));
    }

    #[test]
    fn manual_counter_saturates() {
        let counter = ManualCounter::new(hz(10));

        counter.advance(u64::MAX);
        counter.advance(1);

        assert_eq!(counter.now(), u64::MAX);
    }

    #[test]
    fn units_to_ticks_exact() {
        assert_eq!(units_to_ticks(0, hz(1)), 0);
        assert_eq!(units_to_ticks(1, hz(1)), TICKS_PER_SECOND);
        assert_eq!(units_to_ticks(1_000_000_000, NANOS_PER_SECOND), TICKS_PER_SECOND);
        assert_eq!(units_to_ticks(100, NANOS_PER_SECOND), 1);
    }

    #[test]
    fn units_to_ticks_rounds_to_nearest() {
        assert_eq!(units_to_ticks(149, NANOS_PER_SECOND), 1);
        assert_eq!(units_to_ticks(150, NANOS_PER_SECOND), 2);
        assert_eq!(units_to_ticks(49, NANOS_PER_SECOND), 0);

        // 3 units at 3 MHz are one microsecond, 10 ticks. 1 unit is 3.33 ticks.
        assert_eq!(units_to_ticks(3, hz(3_000_000)), 10);
        assert_eq!(units_to_ticks(1, hz(3_000_000)), 3);
        assert_eq!(units_to_ticks(2, hz(3_000_000)), 7);
    }

    #[test]
    fn units_to_ticks_does_not_accumulate_error() {
        // A frequency that does not divide the tick rate evenly. A per-unit factor truncated
        // to an integer (3 ticks per unit) would lag by 10% after a day.
        let frequency = hz(3_000_000);
        let day = 3_000_000 * 60 * 60 * 24;

        assert_eq!(units_to_ticks(day, frequency), TICKS_PER_SECOND * 60 * 60 * 24);
    }

    #[test]
    fn units_to_ticks_saturates() {
        assert_eq!(units_to_ticks(u64::MAX, hz(1)), i64::MAX);
    }
}
