// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::SystemTime;

use crate::clock_selector::expect_clock;
use crate::counter::units_to_ticks;
use crate::{ElapsedCounter, InstantCounter, Result, TickProvider, ticks};

/// A [`TickProvider`] that anchors a monotonic counter to the wall clock once.
///
/// On construction, the provider reads the standard wall clock and an [`ElapsedCounter`]
/// back to back. Every call to [`ticks`][TickProvider::ticks] returns the anchored wall-clock
/// ticks plus the ticks elapsed on the counter since then.
///
/// Ticks from one provider never decrease, even if the system clock is adjusted. Two providers
/// created at different times have independent anchors: they agree only as well as the wall
/// clock was accurate at each construction and may drift apart over time.
///
/// # Examples
///
/// ```
/// use tick_source::{StopwatchTickProvider, TickProvider};
///
/// let provider = StopwatchTickProvider::new();
///
/// let first = provider.ticks();
/// let second = provider.ticks();
/// assert!(second >= first);
/// ```
#[derive(Debug, Clone)]
pub struct StopwatchTickProvider<C = InstantCounter> {
    counter: C,
    origin_ticks: i64,
    origin_units: u64,
}

impl StopwatchTickProvider {
    /// Creates a provider anchored at the current wall-clock time, counting with [`InstantCounter`].
    ///
    /// # Panics
    ///
    /// Panics if the system clock reports a time that cannot be represented as ticks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_counter(InstantCounter)
    }
}

impl Default for StopwatchTickProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ElapsedCounter> StopwatchTickProvider<C> {
    /// Creates a provider anchored at the current wall-clock time, counting with `counter`.
    ///
    /// # Panics
    ///
    /// Panics if the system clock reports a time that cannot be represented as ticks.
    #[must_use]
    pub fn with_counter(counter: C) -> Self {
        expect_clock(Self::try_with_counter(counter))
    }

    /// Creates a provider anchored at the current wall-clock time, counting with `counter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the system clock reports a time that cannot be represented as ticks.
    pub fn try_with_counter(counter: C) -> Result<Self> {
        let origin_ticks = ticks::from_system_time(SystemTime::now())?;

        Ok(Self::with_origin(counter, origin_ticks))
    }

    /// Creates a provider that reports `origin_ticks` at the current counter value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_source::{InstantCounter, StopwatchTickProvider, TickProvider, ticks};
    ///
    /// let provider = StopwatchTickProvider::with_origin(InstantCounter, ticks::UNIX_EPOCH_TICKS);
    ///
    /// assert!(provider.ticks() >= ticks::UNIX_EPOCH_TICKS);
    /// ```
    #[must_use]
    pub fn with_origin(counter: C, origin_ticks: i64) -> Self {
        let origin_units = counter.now();

        Self {
            counter,
            origin_ticks,
            origin_units,
        }
    }

    /// Returns the wall-clock ticks captured when the provider was created.
    #[must_use]
    pub fn origin_ticks(&self) -> i64 {
        self.origin_ticks
    }

    /// Returns the ticks elapsed on the counter since the provider was created.
    #[must_use]
    pub fn elapsed_ticks(&self) -> i64 {
        let elapsed_units = self.counter.now().saturating_sub(self.origin_units);

        units_to_ticks(elapsed_units, self.counter.frequency())
    }
}

impl<C: ElapsedCounter> TickProvider for StopwatchTickProvider<C> {
    fn ticks(&self) -> i64 {
        self.origin_ticks.saturating_add(self.elapsed_ticks())
    }
}
