// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{ClockSelector, TickProvider};

/// A [`TickProvider`] that reads the most precise wall clock available on the host.
///
/// Every call to [`ticks`][TickProvider::ticks] is forwarded to a [`ClockSelector`], by default the
/// process-wide one. Nothing is cached, smoothed, or interpolated.
///
/// Ticks follow the wall clock, so they are not monotonic. If the system clock is adjusted
/// backwards, a later call may return a smaller value. Use [`StopwatchTickProvider`][crate::StopwatchTickProvider]
/// when ticks must never decrease.
///
/// # Examples
///
/// ```
/// use tick_source::{HighResolutionTickProvider, TickProvider};
///
/// let provider = HighResolutionTickProvider::new();
///
/// let first = provider.ticks();
/// let second = provider.ticks();
/// println!("{} ticks passed", second - first);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HighResolutionTickProvider {
    selector: &'static ClockSelector,
}

impl HighResolutionTickProvider {
    /// Creates a provider that reads the process-wide [`ClockSelector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            selector: ClockSelector::platform(),
        }
    }

    /// Creates a provider that reads the given selector.
    ///
    /// Combine with [`ClockSelector::with_native_reader`] to simulate hosts with or without
    /// a precise native clock.
    #[cfg(any(feature = "test-util", test))]
    #[must_use]
    pub const fn with_selector(selector: &'static ClockSelector) -> Self {
        Self { selector }
    }

    /// Returns whether the underlying selector uses the precise native clock.
    #[must_use]
    pub fn is_high_precision(&self) -> bool {
        self.selector.is_high_precision()
    }
}

impl Default for HighResolutionTickProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TickProvider for HighResolutionTickProvider {
    fn ticks(&self) -> i64 {
        self.selector.utc_now_ticks()
    }
}
