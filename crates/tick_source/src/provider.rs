// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

/// A source of ticks, the time component of sequential identifiers.
///
/// A tick is a 100-nanosecond interval and [`ticks`][Self::ticks] returns the number of ticks
/// elapsed since 0001-01-01T00:00:00Z. See the [`ticks`][crate::ticks] module for constants and
/// conversions.
///
/// Providers need no setup, configuration, or teardown. They are safe to share across threads
/// and to call concurrently.
///
/// # Examples
///
/// ```
/// use tick_source::{HighResolutionTickProvider, StopwatchTickProvider, TickProvider};
///
/// fn stamp(provider: &dyn TickProvider) -> i64 {
///     provider.ticks()
/// }
///
/// assert!(stamp(&HighResolutionTickProvider::new()) > 0);
/// assert!(stamp(&StopwatchTickProvider::new()) > 0);
/// ```
pub trait TickProvider: Send + Sync {
    /// Returns the current number of ticks since 0001-01-01T00:00:00Z.
    fn ticks(&self) -> i64;
}

impl<T: TickProvider + ?Sized> TickProvider for &T {
    fn ticks(&self) -> i64 {
        (**self).ticks()
    }
}

impl<T: TickProvider + ?Sized> TickProvider for Box<T> {
    fn ticks(&self) -> i64 {
        (**self).ticks()
    }
}

impl<T: TickProvider + ?Sized> TickProvider for Arc<T> {
    fn ticks(&self) -> i64 {
        (**self).ticks()
    }
}
