// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::arithmetic_side_effects,
        clippy::unchecked_time_subtraction,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! High-resolution wall-clock ticks for sequential, globally-ordered identifiers.
//!
//! A tick is a 100-nanosecond interval. Tick values count the ticks elapsed since
//! 0001-01-01T00:00:00Z, the convention used by .NET `DateTime`, and are meant to be used
//! as the time component of identifiers that sort by creation time.
//!
//! # Quick Start
//!
//! ```
//! use tick_source::{HighResolutionTickProvider, TickProvider};
//!
//! fn next_id_time(provider: &impl TickProvider) -> i64 {
//!     provider.ticks()
//! }
//!
//! let provider = HighResolutionTickProvider::new();
//! let ticks = next_id_time(&provider);
//! assert!(ticks > tick_source::ticks::UNIX_EPOCH_TICKS);
//! ```
//!
//! # Overview
//!
//! - [`TickProvider`] - The capability consumed by identifier generators: `ticks() -> i64`.
//! - [`HighResolutionTickProvider`] - Reads the most precise wall clock of the host on every call.
//! - [`StopwatchTickProvider`] - Anchors a monotonic [`ElapsedCounter`] to the wall clock once,
//!   so its ticks never decrease.
//! - [`ClockSelector`] - Probes the precise native clock once per process and falls back to
//!   [`SystemTime`][std::time::SystemTime] if it is unavailable.
//! - [`ticks`] - Tick constants and conversions to and from `SystemTime` and Windows `FILETIME`.
//! - [`Error`] - Represents an error that can occur when reading or converting ticks.
//!
//! # Precise and standard clocks
//!
//! The precise native clock is `GetSystemTimePreciseAsFileTime` on Windows and
//! `clock_gettime(CLOCK_REALTIME)` on Unix. On first use, the process-wide [`ClockSelector`] reads it
//! once. If that succeeds, all reads go to the native clock; otherwise all reads go to the
//! standard clock. The decision is permanent and never reported to callers other than through
//! [`is_high_precision`].
//!
//! # Choosing a provider
//!
//! [`HighResolutionTickProvider`] follows the wall clock, including any adjustments made to it.
//! Use it when ticks from different processes or machines must be comparable.
//!
//! [`StopwatchTickProvider`] follows a monotonic counter after its construction. Use it when
//! ticks from one provider must never decrease. Two providers created at different times are
//! only as consistent as the wall clock was at their construction.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: a `DEBUG` event when the clock
//! selector settles on a source, and an `ERROR` event before panicking on a failed clock read.
//!
//! # Features
//!
//! - **`test-util`** - Enables [`ClockSelector::with_native_reader`],
//!   [`HighResolutionTickProvider::with_selector`] and [`ManualCounter`] to simulate hosts with
//!   or without a precise clock and to drive elapsed time by hand. **Only enable this in
//!   `dev-dependencies`.**

mod clock_selector;
mod counter;
mod error;
mod high_resolution;
mod pal;
mod provider;
mod stopwatch;
mod system_time_ext;

pub mod ticks;

pub use clock_selector::ClockSelector;
#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub use counter::ManualCounter;
pub use counter::{ElapsedCounter, InstantCounter};
pub use error::{Error, Result};
pub use high_resolution::HighResolutionTickProvider;
pub use provider::TickProvider;
pub use stopwatch::StopwatchTickProvider;
pub use system_time_ext::SystemTimeExt;

/// Returns whether the process-wide [`ClockSelector`] uses the precise native clock.
///
/// The first call probes the native clock; the answer never changes afterwards.
#[must_use]
pub fn is_high_precision() -> bool {
    ClockSelector::platform().is_high_precision()
}

/// Retrieves the current time in ticks from the process-wide [`ClockSelector`].
///
/// # Panics
///
/// Panics if the native clock passed the probe but fails on this read.
///
/// # Examples
///
/// ```
/// use tick_source::ticks;
///
/// let now = tick_source::utc_now_ticks();
/// assert!(now > ticks::UNIX_EPOCH_TICKS);
/// ```
#[must_use]
pub fn utc_now_ticks() -> i64 {
    ClockSelector::platform().utc_now_ticks()
}

/// Retrieves the current time from the process-wide [`ClockSelector`] as a [`SystemTime`][std::time::SystemTime].
///
/// # Panics
///
/// Panics if the native clock passed the probe but fails on this read.
#[must_use]
pub fn utc_now() -> std::time::SystemTime {
    ClockSelector::platform().utc_now()
}

/// Retrieves the current time from the process-wide [`ClockSelector`] as a Windows `FILETIME`
/// value, the count of 100-nanosecond intervals since 1601-01-01T00:00:00Z.
///
/// # Panics
///
/// Panics if the native clock passed the probe but fails on this read.
#[must_use]
pub fn utc_now_file_time() -> i64 {
    ClockSelector::platform().utc_now_file_time()
}
