// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;
use std::sync::OnceLock;
use std::time::SystemTime;

use tracing::{Level, event};

use crate::{Error, Result, pal, ticks};

/// Reads the precise native clock, returning ticks or the platform error.
type NativeReader = fn() -> io::Result<i64>;

/// The process-wide selector, backed by the platform's precise native clock.
static PLATFORM: ClockSelector = ClockSelector::new(pal::precise_now_ticks);

/// Selects the most precise available source of wall-clock time and reads the current time from it.
///
/// On first use, the selector probes the precise native clock of the platform by reading it once
/// (`GetSystemTimePreciseAsFileTime` on Windows, `clock_gettime(CLOCK_REALTIME)` on Unix). If the read
/// succeeds, every later read goes to the native clock. If it fails, the selector permanently falls
/// back to [`SystemTime::now`]. The probe result is never recomputed for the lifetime of the selector,
/// and the probe failure is never surfaced to callers.
///
/// The time value itself is never cached; every read goes to the selected source.
///
/// Use [`ClockSelector::platform`] to access the process-wide selector. The crate-level
/// functions such as [`utc_now_ticks`][crate::utc_now_ticks] are shortcuts for it.
///
/// # Thread safety
///
/// All methods can be called from any number of threads concurrently. Concurrent first
/// callers wait for a single probe and all observe the same result.
///
/// # Examples
///
/// ```
/// use tick_source::ClockSelector;
///
/// let selector = ClockSelector::platform();
///
/// let ticks = selector.utc_now_ticks();
/// println!("high precision: {}, ticks: {ticks}", selector.is_high_precision());
/// ```
#[derive(Debug)]
pub struct ClockSelector {
    native: NativeReader,
    source: OnceLock<ClockSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockSource {
    Native,
    Standard,
}

impl ClockSelector {
    const fn new(native: NativeReader) -> Self {
        Self {
            native,
            source: OnceLock::new(),
        }
    }

    /// Returns the process-wide selector.
    #[must_use]
    pub fn platform() -> &'static Self {
        &PLATFORM
    }

    /// Creates a selector that probes and reads the provided function instead of the native clock.
    ///
    /// This allows simulating hosts where the precise clock is present, missing, or faulty.
    /// The reader returns the current time in ticks. An `Err` returned from the first call
    /// makes the selector fall back to the standard clock.
    ///
    /// Being `const`, the selector can be placed in a `static` and handed to
    /// [`HighResolutionTickProvider::with_selector`][crate::HighResolutionTickProvider::with_selector].
    #[cfg(any(feature = "test-util", test))]
    #[must_use]
    pub const fn with_native_reader(reader: fn() -> io::Result<i64>) -> Self {
        Self::new(reader)
    }

    /// Returns whether the precise native clock is in use.
    ///
    /// The first call on a selector probes the native clock. Every later call returns the same value.
    #[must_use]
    pub fn is_high_precision(&self) -> bool {
        self.source() == ClockSource::Native
    }

    /// Retrieves the current time in ticks from the selected source.
    ///
    /// The value is not monotonic. When the system clock is adjusted, the returned value may be
    /// smaller than a previously returned one.
    ///
    /// # Panics
    ///
    /// Panics if the native clock passed the probe but fails on this read. Use
    /// [`try_utc_now_ticks`][Self::try_utc_now_ticks] to handle the failure instead.
    #[must_use]
    pub fn utc_now_ticks(&self) -> i64 {
        expect_clock(self.try_utc_now_ticks())
    }

    /// Retrieves the current time in ticks from the selected source.
    ///
    /// # Errors
    ///
    /// Returns an error if the native clock passed the probe but fails on this read,
    /// or if the current time cannot be represented as ticks. The selector does not
    /// fall back to the standard clock after a failed read.
    pub fn try_utc_now_ticks(&self) -> Result<i64> {
        match self.source() {
            ClockSource::Native => (self.native)().map_err(Error::native),
            ClockSource::Standard => ticks::from_system_time(SystemTime::now()),
        }
    }

    /// Retrieves the current time from the selected source as a [`SystemTime`].
    ///
    /// # Panics
    ///
    /// Panics if the native clock passed the probe but fails on this read.
    #[must_use]
    pub fn utc_now(&self) -> SystemTime {
        match self.source() {
            ClockSource::Native => expect_clock(self.try_utc_now_ticks().and_then(ticks::to_system_time)),
            ClockSource::Standard => SystemTime::now(),
        }
    }

    /// Retrieves the current time from the selected source as a Windows `FILETIME` value.
    ///
    /// # Panics
    ///
    /// Panics if the native clock passed the probe but fails on this read.
    #[must_use]
    pub fn utc_now_file_time(&self) -> i64 {
        expect_clock(self.try_utc_now_ticks().and_then(ticks::to_file_time))
    }

    fn source(&self) -> ClockSource {
        *self.source.get_or_init(|| probe(self.native))
    }
}

fn probe(native: NativeReader) -> ClockSource {
    match native() {
        Ok(_) => {
            event!(Level::DEBUG, "using the precise system clock");
            ClockSource::Native
        }
        Err(error) => {
            event!(
                Level::DEBUG,
                %error,
                "precise system clock unavailable, falling back to the standard system clock"
            );
            ClockSource::Standard
        }
    }
}

/// Unwraps the result of a clock read. A failed read leaves the caller without a time value.
#[expect(
    clippy::panic,
    reason = "tick consumers have no error channel; a clock that stops working after a successful probe is unrecoverable"
)]
pub(crate) fn expect_clock<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            event!(Level::ERROR, %error, "system clock read failed");
            panic!("the system clock could not be read: {error}")
        }
    }
}
