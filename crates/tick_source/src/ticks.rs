// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tick constants and conversions between ticks and other time representations.
//!
//! A tick is a 100-nanosecond interval. Tick values count the ticks elapsed since
//! 0001-01-01T00:00:00Z, which matches the tick convention used by .NET `DateTime`.
//! Tick values before that epoch are not representable.
//!
//! # Examples
//!
//! ```
//! use std::time::{Duration, SystemTime};
//!
//! use tick_source::ticks;
//!
//! let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1);
//! let value = ticks::from_system_time(time).unwrap();
//!
//! assert_eq!(value, ticks::UNIX_EPOCH_TICKS + ticks::TICKS_PER_SECOND);
//! assert_eq!(ticks::to_system_time(value).unwrap(), time);
//! ```

use std::time::{Duration, SystemTime};

use crate::{Error, Result};

/// The number of ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// The number of nanoseconds in one tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Ticks at 1970-01-01T00:00:00Z, the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks at 1601-01-01T00:00:00Z, the epoch of Windows `FILETIME` values.
pub const FILE_TIME_EPOCH_TICKS: i64 = 504_911_232_000_000_000;

/// The smallest representable tick value, 0001-01-01T00:00:00Z.
pub const MIN_TICKS: i64 = 0;

/// Converts a [`SystemTime`] into ticks.
///
/// Precision finer than one tick is truncated toward the earlier tick.
///
/// # Errors
///
/// Returns an error if the time is before 0001-01-01T00:00:00Z or too far in the future
/// to fit into an `i64` tick count.
pub fn from_system_time(time: SystemTime) -> Result<i64> {
    let since_unix_epoch = match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(elapsed) => nanos_as_i128(elapsed)?,
        Err(err) => nanos_as_i128(err.duration())?
            .checked_neg()
            .ok_or_else(|| Error::out_of_range("system time is too far in the past"))?,
    };

    from_unix_ticks(since_unix_epoch.div_euclid(i128::from(NANOS_PER_TICK)))
}

/// Converts the seconds and nanoseconds since the Unix epoch into ticks.
///
/// # Errors
///
/// Returns an error if `nanos` is not below one billion or the result is not a valid tick value.
pub fn from_unix_parts(secs: i64, nanos: u32) -> Result<i64> {
    if nanos >= 1_000_000_000 {
        return Err(Error::out_of_range(format!("{nanos} is not a valid nanosecond count")));
    }

    let unix_ticks = i128::from(secs)
        .checked_mul(i128::from(TICKS_PER_SECOND))
        .and_then(|ticks| ticks.checked_add(i128::from(nanos) / i128::from(NANOS_PER_TICK)))
        .ok_or_else(|| Error::out_of_range(format!("{secs}s since the Unix epoch cannot be represented as ticks")))?;

    from_unix_ticks(unix_ticks)
}

/// Converts ticks into a [`SystemTime`].
///
/// # Errors
///
/// Returns an error if `ticks` is negative or the resulting time cannot be represented
/// by [`SystemTime`] on this platform.
pub fn to_system_time(ticks: i64) -> Result<SystemTime> {
    ensure_valid(ticks)?;

    let unix_ticks = ticks
        .checked_sub(UNIX_EPOCH_TICKS)
        .ok_or_else(|| Error::out_of_range(format!("{ticks} ticks cannot be represented as a system time")))?;
    let offset = ticks_to_duration(unix_ticks.unsigned_abs());

    let time = if unix_ticks >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(offset)
    } else {
        SystemTime::UNIX_EPOCH.checked_sub(offset)
    };

    time.ok_or_else(|| Error::out_of_range(format!("{ticks} ticks cannot be represented as a system time")))
}

/// Converts ticks into a Windows `FILETIME` value, the count of 100-nanosecond
/// intervals since 1601-01-01T00:00:00Z.
///
/// # Errors
///
/// Returns an error if `ticks` is before 1601-01-01T00:00:00Z.
pub fn to_file_time(ticks: i64) -> Result<i64> {
    match ticks.checked_sub(FILE_TIME_EPOCH_TICKS) {
        Some(file_time) if file_time >= 0 => Ok(file_time),
        _ => Err(Error::out_of_range(format!(
            "{ticks} ticks are before the file time epoch (1601-01-01T00:00:00Z)"
        ))),
    }
}

/// Converts a Windows `FILETIME` value into ticks.
///
/// # Errors
///
/// Returns an error if `file_time` is negative or the result does not fit into an `i64`.
pub fn from_file_time(file_time: i64) -> Result<i64> {
    if file_time < 0 {
        return Err(Error::out_of_range(format!("{file_time} is not a valid file time")));
    }

    file_time
        .checked_add(FILE_TIME_EPOCH_TICKS)
        .ok_or_else(|| Error::out_of_range(format!("file time {file_time} cannot be represented as ticks")))
}

fn from_unix_ticks(unix_ticks: i128) -> Result<i64> {
    let ticks = unix_ticks
        .checked_add(i128::from(UNIX_EPOCH_TICKS))
        .and_then(|ticks| i64::try_from(ticks).ok())
        .ok_or_else(|| Error::out_of_range("time is too far in the future to be represented as ticks"))?;

    ensure_valid(ticks)?;

    Ok(ticks)
}

fn ensure_valid(ticks: i64) -> Result<()> {
    if ticks < MIN_TICKS {
        return Err(Error::out_of_range(format!(
            "{ticks} ticks are before the tick epoch (0001-01-01T00:00:00Z)"
        )));
    }

    Ok(())
}

fn nanos_as_i128(duration: Duration) -> Result<i128> {
    i128::try_from(duration.as_nanos()).map_err(|_overflow| Error::out_of_range("duration is too large"))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the remainder is below TICKS_PER_SECOND so the nanosecond count always fits into u32"
)]
fn ticks_to_duration(ticks: u64) -> Duration {
    let per_second = TICKS_PER_SECOND.unsigned_abs();
    let nanos_per_tick = NANOS_PER_TICK.unsigned_abs();

    Duration::new(ticks / per_second, ((ticks % per_second) * nanos_per_tick) as u32)
}
