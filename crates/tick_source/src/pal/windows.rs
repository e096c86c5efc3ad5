// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;

use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::SystemInformation::GetSystemTimePreciseAsFileTime;

use crate::ticks;

/// Reads the current time via `GetSystemTimePreciseAsFileTime`.
// No mutation - messing with FFI results can result in unholy mess up to and including UB.
#[cfg_attr(test, mutants::skip)]
pub fn precise_now_ticks() -> io::Result<i64> {
    let mut file_time = FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    };

    // SAFETY: We are passing a valid pointer to a FILETIME we own. The call has no failure mode.
    unsafe { GetSystemTimePreciseAsFileTime(&raw mut file_time) };

    let value = (u64::from(file_time.dwHighDateTime) << 32) | u64::from(file_time.dwLowDateTime);
    let value = i64::try_from(value).map_err(io::Error::other)?;

    ticks::from_file_time(value).map_err(io::Error::other)
}
