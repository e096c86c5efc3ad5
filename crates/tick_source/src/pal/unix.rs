// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;
use std::mem::MaybeUninit;

use crate::ticks;

/// Reads the current time via `clock_gettime(CLOCK_REALTIME)`.
///
/// The call may fail at runtime, for example when a seccomp filter denies it.
// No mutation - messing with FFI results can result in unholy mess up to and including UB.
#[cfg_attr(test, mutants::skip)]
pub fn precise_now_ticks() -> io::Result<i64> {
    let mut spec: MaybeUninit<libc::timespec> = MaybeUninit::uninit();

    // SAFETY: Call clock_gettime with a valid clock id and a valid pointer.
    let return_code = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, spec.as_mut_ptr()) };

    if return_code != 0 {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: clock_gettime succeeded, so it initialized the structure.
    let spec = unsafe { spec.assume_init() };

    #[allow(clippy::useless_conversion, reason = "time_t is not i64 on every target")]
    let secs = i64::from(spec.tv_sec);
    let nanos = u32::try_from(spec.tv_nsec).map_err(io::Error::other)?;

    ticks::from_unix_parts(secs, nanos).map_err(io::Error::other)
}
