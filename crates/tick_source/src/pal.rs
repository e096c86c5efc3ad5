// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Platform abstraction over the precise native "current UTC time" call.
//!
//! Every platform exposes a `precise_now_ticks()` function that reads the native clock and
//! converts the result into ticks. Any platform failure is reported as an [`std::io::Error`],
//! which never travels past the clock selector.

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::*;

#[cfg(not(any(windows, unix)))]
mod unsupported;
#[cfg(not(any(windows, unix)))]
pub use unsupported::*;
