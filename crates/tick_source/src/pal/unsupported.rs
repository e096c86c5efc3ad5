// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io;

/// There is no precise native clock on this platform; the standard clock is always used.
pub fn precise_now_ticks() -> io::Result<i64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no precise system clock is available on this platform",
    ))
}
