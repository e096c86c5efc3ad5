// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::SystemTime;

use crate::Result;

/// Extension trait for [`SystemTime`] that converts it into ticks.
pub trait SystemTimeExt: sealed::Sealed {
    /// Returns the number of ticks elapsed between 0001-01-01T00:00:00Z and this time.
    ///
    /// This is a shortcut for [`ticks::from_system_time`][crate::ticks::from_system_time].
    ///
    /// # Errors
    ///
    /// Returns an error if the time cannot be represented as ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use tick_source::{SystemTimeExt, ticks};
    ///
    /// assert_eq!(SystemTime::UNIX_EPOCH.to_ticks().unwrap(), ticks::UNIX_EPOCH_TICKS);
    /// ```
    fn to_ticks(&self) -> Result<i64>;
}

impl SystemTimeExt for SystemTime {
    fn to_ticks(&self) -> Result<i64> {
        crate::ticks::from_system_time(*self)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for std::time::SystemTime {}
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ticks::{TICKS_PER_SECOND, UNIX_EPOCH_TICKS};

    #[test]
    fn to_ticks_ok() {
        assert_eq!(SystemTime::UNIX_EPOCH.to_ticks().unwrap(), UNIX_EPOCH_TICKS);

        assert_eq!(
            (SystemTime::UNIX_EPOCH + Duration::from_secs(3600)).to_ticks().unwrap(),
            UNIX_EPOCH_TICKS + 3600 * TICKS_PER_SECOND
        );
    }
}
