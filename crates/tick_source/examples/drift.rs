// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Prints how far the high resolution provider, the stopwatch provider and the standard
//! system clock are apart, once per second for 30 seconds.

use std::thread::sleep;
use std::time::{Duration, Instant, SystemTime};

use tick_source::{HighResolutionTickProvider, StopwatchTickProvider, SystemTimeExt, TickProvider, ticks};

const WINDOW: Duration = Duration::from_secs(30);

#[expect(clippy::cast_precision_loss, reason = "differences are small, display only")]
fn millis(value: i64) -> f64 {
    value as f64 / (ticks::TICKS_PER_SECOND as f64 / 1000.0)
}

fn main() -> Result<(), tick_source::Error> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let high_resolution = HighResolutionTickProvider::new();
    let stopwatch = StopwatchTickProvider::new();

    // warmup
    for _ in 0..10 {
        _ = stopwatch.ticks();
        _ = high_resolution.ticks();
    }

    let started = Instant::now();

    while started.elapsed() < WINDOW {
        let standard = SystemTime::now().to_ticks()?;
        let high_resolution_ticks = high_resolution.ticks();
        let stopwatch_ticks = stopwatch.ticks();

        println!(
            "{:05} Diff: HR-SW {:.3} ms, HR-D {:.3} ms, SW-D {:.3} ms",
            started.elapsed().as_millis(),
            millis(high_resolution_ticks - stopwatch_ticks),
            millis(high_resolution_ticks - standard),
            millis(stopwatch_ticks - standard),
        );

        sleep(Duration::from_secs(1));
    }

    Ok(())
}
