// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Timing accuracy tests for the tick providers against real elapsed time.
//!
//! The long-running variants are ignored by default. Run them with `cargo test -- --ignored`.

#![cfg(not(miri))] // The logic we call talks to the real OS, which Miri cannot do.
#![allow(clippy::arithmetic_side_effects, reason = "no need to be strict in tests")]

use std::thread::{self, sleep};
use std::time::{Duration, Instant};

use tick_source::ticks::TICKS_PER_SECOND;
use tick_source::{HighResolutionTickProvider, StopwatchTickProvider, TickProvider};

/// Coarse wall clocks (e.g. the standard clock on older Windows) only move every ~16ms.
const WALL_CLOCK_RESOLUTION: i64 = TICKS_PER_SECOND / 50;

fn to_ticks(duration: Duration) -> i64 {
    i64::try_from(duration.as_nanos() / 100).unwrap()
}

fn measure(provider: &impl TickProvider, duration: Duration) -> i64 {
    let start = provider.ticks();
    sleep(duration);
    provider.ticks() - start
}

fn assert_within_short_sleep_band(measured: i64, duration: Duration) {
    let expected = to_ticks(duration);

    assert!(
        measured >= expected - WALL_CLOCK_RESOLUTION,
        "measured {measured} ticks, expected at least {expected}"
    );
    assert!(
        measured < 2 * expected,
        "measured {measured} ticks, expected less than {}",
        2 * expected
    );
}

#[test]
fn high_resolution_keeps_accurate_time() {
    let duration = Duration::from_millis(250);
    let provider = HighResolutionTickProvider::new();

    assert_within_short_sleep_band(measure(&provider, duration), duration);
}

#[test]
fn stopwatch_keeps_accurate_time() {
    let duration = Duration::from_millis(250);
    let provider = StopwatchTickProvider::new();

    let measured = measure(&provider, duration);

    // The counter is monotonic, so the sleep is never under-reported beyond rounding.
    assert!(measured >= to_ticks(duration) - 1, "{measured}");
    assert_within_short_sleep_band(measured, duration);
}

#[test]
fn providers_do_not_drift_apart() {
    assert_no_drift(Duration::from_secs(2), Duration::from_millis(100));
}

#[test]
#[ignore = "takes 30 seconds"]
fn providers_do_not_drift_apart_over_long_window() {
    assert_no_drift(Duration::from_secs(30), Duration::from_secs(1));
}

fn assert_no_drift(window: Duration, step: Duration) {
    let high_resolution = HighResolutionTickProvider::new();
    let stopwatch = StopwatchTickProvider::new();

    // warmup
    for _ in 0..10 {
        _ = stopwatch.ticks();
        _ = high_resolution.ticks();
    }

    let initial_offset = high_resolution.ticks() - stopwatch.ticks();
    let started = Instant::now();

    while started.elapsed() < window {
        sleep(step);

        let offset = high_resolution.ticks() - stopwatch.ticks();
        let elapsed = to_ticks(started.elapsed());

        // A constant offset from construction is fine. Growth must stay bounded by a small
        // fraction of the elapsed time (clock slewing) plus the wall clock resolution.
        let drift = (offset - initial_offset).abs();
        let allowed = WALL_CLOCK_RESOLUTION + elapsed / 1000;

        assert!(
            drift <= allowed,
            "drifted {drift} ticks after {elapsed} ticks, allowed {allowed}"
        );
    }
}

#[test]
fn repeated_short_intervals_do_not_compound_error() {
    const ITERATIONS: usize = 10;
    let duration = Duration::from_secs(1);
    let interval = duration / u32::try_from(ITERATIONS).unwrap();

    let high_resolution = HighResolutionTickProvider::new();
    let stopwatch = StopwatchTickProvider::new();

    let run = |provider: &dyn TickProvider| {
        let first = provider.ticks();
        let measurements: Vec<i64> = (0..ITERATIONS).map(|_| measure(&provider, interval)).collect();
        (measurements, provider.ticks() - first)
    };

    let (high_resolution_run, stopwatch_run) = thread::scope(|scope| {
        let high_resolution_handle = scope.spawn(|| run(&high_resolution));
        let stopwatch_handle = scope.spawn(|| run(&stopwatch));

        (high_resolution_handle.join().unwrap(), stopwatch_handle.join().unwrap())
    });

    for (measurements, total) in [high_resolution_run, stopwatch_run] {
        for measured in measurements {
            assert_within_short_sleep_band(measured, interval);
        }

        // The sum of per-interval errors stays in the same band as measuring the whole duration.
        assert_within_short_sleep_band(total, duration);
    }
}

#[test]
#[ignore = "takes one minute"]
fn high_resolution_accurate_over_one_minute() {
    let duration = Duration::from_secs(60);
    let provider = HighResolutionTickProvider::new();
    let started = Instant::now();

    let measured = provider.ticks();
    sleep(duration);
    let measured = provider.ticks() - measured;

    // Compare against the monotonic clock instead of the requested sleep, which can overshoot.
    let actual = to_ticks(started.elapsed());
    let allowed = to_ticks(duration) / 10_000; // 0.01%

    assert!(
        (measured - actual).abs() < allowed + WALL_CLOCK_RESOLUTION,
        "measured {measured} ticks, actual {actual}, allowed {allowed}"
    );
}

#[test]
#[ignore = "takes one minute"]
fn stopwatch_providers_do_not_lag() {
    let duration = Duration::from_secs(60);

    let start = StopwatchTickProvider::new();
    sleep(duration);
    let end = StopwatchTickProvider::new();

    // Both read at the same moment: the older provider must not lag behind the fresh anchor.
    let lag = (end.ticks() - start.ticks()).abs();
    let allowed = to_ticks(duration) / 10_000; // 0.01%

    assert!(lag < allowed + WALL_CLOCK_RESOLUTION, "lagged {lag} ticks, allowed {allowed}");
}
