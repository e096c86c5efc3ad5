// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example demonstrates the basic usage of the tick providers.

use tick_source::{HighResolutionTickProvider, StopwatchTickProvider, TickProvider, ticks};

fn main() -> Result<(), tick_source::Error> {
    // Shows which clock the process-wide selector settled on.
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("High precision clock: {}", tick_source::is_high_precision());

    // Reads the wall clock on every call.
    let high_resolution = HighResolutionTickProvider::new();

    // Reads the wall clock once, then counts elapsed time monotonically.
    let stopwatch = StopwatchTickProvider::new();

    let high_resolution_ticks = high_resolution.ticks();
    let stopwatch_ticks = stopwatch.ticks();

    println!("High resolution ticks: {high_resolution_ticks}");
    println!("Stopwatch ticks:       {stopwatch_ticks}");

    // Ticks convert back to wall-clock time.
    let time = ticks::to_system_time(high_resolution_ticks)?;
    println!("As system time:        {time:?}");
    println!("As file time:          {}", ticks::to_file_time(high_resolution_ticks)?);

    Ok(())
}
