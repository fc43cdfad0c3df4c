//! Module for timing the conversion strategies.

use std::hint::black_box;
use std::time::Duration;

use tracing::{debug, info};

use crate::{
    Error,
    config::{BenchConfig, Scenario, TimingMode},
    convert::{Convert, StatusChecked, Strategy, UnwindGuarded},
    domain::{ErrorRate, ItemEntity},
    input::generate,
    records::{from_record, materialize},
};

mod clock;

pub use clock::{Clock, MonotonicClock};


/// Both timing windows of a single run.
///
/// The parse-only window lies inside the full-pipeline window, so `parse_only <= full_pipeline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub full_pipeline: Duration,
    pub parse_only: Duration,
}

impl Timing {
    pub fn window(&self, mode: TimingMode) -> Duration {
        match mode {
            TimingMode::ParseOnly => self.parse_only,
            TimingMode::FullPipeline => self.full_pipeline,
        }
    }
}

/// Time taken by one strategy at one error rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub strategy: Strategy,
    pub error_rate: ErrorRate,
    pub elapsed: Duration,
}

/// Both strategies timed at the same error rate, on the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub error_rate: ErrorRate,
    pub exception: Duration,
    pub status: Duration,
}

impl SweepRow {
    /// `exception - status` in nanoseconds; negative when the exception strategy was faster.
    pub fn difference(&self) -> i128 {
        self.exception.as_nanos() as i128 - self.status.as_nanos() as i128
    }
}

/// Runs the configured pipeline once with `strategy` and reports both timing windows.
///
/// The input is regenerated from `config.seed` on every call, so every strategy sees the same
/// payloads for a given error rate.
pub fn measure(
    clock: &mut impl Clock,
    config: &BenchConfig,
    strategy: Strategy,
    error_rate: ErrorRate,
) -> Result<Timing, Error> {
    let timing = match strategy {
        Strategy::Exception => run(clock, config, &UnwindGuarded::new(config.fallback), error_rate)?,
        Strategy::Status => run(clock, config, &StatusChecked::new(config.fallback), error_rate)?,
    };
    debug!(
        %strategy,
        %error_rate,
        count = config.count,
        full_pipeline = ?timing.full_pipeline,
        parse_only = ?timing.parse_only,
        "measured"
    );
    Ok(timing)
}

/// Time taken by `strategy` at `error_rate`, using the configured timing window.
pub fn time(
    clock: &mut impl Clock,
    config: &BenchConfig,
    strategy: Strategy,
    error_rate: ErrorRate,
) -> Result<Duration, Error> {
    Ok(measure(clock, config, strategy, error_rate)?.window(config.mode))
}

/// Times both strategies at every sweep point (0% to 90% in steps of 10%) and passes each pair
/// to `on_row` as soon as it is available. The first error returned by `on_row` ends the sweep.
pub fn sweep(
    clock: &mut impl Clock,
    config: &BenchConfig,
    mut on_row: impl FnMut(SweepRow) -> Result<(), Error>,
) -> Result<(), Error> {
    info!(scenario = ?config.scenario, mode = %config.mode, count = config.count, "starting sweep");

    for error_rate in ErrorRate::sweep() {
        let exception = time(clock, config, Strategy::Exception, error_rate)?;
        let status = time(clock, config, Strategy::Status, error_rate)?;

        let row = SweepRow {
            error_rate,
            exception,
            status,
        };
        info!(%error_rate, ?exception, ?status, "sweep point done");
        on_row(row)?;
    }
    Ok(())
}

/// Times a single strategy at every sweep point, stopping at the first error from `on_result`.
pub fn sweep_strategy(
    clock: &mut impl Clock,
    config: &BenchConfig,
    strategy: Strategy,
    mut on_result: impl FnMut(BenchmarkResult) -> Result<(), Error>,
) -> Result<(), Error> {
    info!(%strategy, scenario = ?config.scenario, mode = %config.mode, "starting sweep");

    for error_rate in ErrorRate::sweep() {
        let elapsed = time(clock, config, strategy, error_rate)?;
        on_result(BenchmarkResult {
            strategy,
            error_rate,
            elapsed,
        })?;
    }
    Ok(())
}

fn run(
    clock: &mut impl Clock,
    config: &BenchConfig,
    converter: &impl Convert,
    error_rate: ErrorRate,
) -> Result<Timing, Error> {
    let start = clock.now();
    let records = generate(config.seed, config.count, error_rate);

    let (conversion_start, end) = match config.scenario {
        Scenario::Primitive => {
            let conversion_start = clock.now();
            let values: Vec<i32> = records
                .iter()
                .map(|r| converter.convert(r.payload()))
                .collect();
            let end = clock.now();
            black_box(values);
            (conversion_start, end)
        }
        Scenario::Records => {
            let bags = materialize(&records)?;
            let conversion_start = clock.now();
            let entities: Vec<ItemEntity> = bags
                .iter()
                .map(|bag| from_record(bag, converter))
                .collect();
            let end = clock.now();
            black_box(entities);
            (conversion_start, end)
        }
    };

    Ok(Timing {
        full_pipeline: end.saturating_sub(start),
        parse_only: end.saturating_sub(conversion_start),
    })
}
