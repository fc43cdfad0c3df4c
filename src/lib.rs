mod config;
mod convert;
mod domain;
mod error;
mod harness;
mod input;
mod output;
mod records;
mod telemetry;

pub use config::{BenchConfig, Scenario, TimingMode};
pub use convert::{
    Convert, PRIMITIVE_FALLBACK, RECORD_FALLBACK, StatusChecked, Strategy, UnwindGuarded,
    parse_or_raise,
};
pub use domain::{ErrorRate, GeneratedRecord, ItemEntity, MALFORMED_MARKER, Property, PropertyBag};
pub use error::Error;
pub use harness::{
    BenchmarkResult, Clock, MonotonicClock, SweepRow, Timing, measure, sweep, sweep_strategy, time,
};
pub use input::{generate, generate_with};
pub use output::{Report, ReportFormat, ReportRecord, StrategyRecord};
pub use records::{
    ITEM_CODE, ITEM_COST, ITEM_DESCRIPTION, ITEM_ID, from_record, materialize, read_document,
    to_record, try_from_record, write_document,
};
pub use telemetry::setup_logging;

/// Runs a full error-rate sweep for `config` and writes one report line per sweep point.
///
/// Both strategies are timed at every error rate from 0% to 90% in steps of 10%, on input
/// regenerated from `config.seed` for every measurement. Each row is written as soon as it is
/// measured, so a long sweep shows progress. A failed write stops the sweep.
///
/// # Example
///
/// ```no_run
/// use parse_strategy_bench::{BenchConfig, MonotonicClock, ReportFormat, run_sweep};
///
/// let mut clock = MonotonicClock::new();
/// run_sweep(&mut clock, &BenchConfig::primitive(), ReportFormat::Text, std::io::stdout()).unwrap();
/// ```
pub fn run_sweep(
    clock: &mut impl Clock,
    config: &BenchConfig,
    format: ReportFormat,
    writer: impl std::io::Write,
) -> Result<(), Error> {
    let mut report = Report::new(format, writer);
    sweep(clock, config, |row| report.write_row(&row))?;
    report.finish()
}

/// Like [`run_sweep`], but times a single strategy.
pub fn run_strategy_sweep(
    clock: &mut impl Clock,
    config: &BenchConfig,
    strategy: Strategy,
    format: ReportFormat,
    writer: impl std::io::Write,
) -> Result<(), Error> {
    let mut report = Report::new(format, writer);
    sweep_strategy(clock, config, strategy, |result| report.write_result(&result))?;
    report.finish()
}

/// Renders the XML document for `count` generated items, as used by the record scenario.
pub fn sample_document(seed: u64, count: usize, error_rate: ErrorRate) -> Result<String, Error> {
    let bags: Vec<PropertyBag> = generate(seed, count, error_rate)
        .iter()
        .map(to_record)
        .collect();
    write_document(&bags)
}
