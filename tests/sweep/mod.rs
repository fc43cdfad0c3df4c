//! End-to-end sweeps written to an in-memory report.

use std::io::{self, Write};
use std::time::Duration;

use claims::assert_matches;
use parse_strategy_bench::{
    BenchConfig, Clock, Error, MonotonicClock, ReportFormat, Scenario, Strategy, TimingMode,
    run_strategy_sweep, run_sweep,
};

/// A report sink whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[derive(Default)]
struct CountingClock {
    reads: usize,
}

impl Clock for CountingClock {
    fn now(&mut self) -> Duration {
        self.reads += 1;
        Duration::from_micros(self.reads as u64)
    }
}

fn small(scenario: Scenario) -> BenchConfig {
    BenchConfig {
        count: 100,
        ..BenchConfig::for_scenario(scenario)
    }
}

fn csv_rows(output: &[u8]) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(output)
        .records()
        .collect::<Result<_, _>>()
        .expect("report should be valid CSV")
}

#[test]
fn csv_sweep_reports_every_error_rate() {
    for scenario in [Scenario::Primitive, Scenario::Records] {
        let mut out = Vec::new();
        run_sweep(
            &mut MonotonicClock::new(),
            &small(scenario),
            ReportFormat::Csv,
            &mut out,
        )
        .unwrap();

        let rows = csv_rows(&out);
        assert_eq!(rows.len(), 10);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0].parse::<u32>().unwrap(), i as u32 * 10);
            let exception: i64 = row[1].parse().unwrap();
            let status: i64 = row[2].parse().unwrap();
            let difference: i64 = row[3].parse().unwrap();
            assert_eq!(exception - status, difference);
        }
    }
}

#[test]
fn text_sweep_prints_header_and_ten_lines() {
    let mut out = Vec::new();
    let config = BenchConfig {
        mode: TimingMode::FullPipeline,
        ..small(Scenario::Primitive)
    };

    run_sweep(&mut MonotonicClock::new(), &config, ReportFormat::Text, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("FailureRate"));
    assert!(lines[1].starts_with("0.00 %"));
    assert!(lines[10].starts_with("90.00 %"));
}

#[test]
fn single_strategy_sweep_labels_its_rows() {
    let mut out = Vec::new();

    run_strategy_sweep(
        &mut MonotonicClock::new(),
        &small(Scenario::Records),
        Strategy::Exception,
        ReportFormat::Csv,
        &mut out,
    )
    .unwrap();

    let rows = csv_rows(&out);
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| &r[0] == "exception"));
}

#[test]
fn sweep_stops_measuring_once_the_report_cannot_be_written() {
    let config = BenchConfig {
        count: 10,
        ..BenchConfig::primitive()
    };

    for format in [ReportFormat::Text, ReportFormat::Csv] {
        let mut clock = CountingClock::default();

        let result = run_sweep(&mut clock, &config, format, ClosedPipe);

        assert_matches!(result, Err(Error::Io(_)));
        // only the first sweep point is measured: two strategies, three reads each
        assert_eq!(clock.reads, 6, "{format:?}");
    }
}

#[test]
fn strategy_sweep_stops_measuring_once_the_report_cannot_be_written() {
    let config = BenchConfig {
        count: 10,
        ..BenchConfig::records()
    };

    for format in [ReportFormat::Text, ReportFormat::Csv] {
        let mut clock = CountingClock::default();

        let result = run_strategy_sweep(&mut clock, &config, Strategy::Status, format, ClosedPipe);

        assert_matches!(result, Err(Error::Io(_)));
        assert_eq!(clock.reads, 3, "{format:?}");
    }
}
