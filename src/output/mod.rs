//! Module rendering benchmark results for humans (text table) or tools (CSV).

use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::{
    Error,
    harness::{BenchmarkResult, SweepRow},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// One sweep row flattened into plain numbers.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ReportRecord {
    pub failure_rate_pct: u32,
    pub exception_ns: u64,
    pub status_ns: u64,
    pub difference_ns: i64,
}

impl From<&SweepRow> for ReportRecord {
    fn from(row: &SweepRow) -> Self {
        Self {
            failure_rate_pct: row.error_rate.percent().round() as u32,
            exception_ns: nanos(row.exception),
            status_ns: nanos(row.status),
            difference_ns: row.difference().clamp(i64::MIN.into(), i64::MAX.into()) as i64,
        }
    }
}

/// Single-strategy result flattened into plain numbers.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StrategyRecord {
    pub strategy: &'static str,
    pub failure_rate_pct: u32,
    pub elapsed_ns: u64,
}

impl From<&BenchmarkResult> for StrategyRecord {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            strategy: result.strategy.label(),
            failure_rate_pct: result.error_rate.percent().round() as u32,
            elapsed_ns: nanos(result.elapsed),
        }
    }
}

/// Writes results one line at a time, header first. Every line is flushed as it is written.
pub enum Report<W: Write> {
    Text { writer: W, header_written: bool },
    Csv(csv::Writer<W>),
}

impl<W: Write> Report<W> {
    pub fn new(format: ReportFormat, writer: W) -> Self {
        match format {
            ReportFormat::Text => Report::Text {
                writer,
                header_written: false,
            },
            ReportFormat::Csv => Report::Csv(csv::Writer::from_writer(writer)),
        }
    }

    /// Writes a paired row: error rate, exception time, status time, difference.
    pub fn write_row(&mut self, row: &SweepRow) -> Result<(), Error> {
        match self {
            Report::Text {
                writer,
                header_written,
            } => {
                if !*header_written {
                    writeln!(
                        writer,
                        "{:<12} {:>16} {:>16} {:>16}",
                        "FailureRate", "Exception", "Status", "Difference"
                    )?;
                    *header_written = true;
                }
                writeln!(
                    writer,
                    "{:<12} {:>16} {:>16} {:>16}",
                    row.error_rate.to_string(),
                    format!("{:?}", row.exception),
                    format!("{:?}", row.status),
                    format_signed_nanos(row.difference()),
                )?;
            }
            Report::Csv(wtr) => {
                wtr.serialize(ReportRecord::from(row))?;
                wtr.flush()?;
            }
        }
        Ok(())
    }

    /// Writes a single-strategy result: error rate and elapsed time.
    pub fn write_result(&mut self, result: &BenchmarkResult) -> Result<(), Error> {
        match self {
            Report::Text {
                writer,
                header_written,
            } => {
                if !*header_written {
                    writeln!(writer, "{:<12} {:>16}", "FailureRate", "ExecutionTime")?;
                    *header_written = true;
                }
                writeln!(
                    writer,
                    "{:<12} {:>16}",
                    result.error_rate.to_string(),
                    format!("{:?}", result.elapsed),
                )?;
            }
            Report::Csv(wtr) => {
                wtr.serialize(StrategyRecord::from(result))?;
                wtr.flush()?;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Result<(), Error> {
        match self {
            Report::Text { mut writer, .. } => writer.flush()?,
            Report::Csv(mut wtr) => wtr.flush()?,
        }
        Ok(())
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

fn format_signed_nanos(nanos: i128) -> String {
    let magnitude = Duration::from_nanos(u64::try_from(nanos.unsigned_abs()).unwrap_or(u64::MAX));
    if nanos < 0 {
        format!("-{magnitude:?}")
    } else {
        format!("{magnitude:?}")
    }
}
