//! Module defining the configuration of a benchmark run

use std::fmt;
use std::str::FromStr;

use crate::convert::{PRIMITIVE_FALLBACK, RECORD_FALLBACK};

/// Which pipeline is timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Generated strings are converted directly.
    Primitive,
    /// Generated strings are wrapped into items, round-tripped through XML and mapped to entities.
    Records,
}

/// Which part of a run the stopwatch covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingMode {
    /// Only the conversion pass; input is prepared before the clock starts.
    ParseOnly,
    /// Generation, materialization (for records) and the conversion pass.
    FullPipeline,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primitive" => Ok(Scenario::Primitive),
            "records" => Ok(Scenario::Records),
            other => Err(format!("unknown scenario: {other}")),
        }
    }
}

impl FromStr for TimingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parse-only" => Ok(TimingMode::ParseOnly),
            "full-pipeline" => Ok(TimingMode::FullPipeline),
            other => Err(format!("unknown timing mode: {other}")),
        }
    }
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingMode::ParseOnly => f.write_str("parse-only"),
            TimingMode::FullPipeline => f.write_str("full-pipeline"),
        }
    }
}

/// Parameters shared by every measurement of a sweep.
///
/// The two scenarios come with different defaults for the fallback and the timing window.
/// They are independent settings and can be overridden separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub scenario: Scenario,
    pub seed: u64,
    pub count: usize,
    pub fallback: i32,
    pub mode: TimingMode,
}

impl BenchConfig {
    pub const DEFAULT_SEED: u64 = 1;
    pub const DEFAULT_COUNT: usize = 50_000;

    pub fn primitive() -> Self {
        Self {
            scenario: Scenario::Primitive,
            seed: Self::DEFAULT_SEED,
            count: Self::DEFAULT_COUNT,
            fallback: PRIMITIVE_FALLBACK,
            mode: TimingMode::ParseOnly,
        }
    }

    pub fn records() -> Self {
        Self {
            scenario: Scenario::Records,
            seed: Self::DEFAULT_SEED,
            count: Self::DEFAULT_COUNT,
            fallback: RECORD_FALLBACK,
            mode: TimingMode::FullPipeline,
        }
    }

    pub fn for_scenario(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Primitive => Self::primitive(),
            Scenario::Records => Self::records(),
        }
    }
}
