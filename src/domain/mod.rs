//! Module for the types shared by the generator, the converters and the harness.

use std::fmt;

use crate::Error;

mod item;

pub use item::{ItemEntity, Property, PropertyBag};

/// Marker prepended to a payload to make it malformed.
pub const MALFORMED_MARKER: char = 'X';

/// Probability that a generated payload is deliberately malformed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ErrorRate(f64);

impl ErrorRate {
    pub const NONE: ErrorRate = ErrorRate(0.0);
    pub const ALL: ErrorRate = ErrorRate(1.0);

    pub fn new(rate: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::InvalidErrorRate(rate));
        }
        Ok(Self(rate))
    }

    /// The ten sweep points `0.0, 0.1, ..., 0.9`.
    pub fn sweep() -> impl Iterator<Item = ErrorRate> {
        (0..10u8).map(|step| ErrorRate(f64::from(step) / 10.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for ErrorRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} %", self.percent())
    }
}

/// One generated input: its position and the raw numeric payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    index: usize,
    payload: String,
}

impl GeneratedRecord {
    pub(crate) fn new(index: usize, payload: String) -> Self {
        Self { index, payload }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn is_malformed(&self) -> bool {
        self.payload.starts_with(MALFORMED_MARKER)
    }
}
