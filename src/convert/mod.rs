//! Module with the two string-to-integer conversion strategies under comparison.
//!
//! Both strategies turn a malformed input into the same configured fallback. They differ only in
//! how the failure travels from the parser back to the caller:
//!
//! * [`UnwindGuarded`] raises the parse error as a panic and recovers it with `catch_unwind`,
//!   the closest Rust analogue to throwing and catching an exception.
//! * [`StatusChecked`] inspects the `Result` returned by the parser and branches on it.

use std::any::Any;
use std::fmt;
use std::num::ParseIntError;
use std::panic::{self, AssertUnwindSafe};


/// Fallback used by the plain parsing benchmark.
pub const PRIMITIVE_FALLBACK: i32 = -1;
/// Fallback used by the record materialization benchmark.
pub const RECORD_FALLBACK: i32 = 0;

/// Converts a string to an integer, never failing: malformed input maps to a fallback value.
pub trait Convert {
    fn convert(&self, input: &str) -> i32;

    fn fallback(&self) -> i32;
}

/// Exception-style conversion: the failure is signalled by unwinding and caught at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwindGuarded {
    fallback: i32,
}

impl UnwindGuarded {
    pub fn new(fallback: i32) -> Self {
        Self { fallback }
    }
}

impl Convert for UnwindGuarded {
    fn convert(&self, input: &str) -> i32 {
        match panic::catch_unwind(AssertUnwindSafe(|| parse_or_raise(input))) {
            Ok(value) => value,
            Err(payload) => recover_parse_failure(payload, self.fallback),
        }
    }

    fn fallback(&self) -> i32 {
        self.fallback
    }
}

/// Strict parse that raises the `ParseIntError` as a panic payload on malformed input.
///
/// `resume_unwind` does not run the panic hook, so nothing is printed per failure.
pub fn parse_or_raise(input: &str) -> i32 {
    match input.parse::<i32>() {
        Ok(value) => value,
        Err(err) => panic::resume_unwind(Box::new(err)),
    }
}

// Only parse failures are caught; any other panic keeps unwinding.
fn recover_parse_failure(payload: Box<dyn Any + Send>, fallback: i32) -> i32 {
    match payload.downcast::<ParseIntError>() {
        Ok(_) => fallback,
        Err(other) => panic::resume_unwind(other),
    }
}

/// Status-return conversion: the parse outcome is checked and branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChecked {
    fallback: i32,
}

impl StatusChecked {
    pub fn new(fallback: i32) -> Self {
        Self { fallback }
    }
}

impl Convert for StatusChecked {
    fn convert(&self, input: &str) -> i32 {
        match input.parse::<i32>() {
            Ok(value) => value,
            Err(_) => self.fallback,
        }
    }

    fn fallback(&self) -> i32 {
        self.fallback
    }
}

/// Label for the two conversion strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exception,
    Status,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Exception, Strategy::Status];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Exception => "exception",
            Strategy::Status => "status",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exception" => Ok(Strategy::Exception),
            "status" => Ok(Strategy::Status),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}
