//! Named self-tests and the runner that reports them.
//!
//! A suite is an explicit list of [`SelfTest`] descriptors built by the
//! caller and handed to [`run`]. Each test reports an [`Outcome`]; a test that
//! panics is reported as [`Outcome::Unexpected`] and does not stop the run.

use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use libc::c_int;

/// Result of a single self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Unexpected,
}

impl Outcome {
    /// Label printed in front of the test name.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed => "FAILED",
            Outcome::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

/// C-style status codes: `1` passed, `0` failed, anything else unexpected.
impl From<c_int> for Outcome {
    fn from(code: c_int) -> Self {
        match code {
            1 => Outcome::Passed,
            0 => Outcome::Failed,
            _ => Outcome::Unexpected,
        }
    }
}

/// A named zero-argument test.
#[derive(Clone, Copy)]
pub struct SelfTest {
    name: &'static str,
    run: fn() -> Outcome,
}

impl SelfTest {
    pub const fn new(name: &'static str, run: fn() -> Outcome) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the test, mapping a panic to [`Outcome::Unexpected`].
    pub fn execute(&self) -> Outcome {
        panic::catch_unwind(AssertUnwindSafe(self.run)).unwrap_or(Outcome::Unexpected)
    }
}

impl fmt::Debug for SelfTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfTest").field("name", &self.name).finish()
    }
}

/// Runs `tests` in order, writing `<LABEL>: <name>` per test to `out`.
pub fn run<W: Write>(tests: &[SelfTest], out: &mut W) -> io::Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(tests.len());
    for test in tests {
        let outcome = test.execute();
        writeln!(out, "{}: {}", outcome, test.name())?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
