//! Smoke-test programs.
//!
//! The `smoke` binary prints a fixed greeting, the sum of a fixed vector and a
//! concatenated message. It reads no input and always exits successfully, so a
//! toolchain that builds and runs it is known to work end to end.

use std::io::{self, Write};

pub const LOG_TARGET: &str = "coderun-demos";

/// Summed by [`vector_sum`].
pub const NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Substituted into the last line of the report.
pub const MESSAGE: &str = "Run! Extension";

const GREETING: &str = "Hello from C++!";
const DESCRIPTION: &str = "Testing C++ compilation and execution.";

/// Sums the fixed vector in order.
pub fn vector_sum() -> i32 {
    let mut sum = 0;
    for num in NUMBERS.iter() {
        sum += num;
    }
    sum
}

/// `"Testing " + message + " - Success!"`.
pub fn banner(message: &str) -> String {
    let mut line = String::from("Testing ");
    line.push_str(message);
    line.push_str(" - Success!");
    line
}

/// Writes the four report lines to `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    writeln!(out, "{DESCRIPTION}")?;

    let sum = vector_sum();
    tracing::debug!(target: LOG_TARGET, numbers = ?NUMBERS, sum, "summed vector");
    writeln!(out, "Sum of vector: {sum}")?;

    writeln!(out, "{}", banner(MESSAGE))?;
    out.flush()
}
