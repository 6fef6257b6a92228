//! The unbounded loop that feeds every integer through the primality test.

use std::io;

use primeburn_sequence::Ascending;

use crate::report::Report;

/// First integer submitted to the primality test.
pub const FIRST_CANDIDATE: i64 = 2;

/// Writes one [`Report`] line per candidate into `out`, without bound.
///
/// Candidates ascend by exactly 1 from [`FIRST_CANDIDATE`]. Occupying the
/// CPU this way is the program's purpose: the loop stops only when a write
/// fails (the error is propagated untouched) or the process is killed.
pub fn run(out: &mut dyn io::Write) -> io::Result<()> {
    for candidate in Ascending::from(FIRST_CANDIDATE) {
        writeln!(out, "{}", Report::from(candidate))?;
    }

    Ok(())
}
