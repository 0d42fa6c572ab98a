use std::io::{self, Write};

use neo::Outcome;

/// Write the confirmed line followed by a newline. A cancelled session
/// writes nothing.
pub(crate) fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome<'_>) -> io::Result<()> {
    match outcome {
        Outcome::Confirmed(line) => {
            writeln!(out, "{line}")?;
            out.flush()
        }
        Outcome::Cancelled => Ok(()),
    }
}
