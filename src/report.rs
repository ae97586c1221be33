//! User-facing rendering of a check

use std::io::{self, Write};

use crate::version::checker::{Outcome, SourceReader, check_versions};

/// Write the report for `outcome` to `out`
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Consistent(version) => {
            writeln!(out, "Version {version} is consistent across files.")
        }
        Outcome::Mismatch(versions) => {
            writeln!(out, "Version mismatch detected:")?;
            for (source, version) in versions.iter() {
                writeln!(out, "  {source}: {version}")?;
            }
            Ok(())
        }
    }
}

/// Run the check against `reader`, write the report and return the exit code.
///
/// The report goes to `out`; an extraction failure goes to `err` instead.
pub fn run<R, O, E>(reader: &R, out: &mut O, err: &mut E) -> io::Result<u8>
where
    R: SourceReader + ?Sized,
    O: Write,
    E: Write,
{
    match check_versions(reader) {
        Ok(outcome) => {
            write_outcome(out, &outcome)?;
            Ok(outcome.exit_code())
        }
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(1)
        }
    }
}
