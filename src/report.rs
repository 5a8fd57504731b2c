use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::config::OutputPaths;
use crate::error::Result;
use crate::session::{Session, StrategyTiming};

/// Writes `arr` on a single line as `[a, b, c]`.
pub fn write_array<W: Write, T: Debug>(out: &mut W, arr: &[T]) -> Result<()> {
    writeln!(out, "{:?}", arr)?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, size: usize, timings: &[StrategyTiming]) -> Result<()> {
    writeln!(out, "Array Size: {}", size)?;
    for timing in timings {
        writeln!(out, "{} : PT{}S", timing.strategy, timing.elapsed.as_secs_f64())?;
    }
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Writes the unsorted list, the timing report and the sorted list to their files.
pub fn write_outputs(paths: &OutputPaths, session: &Session) -> Result<()> {
    let mut unsorted = create(&paths.unsorted)?;
    write_array(&mut unsorted, &session.unsorted)?;
    unsorted.flush()?;

    let mut report = create(&paths.report)?;
    write_report(&mut report, session.sorted.len(), &session.timings)?;
    report.flush()?;

    let mut sorted = create(&paths.sorted)?;
    write_array(&mut sorted, &session.sorted)?;
    sorted.flush()?;

    info!(
        "Wrote {}, {} and {}",
        paths.unsorted.display(),
        paths.report.display(),
        paths.sorted.display()
    );
    Ok(())
}
