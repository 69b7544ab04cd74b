//! File backed recorder producing the angle per step table.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::motion_traits::{MotionSink, Pose};

/// Writes the trajectory to a plain text file: one header line with the
/// joint names, then one line per step with every angle printed to two
/// decimal places and followed by a single space.
///
/// Output is buffered; nothing is guaranteed on disk until [MotionSink::close]
/// has run. A failed write aborts the run (there is no retry), but rows
/// flushed before the failure stay durable.
pub struct DatRecorder {
    out: BufWriter<File>,
    path: PathBuf,
    rows: usize,
}

impl DatRecorder {
    /// Creates (or truncates) the output file. Failure to acquire the file
    /// is fatal and propagates to the caller.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(DatRecorder {
            out: BufWriter::new(file),
            path,
            rows: 0,
        })
    }

    /// Where the table is being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MotionSink for DatRecorder {
    fn write_header(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "{}", label)
    }

    fn write_row(&mut self, pose: &Pose) -> io::Result<()> {
        for angle in pose {
            write!(self.out, "{:.2} ", angle)?;
        }
        writeln!(self.out)?;
        self.rows += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        debug!("{} rows recorded to {}", self.rows, self.path.display());
        self.out.flush()
    }
}
