//! Plain-text persistence of the timing log.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination of one session's timing log:
/// `<dir>/inferenceTiming_<model>_out<output_samples>_<format>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingLogFile {
    path: PathBuf,
}

impl TimingLogFile {
    pub fn new(
        dir: impl AsRef<Path>,
        model_name: &str,
        output_samples: usize,
        model_format: &str,
    ) -> Self {
        let file_name =
            format!("inferenceTiming_{model_name}_out{output_samples}_{model_format}.txt");
        Self {
            path: dir.as_ref().join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the file and write one duration per line.
    pub fn write(&self, entries: &[u64]) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for entry in entries {
            writeln!(out, "{entry}")?;
        }
        out.flush()
    }

    /// Parse a log written by [`write`](Self::write).
    pub fn read(path: impl AsRef<Path>) -> io::Result<Vec<u64>> {
        std::fs::read_to_string(path)?
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.trim()
                    .parse::<u64>()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            })
            .collect()
    }
}
