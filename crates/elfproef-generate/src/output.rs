use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use elfproef_core::Bsn;

use crate::errors::GenerationError;
use crate::model::GenerationReport;

/// Write numbers to a file, one zero-padded 9-digit value per line.
///
/// Returns the number of bytes written.
pub fn write_numbers(path: &Path, numbers: &[Bsn]) -> Result<u64, std::io::Error> {
    let writer = BufWriter::new(File::create(path)?);
    let mut counting = CountingWriter::new(writer);
    write_lines(&mut counting, numbers)?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

/// Write numbers to an arbitrary sink, one per line.
pub fn write_lines(writer: &mut impl Write, numbers: &[Bsn]) -> Result<(), std::io::Error> {
    for number in numbers {
        writeln!(writer, "{number}")?;
    }
    Ok(())
}

/// Write the run report as pretty JSON.
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    std::fs::write(path, serde_json::to_vec_pretty(report)?)?;
    Ok(())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
