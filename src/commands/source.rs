//! Line source: opens the movie file and yields its lines
//!
//! The file handle lives inside [`LineSource`] and is closed when the
//! source is dropped, whichever way the run ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use movierank_core::error::{MovieError, Result};

/// Blocking iterator over the lines of an input file.
///
/// Yields nothing further once a read error occurs or the interrupt flag
/// is raised; call [`LineSource::finish`] afterwards to surface either.
pub struct LineSource<R> {
    lines: Lines<R>,
    origin: String,
    interrupted: Arc<AtomicBool>,
    error: Option<io::Error>,
}

/// Open `path` for reading, mapping a missing file to [`MovieError::FileNotFound`]
pub fn open_line_source(
    path: &Path,
    interrupted: Arc<AtomicBool>,
) -> Result<LineSource<BufReader<File>>> {
    if !path.exists() {
        return Err(MovieError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(MovieError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MovieError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => MovieError::io_operation("open", path.display(), e),
    })?;

    tracing::debug!(path = %path.display(), "opened movie file");
    Ok(LineSource::new(
        BufReader::new(file),
        path.display().to_string(),
        interrupted,
    ))
}

impl<R: BufRead> LineSource<R> {
    /// `origin` names the input in read errors
    pub fn new(reader: R, origin: impl Into<String>, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            lines: reader.lines(),
            origin: origin.into(),
            interrupted,
            error: None,
        }
    }

    /// Report how the stream ended: read error first, then interruption
    pub fn finish(self) -> Result<()> {
        if let Some(e) = self.error {
            return Err(MovieError::io_operation("read", &self.origin, e));
        }
        if self.interrupted.load(Ordering::SeqCst) {
            return Err(MovieError::Interrupted);
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() || self.interrupted.load(Ordering::SeqCst) {
            return None;
        }
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!(error = %e, "stopping at unreadable line");
                self.error = Some(e);
                None
            }
        }
    }
}
