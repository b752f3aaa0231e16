//! Output sinks for rendered art.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::art::AsciiArt;
use crate::error::SinkError;

/// File name used when saving without an explicit path.
pub const DEFAULT_OUTPUT_FILE: &str = "ascii-art.txt";

/// Anything that can persist or display a finished rendering.
pub trait TextSink {
    fn write_art(&mut self, art: &AsciiArt) -> Result<(), SinkError>;
}

impl<T: TextSink + ?Sized> TextSink for Box<T> {
    fn write_art(&mut self, art: &AsciiArt) -> Result<(), SinkError> {
        (**self).write_art(art)
    }
}

/// Writes the plain-text art to a file, replacing any previous contents.
///
/// No header or metadata is added; the file is exactly `art.to_text()`.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl TextSink for FileSink {
    fn write_art(&mut self, art: &AsciiArt) -> Result<(), SinkError> {
        std::fs::write(&self.path, art.to_text()).map_err(|e| SinkError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        log::info!(
            "Wrote {}x{} art to {}",
            art.width(),
            art.height(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes art to any `io::Write`, e.g. stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextSink for WriterSink<W> {
    fn write_art(&mut self, art: &AsciiArt) -> Result<(), SinkError> {
        self.writer.write_all(art.to_text().as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
