//! Watch mode: re-render an image file whenever it changes on disk.
//!
//! Decoding runs on a background thread per change. Results come back over a
//! channel tagged with the session's [`LoadTicket`], so if the file changes
//! again while an older decode is still running, the older result is dropped
//! by [`Session::finish_load`] and never reaches the sink.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::ascii::ImageSampler;
use crate::error::{ConvertError, SinkError};
use crate::image_buffer::ImageBuffer;
use crate::session::{LoadTicket, Session};
use crate::sink::TextSink;
use crate::source;

/// How often the watched file's modification time is checked.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Global flag to track if Ctrl+C was received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Check if Ctrl+C was received.
pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
        log::info!("Received Ctrl+C, stopping watch");
    })
}

/// Tracks a file's modification time between polls.
#[derive(Debug)]
pub struct FileWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl FileWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when the file exists and its modification time differs
    /// from the previous poll. The first successful poll always reports a change.
    pub fn poll(&mut self) -> bool {
        match std::fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => {
                if self.last_modified == Some(modified) {
                    return false;
                }
                self.last_modified = Some(modified);
                true
            }
            Err(e) => {
                if self.last_modified.take().is_some() {
                    log::warn!("Lost track of {}: {}", self.path.display(), e);
                }
                false
            }
        }
    }
}

type LoadResult = (LoadTicket, Result<ImageBuffer, ConvertError>);

/// Drives a session from file changes and writes each fresh result to a sink.
pub struct WatchLoop<'a, S, K> {
    watcher: FileWatcher,
    session: &'a mut Session<S>,
    sink: &'a mut K,
    poll_interval: Duration,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl<'a, S: ImageSampler, K: TextSink> WatchLoop<'a, S, K> {
    pub fn new(path: impl Into<PathBuf>, session: &'a mut Session<S>, sink: &'a mut K) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            watcher: FileWatcher::new(path),
            session,
            sink,
            poll_interval: DEFAULT_POLL_INTERVAL,
            tx,
            rx,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Run one iteration: check the file, then wait up to one poll interval
    /// for decode results. Returns the number of results written to the sink.
    pub fn step(&mut self) -> Result<usize, SinkError> {
        if self.watcher.poll() {
            self.start_load();
        }

        let mut written = 0;
        match self.rx.recv_timeout(self.poll_interval) {
            Ok((ticket, result)) => written += self.apply(ticket, result)?,
            Err(RecvTimeoutError::Timeout) => {}
            // We hold a sender ourselves, so the channel cannot disconnect
            Err(RecvTimeoutError::Disconnected) => {}
        }
        while let Ok((ticket, result)) = self.rx.try_recv() {
            written += self.apply(ticket, result)?;
        }
        Ok(written)
    }

    /// Loop until `stop` returns true.
    pub fn run(&mut self, stop: impl Fn() -> bool) -> Result<(), SinkError> {
        log::info!("Watching {}", self.watcher.path().display());
        while !stop() {
            self.step()?;
        }
        Ok(())
    }

    fn start_load(&mut self) {
        let ticket = self.session.begin_load();
        let path = self.watcher.path().to_path_buf();
        let tx = self.tx.clone();
        log::debug!("Change detected, starting load {}", ticket.id());

        thread::spawn(move || {
            let result = source::load_file(&path);
            // Receiver gone means the loop has ended; nothing left to update
            let _ = tx.send((ticket, result));
        });
    }

    fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageBuffer, ConvertError>,
    ) -> Result<usize, SinkError> {
        if !self.session.finish_load(ticket, result) {
            return Ok(0);
        }
        match self.session.output() {
            Some(Ok(art)) => {
                self.sink.write_art(art)?;
                Ok(1)
            }
            Some(Err(e)) => {
                log::error!("{}", e);
                Ok(0)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::AsciiArt;
    use crate::ascii::RenderParams;
    use std::io::Cursor;

    #[derive(Default)]
    struct CollectSink {
        texts: Vec<String>,
    }

    impl TextSink for CollectSink {
        fn write_art(&mut self, art: &AsciiArt) -> Result<(), SinkError> {
            self.texts.push(art.to_text());
            Ok(())
        }
    }

    fn write_gray_png(path: &Path, v: u8) {
        let img = image::RgbaImage::from_pixel(20, 20, image::Rgba([v, v, v, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_file_watcher_first_poll_reports_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        write_gray_png(&path, 0);

        let mut watcher = FileWatcher::new(&path);
        assert!(watcher.poll());
        assert!(!watcher.poll());
    }

    #[test]
    fn test_file_watcher_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = FileWatcher::new(dir.path().join("nope.png"));
        assert!(!watcher.poll());
    }

    #[test]
    fn test_step_renders_on_first_sight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        write_gray_png(&path, 128);

        let mut session =
            Session::default().with_inputs(RenderParams::new(0.1, false), "@%#*+=-:. ", 5);
        let mut sink = CollectSink::default();
        {
            let mut watch = WatchLoop::new(&path, &mut session, &mut sink)
                .with_poll_interval(Duration::from_secs(5));
            assert_eq!(watch.step().unwrap(), 1);
        }
        assert_eq!(sink.texts, vec!["++\n".to_string()]);
    }

    #[test]
    fn test_step_without_change_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        write_gray_png(&path, 0);

        let mut session = Session::default();
        let mut sink = CollectSink::default();
        let mut watch = WatchLoop::new(&path, &mut session, &mut sink)
            .with_poll_interval(Duration::from_secs(5));
        assert_eq!(watch.step().unwrap(), 1);

        watch.poll_interval = Duration::from_millis(10);
        assert_eq!(watch.step().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        std::fs::write(&path, b"not an image").unwrap();

        let mut session = Session::default();
        let mut sink = CollectSink::default();
        {
            let mut watch = WatchLoop::new(&path, &mut session, &mut sink)
                .with_poll_interval(Duration::from_secs(5));
            assert_eq!(watch.step().unwrap(), 0);
        }
        assert!(sink.texts.is_empty());
        assert!(matches!(session.output(), Some(Err(ConvertError::InvalidImage(_)))));
    }

    #[test]
    fn test_run_stops_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::default();
        let mut sink = CollectSink::default();
        let mut watch = WatchLoop::new(dir.path().join("x.png"), &mut session, &mut sink);
        watch.run(|| true).unwrap();
        assert!(sink.texts.is_empty());
    }
}
