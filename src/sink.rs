//! Output sinks.
//!
//! A [`Sink`] is any byte writer plus two terminal capabilities: whether it
//! is an interactive terminal (checked once, when a logger is built) and how
//! many columns it currently has (queried on every emit so resizes are
//! picked up).

use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Destination for rendered log lines.
pub trait Sink: Write + Send {
    /// Whether the sink is a live terminal that renders escape sequences and
    /// honours carriage returns.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Current width in columns, if the sink can report one.
    fn columns(&self) -> Option<usize> {
        None
    }
}

#[cfg(unix)]
fn query_columns(fd: impl std::os::fd::AsFd) -> Option<usize> {
    terminal_size::terminal_size_of(fd).map(|(terminal_size::Width(w), _)| usize::from(w))
}

#[cfg(windows)]
fn query_columns(handle: impl std::os::windows::io::AsHandle) -> Option<usize> {
    terminal_size::terminal_size_of(handle).map(|(terminal_size::Width(w), _)| usize::from(w))
}

#[cfg(not(any(unix, windows)))]
fn query_columns<T>(_: T) -> Option<usize> {
    None
}

impl Sink for Stdout {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }

    fn columns(&self) -> Option<usize> {
        query_columns(self)
    }
}

impl Sink for Stderr {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }

    fn columns(&self) -> Option<usize> {
        query_columns(self)
    }
}

impl Sink for File {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }

    fn columns(&self) -> Option<usize> {
        query_columns(self)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn columns(&self) -> Option<usize> {
        (**self).columns()
    }
}

/// Wraps any writer as a non-interactive sink.
#[derive(Debug)]
pub struct PlainSink<W>(pub W);

impl<W> PlainSink<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Write for PlainSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<W: Write + Send> Sink for PlainSink<W> {}

/// In-memory sink that records everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and read the output through another. It can pose as a terminal of any
/// width, and can be told to fail writes.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Arc<Mutex<Vec<u8>>>,
    interactive: bool,
    columns: Arc<Mutex<Option<usize>>>,
    fail_writes: Arc<AtomicBool>,
}

impl CaptureSink {
    /// Interactive sink reporting `columns` columns.
    pub fn terminal(columns: usize) -> Self {
        Self {
            interactive: true,
            columns: Arc::new(Mutex::new(Some(columns))),
            ..Self::default()
        }
    }

    /// Non-interactive sink, like a file or a pipe.
    pub fn file() -> Self {
        Self::default()
    }

    /// Change the reported width, simulating a terminal resize.
    pub fn set_columns(&self, columns: Option<usize>) {
        *self.columns.lock() = columns;
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Everything written so far, clearing the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("capture sink: write failed"));
        }
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for CaptureSink {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn columns(&self) -> Option<usize> {
        *self.columns.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_clones_share_buffer() {
        let sink = CaptureSink::file();
        let mut writer = sink.clone();
        writer.write_all(b"hello").unwrap();
        assert_eq!(sink.contents(), "hello");
        assert_eq!(sink.take(), "hello");
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_capture_terminal_resize() {
        let sink = CaptureSink::terminal(80);
        assert!(sink.is_interactive());
        assert_eq!(sink.columns(), Some(80));
        sink.set_columns(Some(40));
        assert_eq!(sink.columns(), Some(40));
    }

    #[test]
    fn test_capture_failing_writes() {
        let sink = CaptureSink::file();
        sink.fail_writes(true);
        let mut writer = sink.clone();
        assert!(writer.write_all(b"x").is_err());
        sink.fail_writes(false);
        assert!(writer.write_all(b"x").is_ok());
        assert_eq!(sink.contents(), "x");
    }

    #[test]
    fn test_plain_sink_is_never_interactive() {
        let mut sink = PlainSink(Vec::new());
        assert!(!sink.is_interactive());
        assert_eq!(sink.columns(), None);

        sink.write_all(b"line\n").unwrap();
        assert_eq!(sink.into_inner(), b"line\n");
    }
}
