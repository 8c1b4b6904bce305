//! Leveled logger writing to a single sink.
//!
//! A [`Logger`] renders each message according to the kind of sink it
//! writes to:
//!
//! - **Interactive terminal**: short timestamp, colors, lines fit to the
//!   current terminal width, and progress lines that end in `\r` so the next
//!   line overwrites them in place.
//! - **File or pipe**: dated timestamp, a `|INF|`-style level tag, no colors,
//!   no width limit, and progress lines dropped entirely.
//!
//! All mutable state lives behind one lock held for the whole emit, so lines
//! from concurrent threads never interleave and the progress-overwrite
//! bookkeeping always matches what is on screen.

mod emit;

use crate::clock::{Clock, SystemClock};
use crate::sink::Sink;
use crate::styles::StyleTable;
use par_log_config::{ConfigError, LogLevel, LoggerConfig};
use parking_lot::Mutex;
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// State read and written by every emit.
struct State {
    sink: Box<dyn Sink>,
    /// Display width of the progress line currently on screen (0 = none)
    last_progress_width: usize,
    /// When the last progress update was accepted
    last_progress_at: Option<Instant>,
}

pub struct Logger {
    min_level: LogLevel,
    time_format: String,
    styles: StyleTable,
    interactive: bool,
    strip_messages: bool,
    trim_marker: String,
    progress_interval: Option<Duration>,
    clock: Box<dyn Clock>,
    state: Mutex<State>,
}

impl Logger {
    /// Logger with default settings.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::build(Box::new(sink), &LoggerConfig::default())
    }

    /// Logger configured from `config`, which is validated first.
    pub fn with_config(
        sink: impl Sink + 'static,
        config: &LoggerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(Box::new(sink), config))
    }

    /// Logger writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Logger writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn build(sink: Box<dyn Sink>, config: &LoggerConfig) -> Self {
        let interactive = sink.is_interactive();
        let styles = if interactive {
            StyleTable::from_config(config)
        } else {
            StyleTable::plain()
        };

        Self {
            min_level: config.min_level,
            time_format: config.effective_time_format(interactive).to_string(),
            styles,
            interactive,
            strip_messages: config.strip_messages,
            trim_marker: config.trim_marker.clone(),
            progress_interval: config.progress_interval(),
            clock: Box::new(SystemClock),
            state: Mutex::new(State {
                sink,
                last_progress_width: 0,
                last_progress_at: None,
            }),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether the sink was detected as an interactive terminal.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Current terminal width; `None` for non-interactive sinks.
    pub fn columns(&self) -> Option<usize> {
        if !self.interactive {
            return None;
        }
        self.state.lock().sink.columns()
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Whether a message at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        if level == LogLevel::Progress {
            return self.interactive;
        }
        level.passes(self.min_level)
    }

    /// Log any displayable value at `level`.
    pub fn print(&self, level: LogLevel, msg: impl fmt::Display) -> io::Result<usize> {
        if !self.enabled(level) {
            return Ok(0);
        }
        self.emit(level, &msg.to_string())
    }

    /// Show a transient status line that the next line overwrites.
    ///
    /// Does nothing unless the sink is an interactive terminal.
    pub fn progress(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Progress, msg)
    }

    pub fn trace(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Trace, msg)
    }

    pub fn debug(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Debug, msg)
    }

    pub fn info(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Info, msg)
    }

    pub fn warn(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Warning, msg)
    }

    pub fn error(&self, msg: impl fmt::Display) -> io::Result<usize> {
        self.print(LogLevel::Error, msg)
    }

    /// Log at fatal level, flush, and exit the process with
    /// [`FATAL_EXIT_CODE`].
    ///
    /// The exit happens whether or not the write succeeded.
    pub fn fatal(&self, msg: impl fmt::Display) -> ! {
        let _ = self.print(LogLevel::Fatal, msg);
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.state.lock().sink.flush()
    }

    #[cfg(test)]
    fn last_progress_width(&self) -> usize {
        self.state.lock().last_progress_width
    }

    #[cfg(test)]
    fn last_progress_at(&self) -> Option<Instant> {
        self.state.lock().last_progress_at
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("time_format", &self.time_format)
            .field("interactive", &self.interactive)
            .field("strip_messages", &self.strip_messages)
            .field("trim_marker", &self.trim_marker)
            .field("progress_interval", &self.progress_interval)
            .finish_non_exhaustive()
    }
}
