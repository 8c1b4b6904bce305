//! par-log: leveled terminal and file logging with a single overwritable
//! progress line.
//!
//! ```no_run
//! use par_log::{Logger, log_info, log_progress};
//!
//! let logger = Logger::stderr();
//! for i in 0..=100 {
//!     log_progress!(logger, "downloading {i}%")?;
//! }
//! log_info!(logger, "download complete")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! On an interactive terminal the progress updates overwrite each other in
//! place and the final line cleanly replaces the last one. Redirected to a
//! file, the progress updates are dropped and every line carries a dated
//! timestamp and a `|INF|`-style level tag.
//
// # Mutex Usage Policy
//
// All logger state is sync-only and guarded by a single `parking_lot::Mutex`
// held for the entire emit, including the write to the sink. Never write to
// a logger's sink from outside the lock.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bridge;
pub mod cli;
pub mod clock;
pub mod logger;
mod macros;
pub mod message;
pub mod sink;
pub mod styles;

pub use clock::{Clock, ManualClock, Now, SystemClock};
pub use logger::{FATAL_EXIT_CODE, Logger};
pub use message::Message;
pub use sink::{CaptureSink, PlainSink, Sink};
pub use styles::StyleTable;

pub use par_log_config::{ConfigError, LogLevel, LoggerConfig};
pub use par_log_style::{Color, Style};
