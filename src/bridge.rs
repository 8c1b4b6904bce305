//! Routes records from the `log` facade through a [`Logger`].
//!
//! After [`install`], `log::info!` and friends (including those in
//! dependencies) render exactly like direct `Logger` calls.

use crate::logger::Logger;
use log::{Log, Metadata, Record, SetLoggerError};
use par_log_config::LogLevel;
use std::sync::Arc;

/// `log::Log` adapter around a shared [`Logger`].
#[derive(Debug, Clone)]
pub struct Bridge {
    logger: Arc<Logger>,
}

impl Bridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // There is nowhere to report a failed write from inside the facade
        let _ = self
            .logger
            .print(LogLevel::from(record.level()), record.args());
    }

    fn flush(&self) {
        let _ = self.logger.flush();
    }
}

/// Install `logger` as the global `log` backend.
///
/// The facade's max level is set from the logger's minimum level so
/// filtered records are skipped before they are formatted. Fails if a
/// global logger was already set.
pub fn install(logger: Arc<Logger>) -> Result<(), SetLoggerError> {
    let max_level = logger.min_level().to_level_filter();
    log::set_boxed_logger(Box::new(Bridge::new(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}
