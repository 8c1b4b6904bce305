//! Running the `par-log` command.

use super::Cli;
use crate::logger::Logger;
use crate::sink::Sink;
use anyhow::Context;
use par_log_config::LogLevel;
use std::fs::OpenOptions;
use std::io::{self, BufRead};

/// Build the logger described by `cli` and log its input.
///
/// Exits the process with [`FATAL_EXIT_CODE`](crate::FATAL_EXIT_CODE) after
/// the first message logged at fatal level.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("Failed to load logger config")?;

    let sink: Box<dyn Sink> = match &cli.output {
        Some(path) => Box::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stderr()),
    };

    let logger = Logger::with_config(sink, &config)?;
    log_input(&logger, cli.message_level(), &cli.message, io::stdin().lock())
}

/// Log `message` joined by spaces, or each line of `input` when `message`
/// is empty. A progress line left on screen is cleared at the end.
pub fn log_input(
    logger: &Logger,
    level: LogLevel,
    message: &[String],
    input: impl BufRead,
) -> anyhow::Result<()> {
    if message.is_empty() {
        for line in input.lines() {
            let line = line.context("Failed to read stdin")?;
            log_one(logger, level, &line)?;
        }
    } else {
        log_one(logger, level, &message.join(" "))?;
    }

    // Leave the cursor on a clean row for whatever prints next
    if level == LogLevel::Progress {
        logger.clear_progress()?;
    }
    Ok(())
}

fn log_one(logger: &Logger, level: LogLevel, text: &str) -> anyhow::Result<()> {
    if level == LogLevel::Fatal {
        logger.fatal(text);
    }
    logger.print(level, text).context("Failed to write log line")?;
    Ok(())
}
