mod common;

use common::{TestContext, bare_config, fixed_clock};
use par_log::{
    CaptureSink, Color, LogLevel, Logger, LoggerConfig, PlainSink, Style, log_debug, log_error,
    log_info, log_progress, log_warn,
};
use std::fs::File;
use std::time::Duration;

#[test]
fn test_new_logger_on_file_sink_uses_file_defaults() {
    let logger = Logger::new(CaptureSink::file());
    assert!(!logger.is_interactive());
    assert_eq!(logger.columns(), None);
    assert_eq!(logger.min_level(), LogLevel::Info);
    assert_eq!(logger.time_format(), "%Y-%m-%d %H:%M:%S");
    assert!(!logger.enabled(LogLevel::Progress));
    assert!(!logger.enabled(LogLevel::Debug));
    assert!(logger.enabled(LogLevel::Fatal));
}

#[test]
fn test_new_logger_on_terminal_uses_terminal_defaults() {
    let logger = Logger::new(CaptureSink::terminal(100));
    assert!(logger.is_interactive());
    assert_eq!(logger.columns(), Some(100));
    assert_eq!(logger.time_format(), "%H:%M:%S");
    assert!(logger.enabled(LogLevel::Progress));
}

#[test]
fn test_real_file_sink() {
    let ctx = TestContext::new();
    let file = File::create(ctx.log_path()).unwrap();
    let logger = Logger::new(file).with_clock(fixed_clock());

    logger.info("started").unwrap();
    logger.progress("10%").unwrap();
    logger.warn("disk almost full").unwrap();

    assert_eq!(
        ctx.read_log(),
        "2024-03-15 09:30:00 |INF| started\n2024-03-15 09:30:00 |WRN| disk almost full\n"
    );
}

#[test]
fn test_plain_sink_wraps_any_writer() {
    let ctx = TestContext::new();
    let file = File::create(ctx.log_path()).unwrap();
    let logger = Logger::with_config(PlainSink(file), &bare_config()).unwrap();
    logger.error("oops").unwrap();
    assert_eq!(ctx.read_log(), "|ERR| oops\n");
}

#[test]
fn test_macros_format_arguments() {
    let sink = CaptureSink::file();
    let config = LoggerConfig {
        min_level: LogLevel::Trace,
        ..bare_config()
    };
    let logger = Logger::with_config(sink.clone(), &config).unwrap();

    log_debug!(logger, "x = {}", 5).unwrap();
    log_info!(logger, "{} of {}", 1, 2).unwrap();
    log_warn!(logger, "{:>4}", "w").unwrap();
    log_error!(logger, "code {code}", code = 7).unwrap();
    assert_eq!(log_progress!(logger, "{}%", 50).unwrap(), 0);

    assert_eq!(
        sink.contents(),
        "|DBG| x = 5\n|INF| 1 of 2\n|WRN|    w\n|ERR| code 7\n"
    );
}

#[test]
fn test_progress_bar_overwrites_in_place() {
    let sink = CaptureSink::terminal(80);
    let logger = Logger::with_config(sink.clone(), &bare_config()).unwrap();

    for pct in [5, 50, 100] {
        log_progress!(logger, "downloading {pct}%").unwrap();
    }
    logger.info("done").unwrap();

    // "downloading 100%" is 16 cells wide, "done" is 4
    assert_eq!(
        sink.contents(),
        format!(
            "downloading 5%\rdownloading 50%\rdownloading 100%\rdone{}\n",
            " ".repeat(12)
        )
    );
}

#[test]
fn test_progress_rate_limit_from_config() {
    let sink = CaptureSink::terminal(80);
    let clock = fixed_clock();
    let config = LoggerConfig {
        progress_interval_ms: Some(50),
        ..bare_config()
    };
    let logger = Logger::with_config(sink.clone(), &config)
        .unwrap()
        .with_clock(clock.clone());

    for i in 0..10 {
        logger.progress(i).unwrap();
        clock.advance(Duration::from_millis(20));
    }

    // Accepted at 0, 60, 120 and 180 ms
    assert_eq!(sink.contents(), "0\r3\r6\r9\r");
}

#[test]
fn test_config_file_drives_logger() {
    let ctx = TestContext::new();
    let path = ctx.write_config(
        "min_level: warning\n\
         time_format: ''\n\
         strip_messages: true\n",
    );
    let config = LoggerConfig::load_from(&path).unwrap();

    let sink = CaptureSink::file();
    let logger = Logger::with_config(sink.clone(), &config).unwrap();
    logger.info("hidden").unwrap();
    logger.warn("  shown  ").unwrap();
    assert_eq!(sink.contents(), "|WRN| shown\n");
}

#[test]
fn test_style_overrides_apply_on_terminal_only() {
    let mut config = LoggerConfig {
        time_format: Some(String::new()),
        ..Default::default()
    };
    config
        .styles
        .insert(LogLevel::Info, Style::new().bold().fg(Color::new(0, 255, 0)));

    let terminal = CaptureSink::terminal(80);
    Logger::with_config(terminal.clone(), &config)
        .unwrap()
        .info("go")
        .unwrap();
    assert_eq!(terminal.contents(), "\x1b[1;38;2;0;255;0mgo\x1b[0m\n");

    let file = CaptureSink::file();
    Logger::with_config(file.clone(), &config)
        .unwrap()
        .info("go")
        .unwrap();
    assert_eq!(file.contents(), "|INF| go\n");
}

#[test]
fn test_custom_trim_marker() {
    let sink = CaptureSink::terminal(12);
    let config = LoggerConfig {
        trim_marker: "»".to_string(),
        ..bare_config()
    };
    let logger = Logger::with_config(sink.clone(), &config).unwrap();
    logger.info("a very long message").unwrap();
    assert_eq!(sink.contents(), "a very long»\n");
}

#[test]
fn test_wide_characters_measured_in_cells() {
    let sink = CaptureSink::terminal(80);
    let logger = Logger::with_config(sink.clone(), &bare_config()).unwrap();
    // Four double-width characters occupy eight cells
    logger.progress("日本語版").unwrap();
    logger.info("ok").unwrap();
    assert_eq!(sink.contents(), format!("日本語版\rok{}\n", " ".repeat(6)));
}

#[test]
fn test_invalid_trim_marker_rejected() {
    let config = LoggerConfig {
        trim_marker: "\n".to_string(),
        ..Default::default()
    };
    assert!(Logger::with_config(CaptureSink::file(), &config).is_err());
}
