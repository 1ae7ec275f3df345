//! Logger setup for the command line
//!
//! Generated names own stdout, so every record is written to stderr (and to
//! the optional log file). `-v` only raises the level of this crate's own
//! records; dependencies stay at warnings.

use anyhow::Result;
use chrono::SecondsFormat;
use colored::Colorize;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

use crate::constants::APPLICATION;

/// Verbosity selected with repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Failed conversions and other warnings
    Warning,
    /// Every successful conversion
    Info,
    /// Configuration and root-stripping decisions
    Debug,
    /// The generated name of every path
    Trace,
}

impl LogLevel {
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Warning,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Console records carry their module once internals are logged
    fn shows_target(self) -> bool {
        matches!(self, LogLevel::Debug | LogLevel::Trace)
    }
}

/// Initialise the logger
///
/// An empty `log_file` disables file logging.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);
    let colorize = stderr_is_terminal();
    let show_target = verbosity.shows_target();

    let console = Dispatch::new()
        .format(move |out, message, record| {
            let level = if colorize {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };

            if show_target {
                out.finish(format_args!(
                    "{level:>5} [{}] {message}",
                    short_target(record.target())
                ))
            } else {
                out.finish(format_args!("{level:>5} {message}"))
            }
        })
        .chain(std::io::stderr());

    let mut logger = Dispatch::new()
        .level(LevelFilter::Warn)
        .level_for(APPLICATION, verbosity.to_level_filter())
        .chain(console);

    if !log_file.is_empty() {
        logger = logger.chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(fern::log_file(log_file)?),
        );
    }

    logger.apply()?;
    log::debug!("Logging at {verbosity:?}");

    Ok(())
}

/// Reports a successful conversion at info level
pub fn log_conversion(input: &str, output: &str) {
    info!("{}", conversion_message(input, output, stderr_is_terminal()));
}

/// `input -> output`, with the generated name highlighted when `colorize` is set
pub fn conversion_message(input: &str, output: &str, colorize: bool) -> String {
    if colorize {
        format!("{input} -> {}", output.green().bold())
    } else {
        format!("{input} -> {output}")
    }
}

fn stderr_is_terminal() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// `pathid::naming::converter` is printed as `naming::converter`
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(APPLICATION)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}
