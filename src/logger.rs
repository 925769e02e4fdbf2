//! `log` facade bridge
//!
//! Routes records from the `log` crate into a console. Records go through
//! the same level gate and shared buffer as `dbg_printf!`, formatted as
//! `[LEVEL] message` plus a line ending.

use log::{Metadata, Record};

use crate::config::{CONSOLE_PRINT_BUF_SIZE, LOG_LINE_ENDING};
use crate::console::{CONSOLE, ConsoleCore};
use crate::error::ConsoleError;
use crate::level::DebugLevel;

/// Global logger instance
static LOGGER: ConsoleLogger = ConsoleLogger::new(&CONSOLE);

/// `log::Log` implementation backed by a [`ConsoleCore`]
pub struct ConsoleLogger<const N: usize = CONSOLE_PRINT_BUF_SIZE> {
    console: &'static ConsoleCore<N>,
}

impl<const N: usize> ConsoleLogger<N> {
    /// Logger that prints through `console`
    pub const fn new(console: &'static ConsoleCore<N>) -> Self {
        Self { console }
    }
}

impl<const N: usize> log::Log for ConsoleLogger<N> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        DebugLevel::from_log_level(metadata.level()).is_enabled_at(self.console.max_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = DebugLevel::from_log_level(record.level());
        self.console._print(
            level,
            format_args!("{} {}{}", level.as_str(), record.args(), LOG_LINE_ENDING),
        );
    }

    fn flush(&self) {}
}

/// Installs the console logger and sets `log`'s max level to match
/// [`DEBUG_LEVEL`](crate::config::DEBUG_LEVEL)
pub fn init_logger() -> Result<(), ConsoleError> {
    log::set_logger(&LOGGER).map_err(|_| ConsoleError::LoggerAlreadySet)?;
    log::set_max_level(CONSOLE.max_level().to_level_filter());
    Ok(())
}
