//! Console printing macros
//!
//! # Usage
//!
//! ```ignore
//! use uart_print::{DebugLevel, dbg_printf, dbg_err, dbg_info, dbg_debug};
//!
//! dbg_printf!(DebugLevel::Info, "link up at {} Mbit/s\r\n", speed);
//! dbg_err!("sensor {} not responding\r\n", id);
//! dbg_info!("calibration done\r\n");
//! dbg_debug!("raw sample = {:#06x}\r\n", raw);
//! ```
//!
//! Nothing is appended to the message; put line endings in the format
//! string.
//!
//! # Performance
//!
//! The level is compared against the build-time `DEBUG_LEVEL` before
//! anything else. For a disabled level the arguments are never evaluated,
//! the shared buffer is never touched and the whole call is dead code.

/// Prints a formatted message at `level` on the global console
///
/// Output longer than the print buffer is truncated silently.
///
/// # Examples
///
/// ```ignore
/// dbg_printf!(DebugLevel::Error, "write to block {} failed\r\n", block);
/// dbg_printf!(DebugLevel::Debug, "");
/// ```
#[macro_export]
macro_rules! dbg_printf {
    ($level:expr, $($arg:tt)+) => {{
        let level: $crate::level::DebugLevel = $level;
        if $crate::level::is_level_enabled(level) {
            $crate::console::CONSOLE._print(level, format_args!($($arg)+));
        }
    }};
}

/// Prints a message at the ERROR level
///
/// # Examples
///
/// ```ignore
/// dbg_err!("flash erase failed at {:#x}\r\n", addr);
/// ```
#[macro_export]
macro_rules! dbg_err {
    ($($arg:tt)+) => {
        $crate::dbg_printf!($crate::level::DebugLevel::Error, $($arg)+)
    };
}

/// Prints a message at the INFO level
///
/// # Examples
///
/// ```ignore
/// dbg_info!("firmware {} starting\r\n", VERSION);
/// ```
#[macro_export]
macro_rules! dbg_info {
    ($($arg:tt)+) => {
        $crate::dbg_printf!($crate::level::DebugLevel::Info, $($arg)+)
    };
}

/// Prints a message at the DEBUG level
///
/// Compiled out unless the `level-debug` feature is enabled.
///
/// # Examples
///
/// ```ignore
/// dbg_debug!("state {:?} -> {:?}\r\n", old, new);
/// ```
#[macro_export]
macro_rules! dbg_debug {
    ($($arg:tt)+) => {
        $crate::dbg_printf!($crate::level::DebugLevel::Debug, $($arg)+)
    };
}

/// Formats into any `core::fmt::Write` stream
///
/// Expands to [`console_fprintf`](crate::console::console_fprintf) and
/// returns its `Result<usize, ConsoleError>`. Not level gated.
///
/// # Examples
///
/// ```ignore
/// let written = console_fprintf!(&mut ConsoleWriter, "{} errors\r\n", count)?;
/// ```
#[macro_export]
macro_rules! console_fprintf {
    ($stream:expr, $($arg:tt)+) => {
        $crate::console::console_fprintf($stream, format_args!($($arg)+))
    };
}
