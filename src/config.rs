//! Console configuration

use crate::level::DebugLevel;

/// Shared print buffer size, NUL terminator included
pub const CONSOLE_PRINT_BUF_SIZE: usize = 128;

/// Maximum enabled debug level
///
/// Chosen at build time by the `level-*` cargo features. If several are
/// enabled the most verbose one wins; with none enabled nothing above
/// [`DebugLevel::None`] is printed.
pub const DEBUG_LEVEL: DebugLevel = if cfg!(feature = "level-debug") {
    DebugLevel::Debug
} else if cfg!(feature = "level-info") {
    DebugLevel::Info
} else if cfg!(feature = "level-error") {
    DebugLevel::Error
} else {
    DebugLevel::None
};

/// Line ending appended to records coming from the `log` facade
pub const LOG_LINE_ENDING: &str = "\r\n";
