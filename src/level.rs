//! Debug levels and the build-time level gate

use log::{Level, LevelFilter};

use crate::config::DEBUG_LEVEL;

/// Debug verbosity, ordered from quiet to chatty
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugLevel {
    /// Nothing but explicit `None`-level calls
    None = 0,
    /// Error conditions
    Error = 1,
    /// Normal operation milestones
    Info = 2,
    /// Detailed diagnostics
    Debug = 3,
}

impl DebugLevel {
    /// Bracketed tag used as a record prefix
    pub const fn as_str(&self) -> &'static str {
        match self {
            DebugLevel::None => "[NONE]",
            DebugLevel::Error => "[ERR]",
            DebugLevel::Info => "[INFO]",
            DebugLevel::Debug => "[DEBUG]",
        }
    }

    /// Values above `Debug` saturate to `Debug`
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => DebugLevel::None,
            1 => DebugLevel::Error,
            2 => DebugLevel::Info,
            _ => DebugLevel::Debug,
        }
    }

    /// Whether a message at `self` passes a `threshold`
    #[inline(always)]
    pub const fn is_enabled_at(self, threshold: DebugLevel) -> bool {
        self as u8 <= threshold as u8
    }

    /// Maps a `log` record level onto the console's coarser scale
    pub const fn from_log_level(level: Level) -> Self {
        match level {
            Level::Error | Level::Warn => DebugLevel::Error,
            Level::Info => DebugLevel::Info,
            Level::Debug | Level::Trace => DebugLevel::Debug,
        }
    }

    /// The `log` filter that lets through exactly what this threshold enables
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            DebugLevel::None => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Warn,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Trace,
        }
    }
}

impl core::fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a level against the build-time [`DEBUG_LEVEL`]
///
/// Both sides are constants at every macro call site, so a disabled branch
/// is removed entirely.
#[inline(always)]
#[doc(hidden)]
pub const fn is_level_enabled(level: DebugLevel) -> bool {
    level.is_enabled_at(DEBUG_LEVEL)
}
