//! Leveled debug printing over a UART console
//!
//! The crate exposes a printf-style logging macro gated by a build-time
//! maximum level, a single statically allocated print buffer shared by every
//! logging call, and the console sink functions that move the formatted bytes
//! to a serial device.
//!
//! # Usage
//!
//! ```ignore
//! use alloc::sync::Arc;
//! use uart_print::{DebugLevel, console_init, set_console_device, dbg_printf};
//! use uart_print::device::serial::uart16550::Uart16550;
//!
//! let uart = Arc::new(unsafe { Uart16550::new(0x1000_0000) });
//! set_console_device(uart);
//! console_init()?;
//!
//! dbg_printf!(DebugLevel::Info, "booted in {} ms\r\n", elapsed);
//! dbg_debug!("only printed with the `level-debug` feature\r\n");
//! ```
//!
//! # Modules
//!
//! - [`level`]: the four debug levels and the compile-time gate
//! - [`buffer`]: fixed-capacity, NUL-terminated print buffer
//! - [`console`]: the sink (`console_init`, `console_prints`, `console_fprintf`)
//! - [`device`]: the serial driver seam and the 16550 backend
//! - [`logger`]: bridge from the `log` facade into the console

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod console;
pub mod device;
pub mod error;
pub mod level;
pub mod logger;
mod macros;

#[cfg(test)]
mod test;

pub use buffer::PrintBuffer;
pub use config::{CONSOLE_PRINT_BUF_SIZE, DEBUG_LEVEL};
pub use console::{
    CONSOLE, ConsoleCore, ConsoleWriter, CoreWriter, console_fprintf, console_fprintf_status,
    console_init, console_init_status, console_prints, set_console_device,
};
pub use device::serial::SerialDriver;
pub use error::ConsoleError;
pub use level::DebugLevel;
pub use logger::{ConsoleLogger, init_logger};
