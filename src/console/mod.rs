//! Console sink
//!
//! [`ConsoleCore`] owns everything a console needs: the installed serial
//! device, the uninitialized/initialized state and the shared print buffer.
//! The global [`CONSOLE`] is const-initialized, so the buffer lives in the
//! data segment from the first instruction and is never torn down.
//!
//! The buffer lock is held across format and send, so concurrent callers
//! never interleave. It is not reentrant: logging from inside a value that
//! is being formatted by a logging call deadlocks, and so does logging from
//! an interrupt handler that pre-empted one. Interrupt handlers should use
//! [`console_fprintf`] with their own stream.

mod fprintf;

use alloc::sync::Arc;
use core::fmt::{self, Write};
use core::sync::atomic::{AtomicBool, Ordering};

use spin::{Mutex, RwLock};

use crate::buffer::PrintBuffer;
use crate::config::{CONSOLE_PRINT_BUF_SIZE, DEBUG_LEVEL};
use crate::device::serial::SerialDriver;
use crate::error::ConsoleError;
use crate::level::DebugLevel;

pub use fprintf::{console_fprintf, console_fprintf_status};

/// The console behind the `dbg_*` macros
pub static CONSOLE: ConsoleCore = ConsoleCore::new(DEBUG_LEVEL);

/// Core console state
///
/// Can be instantiated with any threshold and buffer size for testing, or
/// used through the global [`CONSOLE`].
pub struct ConsoleCore<const N: usize = CONSOLE_PRINT_BUF_SIZE> {
    /// Most verbose level this console prints, fixed at construction
    max_level: DebugLevel,

    device: RwLock<Option<Arc<dyn SerialDriver>>>,

    initialized: AtomicBool,

    /// Shared by every leveled print on this console
    buffer: Mutex<PrintBuffer<N>>,
}

impl<const N: usize> ConsoleCore<N> {
    /// Creates an uninitialized console with no device
    pub const fn new(max_level: DebugLevel) -> Self {
        Self {
            max_level,
            device: RwLock::new(None),
            initialized: AtomicBool::new(false),
            buffer: Mutex::new(PrintBuffer::new()),
        }
    }

    /// Most verbose level this console prints
    pub fn max_level(&self) -> DebugLevel {
        self.max_level
    }

    /// Installs the device the console writes to
    ///
    /// Replacing a device puts the console back into the uninitialized
    /// state; the new device must go through [`init`](Self::init).
    pub fn set_device(&self, device: Arc<dyn SerialDriver>) {
        let mut slot = self.device.write();
        self.initialized.store(false, Ordering::Release);
        *slot = Some(device);
    }

    /// Brings up the installed device
    ///
    /// Runs once: on an initialized console this returns `Ok(())` without
    /// touching the device. A failure leaves the console uninitialized so
    /// the caller may retry. The device slot stays write-locked for the whole
    /// call, so concurrent callers wait for the first one instead of running
    /// the device's init again.
    pub fn init(&self) -> Result<(), ConsoleError> {
        let slot = self.device.write();
        if self.is_initialized() {
            return Ok(());
        }

        let device = slot.as_ref().ok_or(ConsoleError::NoDevice)?;
        device.init()?;
        self.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Whether [`init`](Self::init) has succeeded for the current device
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Writes `s` to the device as is
    ///
    /// Fire-and-forget: bytes are dropped while the console is
    /// uninitialized.
    pub fn prints(&self, s: &str) {
        let _ = self.try_prints(s);
    }

    /// Writes `s` to the device, reporting whether it was sent
    ///
    /// Fails with [`ConsoleError::NotReady`] before a successful
    /// [`init`](Self::init) and with [`ConsoleError::NoDevice`] if no device
    /// is installed.
    pub fn try_prints(&self, s: &str) -> Result<(), ConsoleError> {
        let slot = self.device.read();
        let device = slot.as_ref().ok_or(ConsoleError::NoDevice)?;
        if !self.is_initialized() {
            return Err(ConsoleError::NotReady);
        }
        device.write(s.as_bytes());
        Ok(())
    }

    /// `core::fmt::Write` stream over [`try_prints`](Self::try_prints)
    pub fn writer(&self) -> CoreWriter<'_, N> {
        CoreWriter { console: self }
    }

    /// Leveled print through the shared buffer
    ///
    /// Called by the `dbg_*` macros after their compile-time check. Output is
    /// truncated to the buffer capacity; an empty message still produces one
    /// (empty) write.
    pub fn _print(&self, level: DebugLevel, args: fmt::Arguments<'_>) {
        if !level.is_enabled_at(self.max_level) {
            return;
        }

        let mut buffer = self.buffer.lock();
        buffer.format(args);
        self.prints(buffer.as_str());
    }

    /// Runs `f` on the shared buffer under its lock
    pub fn _with_buffer<R>(&self, f: impl FnOnce(&PrintBuffer<N>) -> R) -> R {
        let buffer = self.buffer.lock();
        f(&*buffer)
    }
}

/// `core::fmt::Write` adapter over one [`ConsoleCore`]
///
/// Returned by [`ConsoleCore::writer`]. A write that the console cannot send
/// fails with `fmt::Error`, so [`console_fprintf`] never counts dropped bytes.
pub struct CoreWriter<'a, const N: usize = CONSOLE_PRINT_BUF_SIZE> {
    console: &'a ConsoleCore<N>,
}

impl<const N: usize> Write for CoreWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.try_prints(s).map_err(|_| fmt::Error)
    }
}

/// `core::fmt::Write` adapter over the global [`CONSOLE`]
///
/// Lets the console itself be the stream of [`console_fprintf`]. It bypasses
/// the shared buffer and the level gate, and fails while the console is not
/// initialized.
pub struct ConsoleWriter;

impl Write for ConsoleWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        CONSOLE.writer().write_str(s)
    }
}

/// Installs the device used by the global console
pub fn set_console_device(device: Arc<dyn SerialDriver>) {
    CONSOLE.set_device(device);
}

/// Initializes the global console
pub fn console_init() -> Result<(), ConsoleError> {
    CONSOLE.init()
}

/// [`console_init`] as a C-style status: 0 on success, a negative errno
/// otherwise
pub fn console_init_status() -> isize {
    match console_init() {
        Ok(()) => 0,
        Err(err) => err.to_errno(),
    }
}

/// Writes `s` to the global console, fire-and-forget
pub fn console_prints(s: &str) {
    CONSOLE.prints(s);
}

#[cfg(test)]
mod tests;
