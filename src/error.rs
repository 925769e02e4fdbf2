//! 控制台错误类型
//!
//! 可通过 [`ConsoleError::to_errno()`] 转换为 C 风格的负数状态码。

use core::fmt;

/// Console error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// No serial device installed, -ENODEV(19)
    NoDevice,
    /// The serial device failed to come up, carries the device's status code
    Device(isize),
    /// The console is not initialized yet, -EAGAIN(11)
    NotReady,
    /// The output stream rejected a write, -EIO(5)
    Stream,
    /// Another `log` logger is already installed, -EBUSY(16)
    LoggerAlreadySet,
}

impl ConsoleError {
    /// 转换为错误码（负数）
    ///
    /// 设备返回的非负状态码被视为 -EIO。
    pub fn to_errno(&self) -> isize {
        match self {
            ConsoleError::NoDevice => -19,
            ConsoleError::Device(code) if *code < 0 => *code,
            ConsoleError::Device(_) => -5,
            ConsoleError::NotReady => -11,
            ConsoleError::Stream => -5,
            ConsoleError::LoggerAlreadySet => -16,
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::NoDevice => f.write_str("no console device"),
            ConsoleError::Device(code) => write!(f, "console device init failed ({})", code),
            ConsoleError::NotReady => f.write_str("console not initialized"),
            ConsoleError::Stream => f.write_str("stream write failed"),
            ConsoleError::LoggerAlreadySet => f.write_str("a logger is already installed"),
        }
    }
}

impl From<fmt::Error> for ConsoleError {
    fn from(_: fmt::Error) -> Self {
        ConsoleError::Stream
    }
}

#[cfg(test)]
mod tests {
    use crate::{kassert, test_case};

    use super::*;

    test_case!(test_error_codes, {
        kassert!(ConsoleError::NoDevice.to_errno() == -19);
        kassert!(ConsoleError::NotReady.to_errno() == -11);
        kassert!(ConsoleError::Stream.to_errno() == -5);
        kassert!(ConsoleError::LoggerAlreadySet.to_errno() == -16);
        kassert!(ConsoleError::Device(-110).to_errno() == -110);
    });

    test_case!(test_device_code_is_never_success, {
        kassert!(ConsoleError::Device(0).to_errno() == -5);
        kassert!(ConsoleError::Device(3).to_errno() == -5);
    });

    test_case!(test_display, {
        kassert!(alloc::format!("{}", ConsoleError::Device(-2)) == "console device init failed (-2)");
    });
}
