// src/console/tests/mod.rs

use alloc::{string::String, sync::Arc, vec::Vec};
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use core::time::Duration;

use spin::Mutex;

use super::ConsoleCore;
use crate::device::serial::SerialDriver;
use crate::error::ConsoleError;
use crate::level::DebugLevel;

// ========== 测试辅助宏 ==========

/// 测试专用打印宏
///
/// 模拟 `dbg_printf!` 的行为，但操作独立的 ConsoleCore 实例
macro_rules! test_print {
    ($console:expr, $level:expr, $($arg:tt)*) => {
        $console._print($level, format_args!($($arg)*))
    };
}

// ========== 模拟设备 ==========

/// 记录每一次写入的串口
pub(super) struct MockUart {
    writes: Mutex<Vec<Vec<u8>>>,
    init_calls: AtomicUsize,
    init_result: Result<(), ConsoleError>,
    init_delay: Duration,
}

impl MockUart {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
            init_calls: AtomicUsize::new(0),
            init_result: Ok(()),
            init_delay: Duration::ZERO,
        })
    }

    /// 初始化需要 `delay` 才能完成的设备
    pub(super) fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
            init_calls: AtomicUsize::new(0),
            init_result: Ok(()),
            init_delay: delay,
        })
    }

    /// 初始化总是失败的设备
    pub(super) fn failing(code: isize) -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
            init_calls: AtomicUsize::new(0),
            init_result: Err(ConsoleError::Device(code)),
            init_delay: Duration::ZERO,
        })
    }

    pub(super) fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
            .collect()
    }

    pub(super) fn write_count(&self) -> usize {
        self.writes.lock().len()
    }

    pub(super) fn bytes_written(&self) -> usize {
        self.writes.lock().iter().map(Vec::len).sum()
    }

    pub(super) fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

impl SerialDriver for MockUart {
    fn init(&self) -> Result<(), ConsoleError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if !self.init_delay.is_zero() {
            std::thread::sleep(self.init_delay);
        }
        self.init_result
    }

    fn write(&self, data: &[u8]) {
        self.writes.lock().push(data.to_vec());
    }
}

/// 只接受前 `limit` 个字节的流，之后的写入都失败
pub(super) struct LimitedStream {
    pub(super) out: String,
    limit: usize,
}

impl LimitedStream {
    pub(super) fn new(limit: usize) -> Self {
        Self {
            out: String::new(),
            limit,
        }
    }
}

impl fmt::Write for LimitedStream {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.out.len() + s.len() > self.limit {
            return Err(fmt::Error);
        }
        self.out.push_str(s);
        Ok(())
    }
}

/// 创建已安装并初始化模拟设备的控制台
pub(super) fn ready_console(max_level: DebugLevel) -> (ConsoleCore, Arc<MockUart>) {
    let console = ConsoleCore::new(max_level);
    let uart = MockUart::new();
    console.set_device(uart.clone());
    console.init().unwrap();
    (console, uart)
}
