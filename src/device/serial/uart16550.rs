//! 16550 UART 串行端口驱动程序模块

use spin::Mutex;
use uart_16550::MmioSerialPort;

use crate::{device::serial::SerialDriver, error::ConsoleError};

/// 16550 UART 串行端口驱动程序结构体
pub struct Uart16550 {
    serial_port: Mutex<MmioSerialPort>,
}

impl Uart16550 {
    /// Wraps the UART whose registers start at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the mapped MMIO address of a 16550-compatible UART and
    /// no other code may drive the same registers.
    pub unsafe fn new(base: usize) -> Self {
        Self {
            serial_port: Mutex::new(unsafe { MmioSerialPort::new(base) }),
        }
    }
}

impl SerialDriver for Uart16550 {
    fn init(&self) -> Result<(), ConsoleError> {
        // 波特率等参数由 uart_16550 按默认值配置
        self.serial_port.lock().init();
        Ok(())
    }

    fn write(&self, data: &[u8]) {
        // 整条消息在一次加锁内发出，避免与其他写者交错
        let mut port = self.serial_port.lock();
        for &byte in data {
            port.send(byte);
        }
    }
}
