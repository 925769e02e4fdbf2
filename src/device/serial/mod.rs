//! 串行设备驱动模块
//!
//! 定义控制台所需的串行设备特征，并提供 16550 UART 的实现。

use crate::error::ConsoleError;

pub mod uart16550;

/// 串行设备驱动程序特征
///
/// 控制台通过该特征把字节交给硬件。`write` 没有返回值：日志输出是尽力而为的，
/// 设备层的错误要么被吞掉，要么由驱动自行处理。
pub trait SerialDriver: Send + Sync {
    /// 初始化设备，由 `console_init` 调用一次
    fn init(&self) -> Result<(), ConsoleError> {
        Ok(())
    }

    /// 按顺序写出全部字节，可以阻塞直到硬件就绪
    fn write(&self, data: &[u8]);
}
