//! 设备驱动模块
//!
//! 控制台只依赖串行设备的写入能力，具体驱动由使用者安装。

pub mod serial;
