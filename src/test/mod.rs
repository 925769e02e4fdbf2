//! 测试辅助
//!
//! 提供 `test_case!` 与 `kassert!` 宏，写法与内核测试保持一致，
//! 但运行在宿主机的标准测试框架上。
