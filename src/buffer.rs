//! Fixed-capacity print buffer
//!
//! A [`PrintBuffer`] holds at most `N - 1` bytes of formatted text followed
//! by a NUL terminator, the layout a C-side UART routine expects. Formatting
//! past the capacity truncates silently: logging never fails because a
//! message is too long.

use core::fmt::{self, Write};

/// NUL-terminated text buffer of `N` bytes
pub struct PrintBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> PrintBuffer<N> {
    /// Number of text bytes that fit in front of the terminator
    pub const CAPACITY: usize = {
        assert!(N > 0, "print buffer needs room for the terminator");
        N - 1
    };

    /// Creates an empty, terminated buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Empties the buffer and re-terminates it at offset 0
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
        self.bytes[0] = 0;
    }

    /// Replaces the contents with `args`, truncating at capacity
    pub fn format(&mut self, args: fmt::Arguments<'_>) {
        self.clear();
        // 截断不会报错，这里的错误只可能来自用户的 Display 实现
        let _ = fmt::write(self, args);
    }

    /// Formatted text without the terminator
    pub fn as_str(&self) -> &str {
        // 写入路径只接受完整的 UTF-8 字符，失败分支不可达
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Text bytes plus the trailing NUL
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Text length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Same as [`Self::CAPACITY`]
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Whether the last format dropped any output
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for PrintBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for PrintBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Once something was cut off, later pieces would leave a gap.
        if self.truncated {
            return Ok(());
        }

        let remaining = Self::CAPACITY - self.len;
        let mut to_copy = s.len().min(remaining);
        while !s.is_char_boundary(to_copy) {
            to_copy -= 1;
        }

        self.bytes[self.len..self.len + to_copy].copy_from_slice(&s.as_bytes()[..to_copy]);
        self.len += to_copy;
        self.bytes[self.len] = 0;
        self.truncated = to_copy < s.len();
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for PrintBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintBuffer")
            .field("text", &self.as_str())
            .field("capacity", &Self::CAPACITY)
            .field("truncated", &self.truncated)
            .finish()
    }
}
