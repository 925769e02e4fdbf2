//! Formatted output to an arbitrary stream
//!
//! Independent of the shared print buffer and of the level gate: the text is
//! formatted straight into the caller's stream.

use core::fmt::{self, Write};

use crate::error::ConsoleError;

/// Formats `args` into `stream`
///
/// Returns the number of bytes written, or [`ConsoleError::Stream`] if the
/// stream (or a `Display` impl being formatted) reported an error. Bytes
/// accepted before the failure stay written.
pub fn console_fprintf<W>(stream: &mut W, args: fmt::Arguments<'_>) -> Result<usize, ConsoleError>
where
    W: Write + ?Sized,
{
    let mut counter = CountingWriter {
        inner: stream,
        written: 0,
    };
    counter.write_fmt(args)?;
    Ok(counter.written)
}

/// [`console_fprintf`] as a C-style status: the byte count, or a negative
/// errno on failure
pub fn console_fprintf_status<W>(stream: &mut W, args: fmt::Arguments<'_>) -> isize
where
    W: Write + ?Sized,
{
    match console_fprintf(stream, args) {
        Ok(written) => written as isize,
        Err(err) => err.to_errno(),
    }
}

/// Counts bytes the inner stream accepted
struct CountingWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.written += s.len();
        Ok(())
    }
}
