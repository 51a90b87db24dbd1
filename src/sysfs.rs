//! Synchronous accessors for small sysfs text values.
//!
//! Every operation is a single open / single read-or-write / close with no
//! retry and no timeout. A hung device path blocks the calling thread; that
//! is an accepted property of the interface, matching how the kernel side
//! behaves. Failures are reported as [`Error::Sysfs`] and are never fatal:
//! callers treat them as "operation had no effect" and keep going.
//!
//! Opens never create files. A missing tunable is a real condition (the
//! interactive governor is not loaded) and must surface as an error rather
//! than leave a stray regular file behind.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;
use tracing::trace;

/// Write a text value to a sysfs pseudo-file.
///
/// Opens the file write-only (truncating, never creating), performs one
/// write, and closes it. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::Sysfs`] if the open or the write fails.
pub fn write_text(path: &Path, value: &str) -> Result<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::sysfs(path.display().to_string(), &e))?;

    file.write_all(value.as_bytes())
        .map_err(|e| Error::sysfs(path.display().to_string(), &e))?;

    trace!(path = %path.display(), value, "sysfs write");
    Ok(value.len())
}

/// Write an integer value to a sysfs pseudo-file.
///
/// Convenience wrapper over [`write_text`] for the numeric tunables.
///
/// # Errors
///
/// Returns [`Error::Sysfs`] if the open or the write fails.
pub fn write_int(path: &Path, value: u32) -> Result<usize> {
    write_text(path, &value.to_string())
}

/// Read a text value from a sysfs pseudo-file.
///
/// Reads at most `max_len` bytes and strips one trailing newline, the way
/// the kernel terminates single-value attributes.
///
/// # Errors
///
/// Returns [`Error::Sysfs`] if the open or the read fails, or if the bytes
/// read are not valid UTF-8.
pub fn read_text(path: &Path, max_len: usize) -> Result<String> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| Error::sysfs(path.display().to_string(), &e))?;

    let mut buf = Vec::with_capacity(max_len.min(128));
    file.take(max_len as u64)
        .read_to_end(&mut buf)
        .map_err(|e| Error::sysfs(path.display().to_string(), &e))?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    let text = String::from_utf8(buf).map_err(|e| {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, e);
        Error::sysfs(path.display().to_string(), &io)
    })?;

    trace!(path = %path.display(), value = %text, "sysfs read");
    Ok(text)
}

/// Read an integer value from a sysfs pseudo-file.
///
/// # Errors
///
/// Returns [`Error::Sysfs`] on I/O failure or [`Error::Parse`] if the file
/// content is not a decimal integer.
pub fn read_u32(path: &Path, max_len: usize) -> Result<u32> {
    let text = read_text(path, max_len)?;
    text.trim()
        .parse()
        .map_err(|_| Error::parse(path.display().to_string(), text))
}
