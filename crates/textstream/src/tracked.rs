//! A pass-through decorator that counts traffic on a wrapped stream.

use std::{
    fmt,
    io::{self, Read, Seek, SeekFrom, Write},
};

use crate::meta::StreamMeta;

/// Running totals for a [`Tracked`] stream.
///
/// Counts reflect bytes actually transferred: a short read or write adds
/// only the amount the inner stream accepted, and failed operations add
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Total bytes returned by reads.
    pub bytes_read: u64,
    /// Total bytes accepted by writes.
    pub bytes_written: u64,
    /// Number of successful read calls.
    pub read_ops: u64,
    /// Number of successful write calls.
    pub write_ops: u64,
}

impl fmt::Display for StreamStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read: {} bytes ({} ops), written: {} bytes ({} ops)",
            self.bytes_read, self.read_ops, self.bytes_written, self.write_ops
        )
    }
}

/// Wraps any stream and counts bytes and operations flowing through it.
///
/// Pure pass-through bookkeeping: data, errors, and capabilities of the
/// inner stream are untouched.
///
/// # Examples
///
/// ```rust
/// use std::io::Read;
///
/// use textstream::{StringStream, Tracked};
///
/// let mut stream = Tracked::new(StringStream::new("hello"));
/// let mut out = Vec::new();
/// stream.read_to_end(&mut out).unwrap();
/// assert_eq!(stream.stats().bytes_read, 5);
/// ```
#[derive(Debug)]
pub struct Tracked<S> {
    inner: S,
    stats: StreamStats,
}

impl<S> Tracked<S> {
    /// Wraps `inner` with zeroed counters.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            stats: StreamStats::default(),
        }
    }

    /// The counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// A shared reference to the wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// A mutable reference to the wrapped stream. Traffic that bypasses the
    /// wrapper is not counted.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the inner stream, discarding the counters.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read> Read for Tracked<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.stats.bytes_read += n as u64;
        self.stats.read_ops += 1;
        Ok(n)
    }
}

impl<S: Write> Write for Tracked<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.stats.bytes_written += n as u64;
        self.stats.write_ops += 1;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Seek> Seek for Tracked<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl<S: StreamMeta> StreamMeta for Tracked<S> {
    fn can_read(&self) -> bool {
        self.inner.can_read()
    }

    fn can_seek(&self) -> bool {
        self.inner.can_seek()
    }

    fn can_write(&self) -> bool {
        self.inner.can_write()
    }

    fn byte_len(&self) -> io::Result<u64> {
        self.inner.byte_len()
    }

    fn position(&self) -> io::Result<u64> {
        self.inner.position()
    }

    fn set_position(&mut self, pos: u64) -> io::Result<()> {
        self.inner.set_position(pos)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.inner.set_len(len)
    }
}
