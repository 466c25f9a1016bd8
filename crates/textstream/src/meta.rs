//! Capability probes for streams of mixed abilities.

use std::io::{self, Cursor};

use crate::error::unsupported;

/// Capability probes and positional operations a stream may or may not
/// support.
///
/// [`Read`](std::io::Read) and [`Write`](std::io::Write) cover sequential
/// transfer; this trait exposes what else a stream can do. Operations a
/// stream lacks fail with [`io::ErrorKind::Unsupported`]. The failure is
/// the signal callers rely on to detect capability, so an unsupported
/// operation must never silently no-op or return an approximation.
pub trait StreamMeta {
    /// Whether the stream supports reading.
    fn can_read(&self) -> bool;

    /// Whether the stream supports seeking and position queries.
    fn can_seek(&self) -> bool;

    /// Whether the stream supports writing.
    fn can_write(&self) -> bool;

    /// Total length of the stream in bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::Unsupported`] when the length is not
    /// knowable in advance.
    fn byte_len(&self) -> io::Result<u64>;

    /// Current position in bytes from the start of the stream.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::Unsupported`] on forward-only streams.
    fn position(&self) -> io::Result<u64>;

    /// Moves the stream to an absolute byte position.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::Unsupported`] on forward-only streams.
    fn set_position(&mut self, pos: u64) -> io::Result<()>;

    /// Truncates or extends the stream to `len` bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::Unsupported`] on fixed-size or
    /// read-only streams.
    fn set_len(&mut self, len: u64) -> io::Result<()>;
}

/// Growable in-memory stream: fully readable, seekable, and writable.
impl StreamMeta for Cursor<Vec<u8>> {
    fn can_read(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn byte_len(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn position(&self) -> io::Result<u64> {
        Ok(Cursor::position(self))
    }

    fn set_position(&mut self, pos: u64) -> io::Result<()> {
        Cursor::set_position(self, pos);
        Ok(())
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length overflows usize"))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

/// Fixed-size in-memory stream: writes overwrite in place, no resizing.
impl StreamMeta for Cursor<Box<[u8]>> {
    fn can_read(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn byte_len(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn position(&self) -> io::Result<u64> {
        Ok(Cursor::position(self))
    }

    fn set_position(&mut self, pos: u64) -> io::Result<()> {
        Cursor::set_position(self, pos);
        Ok(())
    }

    fn set_len(&mut self, _len: u64) -> io::Result<()> {
        Err(unsupported("set_len"))
    }
}

/// Borrowed in-memory stream: read-only view over foreign bytes.
impl StreamMeta for Cursor<&[u8]> {
    fn can_read(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        false
    }

    fn byte_len(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn position(&self) -> io::Result<u64> {
        Ok(Cursor::position(self))
    }

    fn set_position(&mut self, pos: u64) -> io::Result<()> {
        Cursor::set_position(self, pos);
        Ok(())
    }

    fn set_len(&mut self, _len: u64) -> io::Result<()> {
        Err(unsupported("set_len"))
    }
}
