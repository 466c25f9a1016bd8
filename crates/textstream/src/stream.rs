//! The incremental encoding stream implementation.
//!
//! This module provides [`StringStream`], a read-only, forward-only
//! [`io::Read`] source that encodes a backing string into bytes on the fly,
//! staging the output through a fixed-size buffer instead of materializing
//! the whole encoded payload.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use std::io::Read;
//!
//! use textstream::StringStream;
//!
//! let mut stream = StringStream::new("Ñoño español");
//! let mut bytes = Vec::new();
//! stream.read_to_end(&mut bytes).unwrap();
//! assert_eq!(bytes, "Ñoño español".as_bytes());
//! ```

use std::{
    borrow::Cow,
    fmt,
    io::{self, Read, Seek, SeekFrom, Write},
};

use crate::{
    encoder::TextEncoder,
    encoding::Encoding,
    error::unsupported,
    meta::StreamMeta,
};

/// Characters offered to the engine per encode call. Deliberately
/// independent of the byte-buffer capacity so encode granularity is
/// decoupled from read granularity.
const CHUNK_CHARS: usize = 1024;

/// Default capacity of the staging byte buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// A read-only, non-seekable stream that encodes a string into bytes on
/// the fly.
///
/// Reads drain an internal staging buffer; when it runs dry, the stream
/// encodes the next run of up to 1024 source characters into it and
/// continues. Peak memory stays bounded by the staging buffer regardless of
/// source length, so arbitrarily large texts stream without ever holding
/// their full encoded form.
///
/// The stream is strictly sequential and single-pass: no seeking, no
/// writing, no length or position queries (the encoded size is not knowable
/// without running the engine, so it is reported as unsupported rather than
/// approximated). Flushing is a successful no-op. Every operation takes
/// `&mut self`; share an instance across threads only behind external
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use std::io::Read;
///
/// use textstream::{Encoding, StringStream};
///
/// let mut stream = StringStream::with_encoding("hi", Encoding::Utf16Le);
/// let mut bytes = Vec::new();
/// stream.read_to_end(&mut bytes).unwrap();
/// assert_eq!(bytes, [b'h', 0, b'i', 0]);
/// ```
pub struct StringStream<'a> {
    source: Cow<'a, str>,
    encoder: Box<dyn TextEncoder>,
    /// Byte offset into `source`; always a character boundary, never
    /// decreases.
    char_position: usize,
    byte_buffer: Box<[u8]>,
    byte_buffer_len: usize,
    byte_buffer_pos: usize,
    /// The engine holds output or deferred state that another encode call
    /// must deliver before the stream ends.
    encoder_pending: bool,
}

impl<'a> StringStream<'a> {
    /// Creates a stream over `source` using UTF-8.
    #[must_use]
    pub fn new(source: impl Into<Cow<'a, str>>) -> Self {
        Self::with_encoding(source, Encoding::Utf8)
    }

    /// Creates a stream over `source` using the given encoding and the
    /// default staging-buffer capacity.
    #[must_use]
    pub fn with_encoding(source: impl Into<Cow<'a, str>>, encoding: Encoding) -> Self {
        Self::with_encoder(source, encoding.new_encoder(), DEFAULT_BUFFER_SIZE)
    }

    /// Creates a stream over `source` with an explicit staging-buffer
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than the encoding's worst-case
    /// bytes-per-character, which would leave a refill unable to make
    /// progress.
    #[must_use]
    pub fn with_capacity(
        source: impl Into<Cow<'a, str>>,
        encoding: Encoding,
        capacity: usize,
    ) -> Self {
        Self::with_encoder(source, encoding.new_encoder(), capacity)
    }

    /// Creates a stream over `source` driven by a caller-supplied engine.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than the engine's worst-case
    /// bytes-per-character.
    #[must_use]
    pub fn with_encoder(
        source: impl Into<Cow<'a, str>>,
        encoder: Box<dyn TextEncoder>,
        capacity: usize,
    ) -> Self {
        assert!(
            capacity >= encoder.max_bytes_per_char(),
            "staging buffer capacity {capacity} cannot hold a worst-case character"
        );
        Self {
            source: source.into(),
            encoder,
            char_position: 0,
            byte_buffer: vec![0u8; capacity].into_boxed_slice(),
            byte_buffer_len: 0,
            byte_buffer_pos: 0,
            encoder_pending: false,
        }
    }

    /// The backing text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn at_end(&self) -> bool {
        self.char_position >= self.source.len() && !self.encoder_pending
    }

    /// Encodes the next chunk of the source into the staging buffer.
    /// Returns the number of bytes now available.
    fn refill(&mut self) -> io::Result<usize> {
        let remaining = &self.source[self.char_position..];
        let chunk_len = chunk_prefix_len(remaining, CHUNK_CHARS);
        let is_final = self.char_position + chunk_len >= self.source.len();

        let result = self
            .encoder
            .encode(&remaining[..chunk_len], &mut self.byte_buffer, is_final)
            .map_err(io::Error::from)?;

        if result.consumed == 0 && result.written == 0 && result.pending {
            return Err(crate::EncodeError::NoProgress.into());
        }

        self.char_position += result.consumed;
        self.byte_buffer_len = result.written;
        self.byte_buffer_pos = 0;
        self.encoder_pending = result.pending;
        Ok(result.written)
    }
}

impl Read for StringStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut total_copied = 0;

        while total_copied < buf.len() {
            if self.byte_buffer_pos >= self.byte_buffer_len {
                if self.at_end() {
                    break;
                }
                // A refill can legitimately yield nothing, e.g. an engine
                // holding characters back until its final flush. The
                // character cursor still advanced, so the next read resumes
                // where this one left off.
                if self.refill()? == 0 {
                    break;
                }
            }

            let n = usize::min(
                buf.len() - total_copied,
                self.byte_buffer_len - self.byte_buffer_pos,
            );
            buf[total_copied..total_copied + n]
                .copy_from_slice(&self.byte_buffer[self.byte_buffer_pos..self.byte_buffer_pos + n]);
            self.byte_buffer_pos += n;
            total_copied += n;
        }

        Ok(total_copied)
    }
}

impl Write for StringStream<'_> {
    /// Always fails: the stream is read-only.
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(unsupported("write"))
    }

    /// Succeeds immediately; there is no buffering on the write side.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for StringStream<'_> {
    /// Always fails: the stream is forward-only.
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(unsupported("seek"))
    }
}

impl StreamMeta for StringStream<'_> {
    fn can_read(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        false
    }

    fn can_write(&self) -> bool {
        false
    }

    fn byte_len(&self) -> io::Result<u64> {
        Err(unsupported("length query"))
    }

    fn position(&self) -> io::Result<u64> {
        Err(unsupported("position query"))
    }

    fn set_position(&mut self, _pos: u64) -> io::Result<()> {
        Err(unsupported("set_position"))
    }

    fn set_len(&mut self, _len: u64) -> io::Result<()> {
        Err(unsupported("set_len"))
    }
}

impl fmt::Debug for StringStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringStream")
            .field("source_len", &self.source.len())
            .field("char_position", &self.char_position)
            .field("byte_buffer_len", &self.byte_buffer_len)
            .field("byte_buffer_pos", &self.byte_buffer_pos)
            .field("encoder_pending", &self.encoder_pending)
            .finish_non_exhaustive()
    }
}

/// Byte length of the first `max_chars` characters of `s`, or all of `s`
/// when it is shorter.
fn chunk_prefix_len(s: &str, max_chars: usize) -> usize {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
