//! Constructors exposing in-memory text and binary data as streams.
//!
//! Text has two routes: [`stream_from_str`] encodes lazily as the consumer
//! reads, while [`stream_from_str_copy`] encodes everything up front into a
//! memory stream. Binary data is wrapped directly, owned or borrowed.

use std::{fmt, io::Cursor};

use crate::{Encoding, StringStream, error::EncodeError};

/// Summary of an eager text-to-bytes conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingStats {
    /// Characters consumed from the input.
    pub chars_processed: usize,
    /// Bytes the encoded payload occupies. Differs from `chars_processed`
    /// for anything beyond single-byte encodings of ASCII.
    pub bytes_written: usize,
    /// Canonical name of the encoding used.
    pub encoding: &'static str,
}

impl fmt::Display for EncodingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "encoded {} chars to {} bytes as {}",
            self.chars_processed, self.bytes_written, self.encoding
        )
    }
}

/// Summary of a binary-data wrapping operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataStats {
    /// Bytes behind the returned stream.
    pub bytes_processed: usize,
    /// Whether the stream borrows the caller's bytes instead of copying.
    pub zero_copy: bool,
}

impl fmt::Display for DataStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} bytes, zero-copy: {}",
            self.bytes_processed, self.zero_copy
        )
    }
}

/// Exposes `text` as a lazily encoded read-only stream.
///
/// Nothing is encoded until the stream is read; memory stays bounded by the
/// stream's staging buffer regardless of text length.
///
/// # Examples
///
/// ```rust
/// use std::io::Read;
///
/// use textstream::{Encoding, stream_from_str};
///
/// let mut out = Vec::new();
/// stream_from_str("hello", Encoding::Utf8)
///     .read_to_end(&mut out)
///     .unwrap();
/// assert_eq!(out, b"hello");
/// ```
pub fn stream_from_str(text: &str, encoding: Encoding) -> StringStream<'_> {
    StringStream::with_encoding(text, encoding)
}

/// Eagerly encodes `text` and exposes the bytes as a fixed-size memory
/// stream.
///
/// The full encoded payload is materialized up front; prefer
/// [`stream_from_str`] for large texts.
///
/// # Errors
///
/// Returns [`EncodeError`] when the encoding cannot represent the input.
pub fn stream_from_str_copy(
    text: &str,
    encoding: Encoding,
) -> Result<Cursor<Box<[u8]>>, EncodeError> {
    let bytes = encoding.encode_to_vec(text)?;
    Ok(Cursor::new(bytes.into_boxed_slice()))
}

/// Like [`stream_from_str_copy`], additionally reporting what the
/// conversion did.
///
/// # Errors
///
/// Returns [`EncodeError`] when the encoding cannot represent the input.
pub fn stream_from_str_copy_with_stats(
    text: &str,
    encoding: Encoding,
) -> Result<(Cursor<Box<[u8]>>, EncodingStats), EncodeError> {
    let bytes = encoding.encode_to_vec(text)?;
    let stats = EncodingStats {
        chars_processed: text.chars().count(),
        bytes_written: bytes.len(),
        encoding: encoding.name(),
    };
    Ok((Cursor::new(bytes.into_boxed_slice()), stats))
}

/// Exposes owned bytes as a readable, writable, seekable memory stream.
#[must_use]
pub fn stream_from_bytes(data: Vec<u8>) -> Cursor<Vec<u8>> {
    Cursor::new(data)
}

/// Exposes borrowed bytes as a read-only memory stream without copying.
#[must_use]
pub fn stream_from_slice(data: &[u8]) -> Cursor<&[u8]> {
    Cursor::new(data)
}

/// Like [`stream_from_slice`], additionally reporting what was wrapped.
#[must_use]
pub fn stream_from_slice_with_stats(data: &[u8]) -> (Cursor<&[u8]>, DataStats) {
    let stats = DataStats {
        bytes_processed: data.len(),
        zero_copy: true,
    };
    (Cursor::new(data), stats)
}
