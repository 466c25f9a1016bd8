//! Engine-facing edge cases: held-back output, failures, stuck engines.

use std::io::{self, Read};

use encoding_rs::WINDOWS_1252;

use crate::{
    EncodeError, EncodeResult, Encoding, StringStream, TextEncoder,
    encoder::Utf8Encoder,
};

/// Consumes input without emitting until the final flush, then drains its
/// held bytes as fast as the destination allows. Models engines that need
/// look-ahead before committing output.
#[derive(Default)]
struct HoldbackEncoder {
    held: Vec<u8>,
}

impl TextEncoder for HoldbackEncoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        self.held.extend_from_slice(src.as_bytes());
        let written = if last {
            let n = self.held.len().min(dst.len());
            dst[..n].copy_from_slice(&self.held[..n]);
            self.held.drain(..n);
            n
        } else {
            0
        };
        Ok(EncodeResult {
            consumed: src.len(),
            written,
            pending: !self.held.is_empty(),
        })
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}

/// Fails the first encode call, then behaves like the UTF-8 engine.
#[derive(Default)]
struct FlakyEncoder {
    failed_once: bool,
    inner: Utf8Encoder,
}

impl TextEncoder for FlakyEncoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        if !self.failed_once {
            self.failed_once = true;
            return Err(EncodeError::Unmappable('☃'));
        }
        self.inner.encode(src, dst, last)
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}

/// Violates the progress contract: consumes nothing, writes nothing, and
/// still asks to be called again.
struct StuckEncoder;

impl TextEncoder for StuckEncoder {
    fn encode(
        &mut self,
        _src: &str,
        _dst: &mut [u8],
        _last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        Ok(EncodeResult {
            consumed: 0,
            written: 0,
            pending: true,
        })
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}

#[test]
fn zero_byte_refill_ends_the_read_and_the_next_read_resumes() {
    // Two encode chunks: the first (1024 chars) is held back entirely, so
    // the first read makes character progress but returns no bytes.
    let text = "x".repeat(1500);
    let mut stream =
        StringStream::with_encoder(text.as_str(), Box::new(HoldbackEncoder::default()), 4096);

    let mut buf = vec![0u8; 8192];
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
    assert_eq!(stream.read(&mut buf).unwrap(), 1500);
    assert_eq!(&buf[..1500], text.as_bytes());
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
}

#[test]
fn held_back_output_drains_through_a_small_buffer() {
    // The final flush is larger than the staging buffer, forcing repeated
    // flush-only refills with an empty source slice.
    let text = "y".repeat(1200);
    let mut stream =
        StringStream::with_encoder(text.as_str(), Box::new(HoldbackEncoder::default()), 256);

    let mut bytes = Vec::new();
    let mut buf = [0u8; 100];
    loop {
        match stream.read(&mut buf).unwrap() {
            0 if bytes.len() == text.len() => break,
            n => bytes.extend_from_slice(&buf[..n]),
        }
    }
    assert_eq!(bytes, text.as_bytes());
}

#[test]
fn engine_failure_propagates_and_leaves_the_stream_usable() {
    let text = "recoverable";
    let mut stream =
        StringStream::with_encoder(text, Box::new(FlakyEncoder::default()), 4096);

    let mut buf = [0u8; 64];
    let err = stream.read(&mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    // Cursors were untouched by the failure, so the retry sees the whole
    // source from the start.
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, text.as_bytes());
}

#[test]
fn unmappable_character_surfaces_from_a_real_engine() {
    let mut stream = StringStream::with_encoding("日本語", Encoding::Legacy(WINDOWS_1252));
    let mut buf = [0u8; 64];
    let err = stream.read(&mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn stuck_engine_is_reported_instead_of_spinning() {
    let mut stream = StringStream::with_encoder("abc", Box::new(StuckEncoder), 4096);
    let mut buf = [0u8; 8];
    let err = stream.read(&mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
#[should_panic(expected = "worst-case character")]
fn rejects_a_buffer_too_small_for_one_character() {
    let _ = StringStream::with_capacity("abc", Encoding::Utf8, 2);
}
