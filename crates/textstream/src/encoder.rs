//! The encoding-engine seam: a stateful character-to-byte converter driven
//! one bounded chunk at a time.

use crate::error::EncodeError;

/// Outcome of a single [`TextEncoder::encode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeResult {
    /// Bytes of the source slice consumed. Always lands on a character
    /// boundary, and may be less than the slice length when the destination
    /// buffer could not hold the encoded form of every character offered.
    pub consumed: usize,
    /// Bytes written to the destination buffer.
    pub written: usize,
    /// The engine still holds output it could not fit into the destination
    /// buffer (or deferred state awaiting the final flush). The caller must
    /// keep calling `encode`, with an empty source slice if no input
    /// remains, until this is `false`.
    pub pending: bool,
}

/// A stateful text-to-bytes encoding engine.
///
/// Implementations are driven with strictly increasing, non-overlapping
/// slices of one source text, in order. `last` is `true` from the call that
/// reaches the end of the source onward, telling the engine to flush any
/// held-back state; it stays `true` on follow-up calls when earlier output
/// did not fit.
///
/// Engines whose code units need look-ahead carry that state internally
/// between calls; callers never split the source below character
/// granularity.
pub trait TextEncoder {
    /// Encode a run of characters from `src` into `dst`.
    ///
    /// Must make progress whenever `dst` can hold at least
    /// [`max_bytes_per_char`](Self::max_bytes_per_char) bytes: consume at
    /// least one character, write at least one byte, or clear a pending
    /// flush.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the engine cannot represent the input;
    /// the engine's state after a failure is unspecified.
    fn encode(&mut self, src: &str, dst: &mut [u8], last: bool)
    -> Result<EncodeResult, EncodeError>;

    /// Worst-case encoded size of any single character, in bytes.
    ///
    /// Used to validate that a staging buffer is large enough for every
    /// encode call to make progress.
    fn max_bytes_per_char(&self) -> usize;
}

/// Byte length of the first `budget_chars` characters of `src` (all of
/// `src` when it is shorter). Never splits a character.
fn char_budget_prefix(src: &str, budget_chars: usize) -> usize {
    match src.char_indices().nth(budget_chars) {
        Some((idx, _)) => idx,
        None => src.len(),
    }
}

/// UTF-8 engine. The source is already UTF-8, so encoding is a bounded
/// copy ending on a character boundary.
#[derive(Debug, Default)]
pub(crate) struct Utf8Encoder;

impl TextEncoder for Utf8Encoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        _last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        let mut end = src.len().min(dst.len());
        while !src.is_char_boundary(end) {
            end -= 1;
        }
        dst[..end].copy_from_slice(&src.as_bytes()[..end]);
        Ok(EncodeResult {
            consumed: end,
            written: end,
            pending: end < src.len(),
        })
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}

/// UTF-16 engine, little- or big-endian, without a byte order mark.
/// Supplementary-plane characters become surrogate pairs.
#[derive(Debug)]
pub(crate) struct Utf16Encoder {
    pub(crate) big_endian: bool,
}

impl TextEncoder for Utf16Encoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        _last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        let mut consumed = 0;
        let mut written = 0;
        let mut units = [0u16; 2];
        for ch in src.chars() {
            let encoded = ch.encode_utf16(&mut units);
            let need = encoded.len() * 2;
            if written + need > dst.len() {
                break;
            }
            for unit in encoded.iter() {
                let bytes = if self.big_endian {
                    unit.to_be_bytes()
                } else {
                    unit.to_le_bytes()
                };
                dst[written..written + 2].copy_from_slice(&bytes);
                written += 2;
            }
            consumed += ch.len_utf8();
        }
        Ok(EncodeResult {
            consumed,
            written,
            pending: consumed < src.len(),
        })
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}

/// UTF-32 engine, little- or big-endian, without a byte order mark.
/// Fixed four bytes per character.
#[derive(Debug)]
pub(crate) struct Utf32Encoder {
    pub(crate) big_endian: bool,
}

impl TextEncoder for Utf32Encoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        _last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        let budget = dst.len() / 4;
        let end = char_budget_prefix(src, budget);
        let mut written = 0;
        for ch in src[..end].chars() {
            let bytes = if self.big_endian {
                u32::from(ch).to_be_bytes()
            } else {
                u32::from(ch).to_le_bytes()
            };
            dst[written..written + 4].copy_from_slice(&bytes);
            written += 4;
        }
        Ok(EncodeResult {
            consumed: end,
            written,
            pending: end < src.len(),
        })
    }

    fn max_bytes_per_char(&self) -> usize {
        4
    }
}
