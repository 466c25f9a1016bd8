//! Bridge from [`encoding_rs`] encoders to the [`TextEncoder`] seam, for
//! Encoding Standard output encodings such as windows-1252, Shift_JIS, or
//! ISO-2022-JP.

use encoding_rs::EncoderResult;

use crate::{
    encoder::{EncodeResult, TextEncoder},
    error::EncodeError,
};

pub(crate) struct LegacyEncoder {
    inner: encoding_rs::Encoder,
}

impl LegacyEncoder {
    pub(crate) fn new(encoding: &'static encoding_rs::Encoding) -> Self {
        Self {
            inner: encoding.new_encoder(),
        }
    }
}

impl TextEncoder for LegacyEncoder {
    fn encode(
        &mut self,
        src: &str,
        dst: &mut [u8],
        last: bool,
    ) -> Result<EncodeResult, EncodeError> {
        // The without-replacement variant surfaces unmappable characters
        // instead of writing numeric character references.
        match self.inner.encode_from_utf8_without_replacement(src, dst, last) {
            (EncoderResult::InputEmpty, consumed, written) => Ok(EncodeResult {
                consumed,
                written,
                pending: false,
            }),
            (EncoderResult::OutputFull, consumed, written) => Ok(EncodeResult {
                consumed,
                written,
                pending: true,
            }),
            (EncoderResult::Unmappable(ch), _, _) => Err(EncodeError::Unmappable(ch)),
        }
    }

    fn max_bytes_per_char(&self) -> usize {
        // Worst case for one scalar value (four UTF-8 bytes). The length
        // query is None only on arithmetic overflow, which 4 cannot cause.
        self.inner
            .max_buffer_length_from_utf8_without_replacement(4)
            .unwrap_or(16)
    }
}
