use std::io::Read;

/// Drains `stream` with fixed-size read requests until it reports
/// end-of-data, asserting no read ever exceeds its request.
pub(crate) fn drain(mut stream: impl Read, step: usize) -> Vec<u8> {
    assert!(step > 0);
    let mut out = Vec::new();
    let mut buf = vec![0u8; step];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        assert!(n <= step, "read returned {n} bytes for a {step}-byte request");
        out.extend_from_slice(&buf[..n]);
    }
    out
}

/// UTF-16 reference bytes computed independently of the crate's engines.
pub(crate) fn utf16_bytes(text: &str, big_endian: bool) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| {
            if big_endian {
                unit.to_be_bytes()
            } else {
                unit.to_le_bytes()
            }
        })
        .collect()
}

/// UTF-32 reference bytes computed independently of the crate's engines.
pub(crate) fn utf32_bytes(text: &str, big_endian: bool) -> Vec<u8> {
    text.chars()
        .flat_map(|ch| {
            if big_endian {
                u32::from(ch).to_be_bytes()
            } else {
                u32::from(ch).to_le_bytes()
            }
        })
        .collect()
}
