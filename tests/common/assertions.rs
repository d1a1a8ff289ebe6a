//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert two buffers are equal, with a readable diff on failure
pub fn assert_buffer(actual: &[u8], expected: &[u8]) {
    assert_eq!(actual, expected, "Buffer mismatch");
}

/// Assert the bits past `count` in the last Mono1 byte are clear
pub fn assert_padding_clear(packed: &[u8], count: usize) {
    let tail = count % 8;
    if tail == 0 {
        return;
    }
    let last = packed[count / 8];
    assert_eq!(
        last & (0xFFu8 >> tail),
        0,
        "Padding bits set in last byte {last:#010b} for {count} pixels"
    );
}

/// Assert data is a PNG image
pub fn assert_png(data: &[u8]) {
    assert!(
        data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        data.len(),
        &data[..8.min(data.len())]
    );
}
