//! Bit packing tables for MSB-first 1-bit buffers.
//!
//! Pixel `i` of a packed buffer lives in byte `i / 8` at bit position
//! `7 - (i % 8)`, so the leftmost pixel is the most significant bit.

/// `SET_BIT[i]` has only the bit for pixel `i` of a byte set.
pub const SET_BIT: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// `CLEAR_BIT[i]` has every bit set except the one for pixel `i`.
pub const CLEAR_BIT: [u8; 8] = [0x7F, 0xBF, 0xDF, 0xEF, 0xF7, 0xFB, 0xFD, 0xFE];

/// `LEADING_MASK[k]` keeps the first `k` pixels of a byte and zeroes the rest.
pub const LEADING_MASK: [u8; 9] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF];

/// Number of whole bytes covered by `count` pixels.
#[inline]
pub const fn full_bytes(count: usize) -> usize {
    count / 8
}

/// Number of pixels in the trailing partial byte (0 when byte-aligned).
#[inline]
pub const fn trailing_bits(count: usize) -> usize {
    count % 8
}

/// Bytes occupied by `count` packed pixels.
#[inline]
pub const fn packed_len(count: usize) -> usize {
    count.div_ceil(8)
}

/// Zero the padding bits past `count` in the last byte of a packed buffer.
///
/// Does nothing when `count` is a multiple of 8.
#[inline]
pub fn clear_padding(dst: &mut [u8], count: usize) {
    let tail = trailing_bits(count);
    if tail != 0 {
        dst[full_bytes(count)] &= LEADING_MASK[tail];
    }
}

/// Read pixel `index` of a packed buffer. `true` means the bit is set.
#[inline]
pub fn get_bit(buf: &[u8], index: usize) -> bool {
    buf[index / 8] & SET_BIT[index % 8] != 0
}

/// Write pixel `index` of a packed buffer.
#[inline]
pub fn put_bit(buf: &mut [u8], index: usize, set: bool) {
    if set {
        buf[index / 8] |= SET_BIT[index % 8];
    } else {
        buf[index / 8] &= CLEAR_BIT[index % 8];
    }
}
