//! Naive per-bit reference conversions.
//!
//! These define correct output for the optimised converters. They favour
//! obviousness over speed and are used by tests and benchmarks to prove the
//! fast paths byte-identical.

use crate::bits::{get_bit, packed_len, put_bit};
use crate::threshold::is_dark;

/// RGBA written for a set Mono1 bit.
pub const RGBA_DARK: [u8; 4] = [0, 0, 0, 255];
/// RGBA written for a clear Mono1 bit.
pub const RGBA_LIGHT: [u8; 4] = [255, 255, 255, 255];

/// Expand Mono1 to RGBA32 one bit at a time.
pub fn mono1_to_rgba32(src: &[u8], dst: &mut [u8], count: usize) {
    for i in 0..count {
        let px = if get_bit(src, i) { RGBA_DARK } else { RGBA_LIGHT };
        dst[i * 4..i * 4 + 4].copy_from_slice(&px);
    }
}

/// Expand Mono1 to one byte per pixel, writing `set` or `clear` per bit.
pub fn mono1_to_bytes(src: &[u8], dst: &mut [u8], count: usize, set: u8, clear: u8) {
    for (i, out) in dst[..count].iter_mut().enumerate() {
        *out = if get_bit(src, i) { set } else { clear };
    }
}

/// Pack Gray8 into Mono1 one pixel at a time, padding cleared.
pub fn gray8_to_mono1(src: &[u8], dst: &mut [u8], count: usize) {
    dst[..packed_len(count)].fill(0);
    for (i, &v) in src[..count].iter().enumerate() {
        put_bit(dst, i, is_dark(v));
    }
}
