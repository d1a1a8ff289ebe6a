//! Mono1 to RGBA32 expansion with run fast paths.

use super::reference::{RGBA_DARK, RGBA_LIGHT};
use super::{debug_check_geometry, PixelConverter};
use crate::bits::SET_BIT;
use crate::format::PixelFormat;

/// Pixels covered by four uniform source bytes.
const WIDE_RUN: usize = 32;
/// Pixels covered by one uniform source byte.
const NARROW_RUN: usize = 8;

/// Expands each bit to an opaque black (set) or opaque white (clear) pixel.
///
/// # Algorithm
///
/// Three tiers, tried in order at each source byte boundary:
///
/// 1. At least 32 pixels remain and the next 4 source bytes are all `0xFF`
///    or all `0x00`: fill 32 destination pixels (128 bytes).
/// 2. At least 8 pixels remain and the next source byte is `0xFF` or `0x00`:
///    fill 8 destination pixels (32 bytes).
/// 3. Otherwise expand the remaining (at most 8) bits of the byte one at a
///    time.
///
/// Tiers 1 and 2 only skip work; the output is byte-identical to
/// [`reference::mono1_to_rgba32`](super::reference::mono1_to_rgba32).
#[derive(Debug, Clone, Copy, Default)]
pub struct Mono1ToRgba32;

impl PixelConverter for Mono1ToRgba32 {
    fn source(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::Rgba32
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);

        let mut pixel = 0;
        while pixel < count {
            let byte_index = pixel / 8;
            let remaining = count - pixel;

            if remaining >= WIDE_RUN {
                if let Some(color) = uniform_run(&src[byte_index..byte_index + 4]) {
                    fill(&mut dst[pixel * 4..(pixel + WIDE_RUN) * 4], color);
                    pixel += WIDE_RUN;
                    continue;
                }
            }

            if remaining >= NARROW_RUN {
                if let Some(color) = uniform_run(&src[byte_index..byte_index + 1]) {
                    fill(&mut dst[pixel * 4..(pixel + NARROW_RUN) * 4], color);
                    pixel += NARROW_RUN;
                    continue;
                }
            }

            let byte = src[byte_index];
            let bits = remaining.min(8);
            let out = &mut dst[pixel * 4..(pixel + bits) * 4];
            for (bit, px) in out.chunks_exact_mut(4).enumerate() {
                let color = if byte & SET_BIT[bit] != 0 {
                    RGBA_DARK
                } else {
                    RGBA_LIGHT
                };
                px.copy_from_slice(&color);
            }
            pixel += bits;
        }
    }
}

/// The fill colour when every byte is `0xFF` or every byte is `0x00`.
#[inline]
fn uniform_run(bytes: &[u8]) -> Option<[u8; 4]> {
    if bytes.iter().all(|&b| b == 0xFF) {
        Some(RGBA_DARK)
    } else if bytes.iter().all(|&b| b == 0x00) {
        Some(RGBA_LIGHT)
    } else {
        None
    }
}

#[inline]
fn fill(out: &mut [u8], color: [u8; 4]) {
    for px in out.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}
