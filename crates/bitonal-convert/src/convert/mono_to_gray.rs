//! Mono1 to 8-bit expansions.
//!
//! The two destination formats use opposite polarities, so each converter
//! carries its own explicit level table rather than inverting the other.

use super::{debug_check_geometry, PixelConverter};
use crate::bits::SET_BIT;
use crate::format::PixelFormat;

/// Output byte for a clear bit and for a set bit, in that order.
type Levels = [u8; 2];

/// Gray8: clear bit is white paper (255), set bit is black ink (0).
const GRAY8_LEVELS: Levels = [255, 0];

/// GrayWhite8: clear bit is no coverage (0), set bit is full coverage (255).
const GRAY_WHITE8_LEVELS: Levels = [0, 255];

/// Expands Mono1 to Gray8 intensity: bit 0 becomes 255, bit 1 becomes 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mono1ToGray8;

impl PixelConverter for Mono1ToGray8 {
    fn source(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::Gray8
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);
        expand(src, dst, count, GRAY8_LEVELS);
    }
}

/// Expands Mono1 to GrayWhite8 coverage: bit 0 becomes 0, bit 1 becomes 255.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mono1ToGrayWhite8;

impl PixelConverter for Mono1ToGrayWhite8 {
    fn source(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::GrayWhite8
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);
        expand(src, dst, count, GRAY_WHITE8_LEVELS);
    }
}

/// One destination byte per source bit, MSB first within each source byte.
#[inline]
fn expand(src: &[u8], dst: &mut [u8], count: usize, levels: Levels) {
    for (byte, out) in src.iter().zip(dst[..count].chunks_mut(8)) {
        for (bit, value) in out.iter_mut().enumerate() {
            *value = levels[usize::from(byte & SET_BIT[bit] != 0)];
        }
    }
}
