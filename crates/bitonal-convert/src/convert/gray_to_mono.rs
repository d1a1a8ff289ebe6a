//! Gray8 to Mono1 threshold quantization.

use super::{debug_check_geometry, PixelConverter};
use crate::bits::{clear_padding, full_bytes, SET_BIT};
use crate::format::PixelFormat;
use crate::threshold::is_dark;

/// Packs gray intensities into bits: below 46 sets the bit, otherwise clears it.
///
/// Eight source pixels fill one destination byte, MSB first. After packing,
/// the padding bits of a partially filled last byte are forced to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gray8ToMono1;

impl PixelConverter for Gray8ToMono1 {
    fn source(&self) -> PixelFormat {
        PixelFormat::Gray8
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);

        let whole = full_bytes(count);
        for (out, chunk) in dst[..whole].iter_mut().zip(src.chunks_exact(8)) {
            *out = pack(chunk);
        }

        if count > whole * 8 {
            dst[whole] = pack(&src[whole * 8..count]);
        }
        clear_padding(dst, count);
    }
}

/// Pack up to 8 intensities into one byte, MSB first.
#[inline]
fn pack(intensities: &[u8]) -> u8 {
    intensities
        .iter()
        .enumerate()
        .filter(|&(_, &v)| is_dark(v))
        .fold(0, |byte, (bit, _)| byte | SET_BIT[bit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut dst = [0u8; 1];
        Gray8ToMono1.convert(&[45, 46], &mut dst, 2);
        assert_eq!(dst, [0b1000_0000]);
    }

    #[test]
    fn test_full_byte_packing() {
        let src = [0, 255, 0, 255, 10, 100, 45, 46];
        let mut dst = [0u8; 1];
        Gray8ToMono1.convert(&src, &mut dst, 8);
        assert_eq!(dst, [0b1010_1010]);
    }

    #[test]
    fn test_partial_byte_clears_padding() {
        let src = [0u8; 11];
        let mut dst = [0xFF, 0xFF];
        Gray8ToMono1.convert(&src, &mut dst, 11);
        assert_eq!(dst, [0xFF, 0xE0]);
    }

    #[test]
    fn test_ignores_source_past_count() {
        let src = [255, 255, 0, 0, 0];
        let mut dst = [0xFF];
        Gray8ToMono1.convert(&src, &mut dst, 2);
        assert_eq!(dst, [0x00]);
    }

    #[test]
    fn test_zero_pixels_writes_nothing() {
        let mut dst = [0x42];
        Gray8ToMono1.convert(&[], &mut dst, 0);
        assert_eq!(dst, [0x42]);
    }
}
