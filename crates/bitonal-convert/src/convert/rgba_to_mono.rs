//! RGBA32 to Mono1 quantization and alpha compositing.

use super::{debug_check_geometry, Composer, PixelConverter};
use crate::bits::{clear_padding, full_bytes, packed_len, CLEAR_BIT, SET_BIT};
use crate::format::PixelFormat;
use crate::threshold::{blend_over, implied_gray, is_dark, luma};

/// Index of the alpha channel within an RGBA32 pixel.
pub const ALPHA_CHANNEL: usize = 3;

const LOST_CHANNELS: [usize; 1] = [ALPHA_CHANNEL];

/// Thresholds pixel luma to bits, and composites translucent pixels.
///
/// `convert` ignores alpha entirely: each pixel's luma is compared against
/// the dark threshold and packed MSB first.
///
/// `compose` treats the existing destination bit as a gray backdrop (0 when
/// set, 255 when clear) and blends the source over it:
///
/// - alpha 0 leaves the destination bit unchanged
/// - alpha 255 overwrites it exactly as `convert` would
/// - anything in between thresholds
///   `(luma * alpha + backdrop * (255 - alpha)) / 255`
///
/// Both paths zero the padding bits of the last byte. Alpha has no
/// representation in Mono1 and is reported through `lost_channels`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgba32ToMono1;

impl PixelConverter for Rgba32ToMono1 {
    fn source(&self) -> PixelFormat {
        PixelFormat::Rgba32
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);

        let whole = full_bytes(count);
        for (out, chunk) in dst[..whole].iter_mut().zip(src.chunks_exact(32)) {
            *out = pack(chunk);
        }

        if count > whole * 8 {
            dst[whole] = pack(&src[whole * 32..count * 4]);
        }
        clear_padding(dst, count);
    }

    fn composer(&self) -> Option<&dyn Composer> {
        Some(self)
    }

    fn lost_channels(&self) -> &'static [usize] {
        &LOST_CHANNELS
    }
}

impl Composer for Rgba32ToMono1 {
    fn compose(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);

        for byte_index in 0..packed_len(count) {
            let first = byte_index * 8;
            let bits = (count - first).min(8);
            let mut byte = dst[byte_index];

            for bit in 0..bits {
                let px = &src[(first + bit) * 4..(first + bit) * 4 + 4];
                let dark = match px[ALPHA_CHANNEL] {
                    0 => continue,
                    255 => is_dark(luma(px[0], px[1], px[2])),
                    alpha => {
                        let backdrop = implied_gray(byte & SET_BIT[bit] != 0);
                        let effective = blend_over(luma(px[0], px[1], px[2]), backdrop, alpha);
                        is_dark(effective)
                    }
                };
                if dark {
                    byte |= SET_BIT[bit];
                } else {
                    byte &= CLEAR_BIT[bit];
                }
            }

            dst[byte_index] = byte;
        }
        clear_padding(dst, count);
    }
}

/// Pack up to 8 RGBA pixels into one byte, MSB first.
#[inline]
fn pack(pixels: &[u8]) -> u8 {
    pixels
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| is_dark(luma(px[0], px[1], px[2])))
        .fold(0, |byte, (bit, _)| byte | SET_BIT[bit])
}
