//! Mono1 to Mono1 copy.

use super::{debug_check_geometry, PixelConverter};
use crate::bits::{full_bytes, trailing_bits, LEADING_MASK};
use crate::format::PixelFormat;

/// Copies a packed buffer, masking off anything past `count` pixels.
///
/// Whole bytes are copied in bulk. The trailing partial byte is copied
/// through [`LEADING_MASK`], which zeroes the padding bits in the same
/// store, so source garbage past `count` never reaches the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mono1Copy;

impl PixelConverter for Mono1Copy {
    fn source(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn destination(&self) -> PixelFormat {
        PixelFormat::Mono1
    }

    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize) {
        debug_check_geometry(self, src, dst, count);

        let whole = full_bytes(count);
        dst[..whole].copy_from_slice(&src[..whole]);

        let tail = trailing_bits(count);
        if tail != 0 {
            dst[whole] = src[whole] & LEADING_MASK[tail];
        }
    }
}
