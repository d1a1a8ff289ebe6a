//! Pixel converters for one `(source, destination)` format pair each.
//!
//! # Architecture
//!
//! Every converter is a stateless unit struct implementing
//! [`PixelConverter`]. Converters that blend onto existing destination
//! content also implement [`Composer`] and expose it through
//! [`PixelConverter::composer()`].
//!
//! | Converter | Source | Destination | Compose |
//! |-----------|--------|-------------|---------|
//! | [`Mono1Copy`] | Mono1 | Mono1 | no |
//! | [`Mono1ToRgba32`] | Mono1 | Rgba32 | no |
//! | [`Mono1ToGray8`] | Mono1 | Gray8 | no |
//! | [`Mono1ToGrayWhite8`] | Mono1 | GrayWhite8 | no |
//! | [`Gray8ToMono1`] | Gray8 | Mono1 | no |
//! | [`Rgba32ToMono1`] | Rgba32 | Mono1 | yes |
//!
//! # Buffer contract
//!
//! `src` must hold at least `source().bytes_for(count)` bytes and `dst` at
//! least `destination().bytes_for(count)` bytes. Sizes are not validated in
//! the conversion loops; a short slice panics on indexing. Callers that
//! need graceful errors validate geometry before converting.
//!
//! Every converter writing Mono1 leaves the padding bits of the last byte
//! zero, regardless of what the destination held before.

mod gray_to_mono;
mod mono_copy;
mod mono_to_gray;
mod mono_to_rgba;
pub mod reference;
mod rgba_to_mono;

pub use gray_to_mono::Gray8ToMono1;
pub use mono_copy::Mono1Copy;
pub use mono_to_gray::{Mono1ToGray8, Mono1ToGrayWhite8};
pub use mono_to_rgba::Mono1ToRgba32;
pub use rgba_to_mono::{Rgba32ToMono1, ALPHA_CHANNEL};

use crate::format::PixelFormat;

/// Converts `count` pixels from one format into another, overwriting `dst`.
pub trait PixelConverter: Send + Sync {
    /// Format read from `src`.
    fn source(&self) -> PixelFormat;

    /// Format written to `dst`.
    fn destination(&self) -> PixelFormat;

    /// Overwrite `dst` with the first `count` pixels of `src`.
    fn convert(&self, src: &[u8], dst: &mut [u8], count: usize);

    /// Blend-over variant, when the source format carries transparency.
    fn composer(&self) -> Option<&dyn Composer> {
        None
    }

    /// Source channel indices with no representation in the destination.
    fn lost_channels(&self) -> &'static [usize] {
        &[]
    }
}

/// Blends a translucent source layer onto existing destination pixels.
pub trait Composer: Send + Sync {
    /// Composite the first `count` pixels of `src` over `dst` in place.
    fn compose(&self, src: &[u8], dst: &mut [u8], count: usize);
}

/// Every built-in converter.
pub fn builtin() -> [&'static dyn PixelConverter; 6] {
    [
        &Mono1Copy,
        &Mono1ToRgba32,
        &Mono1ToGray8,
        &Mono1ToGrayWhite8,
        &Gray8ToMono1,
        &Rgba32ToMono1,
    ]
}

#[inline]
fn debug_check_geometry(converter: &dyn PixelConverter, src: &[u8], dst: &[u8], count: usize) {
    debug_assert!(
        src.len() >= converter.source().bytes_for(count),
        "{} source holds {} bytes, {} pixels need {}",
        converter.source(),
        src.len(),
        count,
        converter.source().bytes_for(count)
    );
    debug_assert!(
        dst.len() >= converter.destination().bytes_for(count),
        "{} destination holds {} bytes, {} pixels need {}",
        converter.destination(),
        dst.len(),
        count,
        converter.destination().bytes_for(count)
    );
}
