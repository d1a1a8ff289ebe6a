// domain_tests.rs wraps its tests in a module of the same name
#![allow(clippy::module_inception)]

//! bitonal-convert: bit-exact pixel conversions for 1-bit displays
//!
//! This crate converts raster buffers between 1-bit packed monochrome
//! ([`PixelFormat::Mono1`]) and 8-bit grayscale, 8-bit ink coverage and
//! 32-bit RGBA encodings.
//!
//! # Quick Start
//!
//! ```
//! use bitonal_convert::{Gray8ToMono1, PixelConverter, PixelFormat};
//!
//! let gray = [0u8, 255, 45, 46, 0, 0, 0, 0, 255, 255];
//! let mut packed = vec![0u8; PixelFormat::Mono1.bytes_for(gray.len())];
//!
//! Gray8ToMono1.convert(&gray, &mut packed, gray.len());
//! assert_eq!(packed, [0b1010_1111, 0b0000_0000]);
//! ```
//!
//! # Buffers
//!
//! The crate never allocates pixel memory. Callers size both buffers with
//! [`PixelFormat::bytes_for`] and pass the pixel count explicitly. Mono1
//! buffers are packed 8 pixels per byte, most significant bit first; a set
//! bit is dark ink. After any conversion into Mono1 the bits of the last byte
//! past the pixel count are zero.
//!
//! # Quantization
//!
//! Gray and colour pixels are classified dark when their intensity is below
//! [`threshold::DARK_THRESHOLD`] (46). Colour is reduced to intensity with
//! integer Rec. 601 luma weights. See [`threshold`] for the exact arithmetic.
//!
//! # Compositing
//!
//! [`Rgba32ToMono1`] also implements [`Composer`], blending translucent
//! pixels over the existing bits with an exact divide-by-255. Alpha itself
//! cannot be stored in Mono1, which the converter reports through
//! [`PixelConverter::lost_channels`].

pub mod bits;
pub mod convert;
pub mod format;
pub mod threshold;


pub use convert::{
    Composer, Gray8ToMono1, Mono1Copy, Mono1ToGray8, Mono1ToGrayWhite8, Mono1ToRgba32,
    PixelConverter, Rgba32ToMono1, ALPHA_CHANNEL,
};
pub use format::{ParseFormatError, PixelFormat};
