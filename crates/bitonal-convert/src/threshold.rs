//! Dark/light classification for bitonal quantization.
//!
//! A pixel is "dark" (its Mono1 bit is set) when its intensity is below
//! [`DARK_THRESHOLD`]. A surface reflecting about 18% of reference white
//! looks roughly half as bright as white, and `floor(255 * 0.18) = 46`.
//!
//! Colour pixels are reduced to intensity with Rec. 601 luma weights in
//! integer fixed point, so every result is reproducible bit for bit.

/// Intensities strictly below this value are classified dark.
pub const DARK_THRESHOLD: u8 = 46;

/// Luma weights in thousandths. They sum to exactly 1000.
pub const LUMA_RED: u32 = 299;
pub const LUMA_GREEN: u32 = 587;
pub const LUMA_BLUE: u32 = 114;

/// Gray value implied by a set Mono1 bit.
pub const DARK_GRAY: u8 = 0;
/// Gray value implied by a clear Mono1 bit.
pub const LIGHT_GRAY: u8 = 255;

/// Whether an 8-bit intensity is classified dark.
#[inline]
pub const fn is_dark(intensity: u8) -> bool {
    intensity < DARK_THRESHOLD
}

/// Perceptual brightness of an RGB triple on the 0-255 scale.
#[inline]
pub const fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_RED * r as u32 + LUMA_GREEN * g as u32 + LUMA_BLUE * b as u32) / 1000) as u8
}

/// Whether an RGB triple is classified dark.
#[inline]
pub const fn is_dark_rgb(r: u8, g: u8, b: u8) -> bool {
    is_dark(luma(r, g, b))
}

/// Gray value a Mono1 bit stands for when it is blended against.
#[inline]
pub const fn implied_gray(dark: bool) -> u8 {
    if dark {
        DARK_GRAY
    } else {
        LIGHT_GRAY
    }
}

/// Blend `src` over `dst` with coverage `alpha` (both on the 0-255 scale).
///
/// Uses an exact integer division by 255, never a `>> 8` approximation.
#[inline]
pub const fn blend_over(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8
}
