//! Test fixtures and constants.

/// Ten Gray8 pixels and their packed Mono1 form
pub mod gray_sample {
    pub const COUNT: usize = 10;

    pub const GRAY8: [u8; COUNT] = [0, 255, 45, 46, 0, 0, 0, 0, 255, 255];

    pub const MONO1: [u8; 2] = [0b1010_1111, 0b0000_0000];
}

/// Ten Mono1 pixels and their expansions
pub mod mono_sample {
    pub const COUNT: usize = 10;

    pub const MONO1: [u8; 2] = [0b1011_0000, 0b1100_0000];

    /// Expansion to Gray8: set bits are black
    pub const GRAY8: [u8; COUNT] = [0, 255, 0, 0, 255, 255, 255, 255, 0, 0];

    /// Expansion to GrayWhite8: set bits are full ink
    pub const GRAY_WHITE8: [u8; COUNT] = [255, 0, 255, 255, 0, 0, 0, 0, 255, 255];
}

pub const RGBA_DARK: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const RGBA_LIGHT: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Mono1 sample expanded to RGBA32
pub fn mono_sample_rgba() -> Vec<u8> {
    mono_sample::GRAY8
        .iter()
        .flat_map(|&v| if v == 0 { RGBA_DARK } else { RGBA_LIGHT })
        .collect()
}

/// RGBA pixel with the given gray level and alpha
pub fn rgba(gray: u8, alpha: u8) -> [u8; 4] {
    [gray, gray, gray, alpha]
}

/// Flatten RGBA pixels into one buffer
pub fn rgba_buffer(pixels: &[[u8; 4]]) -> Vec<u8> {
    pixels.iter().flatten().copied().collect()
}
