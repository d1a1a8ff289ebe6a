//! Pixel format identities.
//!
//! [`PixelFormat`] is the key every converter and registry table is indexed
//! by. It carries the bit-depth metadata callers need to size buffers before
//! invoking a conversion.

use std::fmt;
use std::str::FromStr;

/// A raster pixel encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PixelFormat {
    /// 1 bit per pixel, 8 pixels per byte, MSB first. A set bit is dark ink.
    Mono1,
    /// 8-bit grayscale intensity, 0 = black, 255 = white.
    Gray8,
    /// 8-bit ink coverage, 0 = no ink, 255 = full ink.
    GrayWhite8,
    /// 32-bit RGBA, one byte per channel in R, G, B, A order.
    Rgba32,
}

impl PixelFormat {
    /// Number of built-in formats.
    pub const COUNT: usize = 4;

    /// Every built-in format, in registration order.
    pub const ALL: [PixelFormat; Self::COUNT] = [
        PixelFormat::Mono1,
        PixelFormat::Gray8,
        PixelFormat::GrayWhite8,
        PixelFormat::Rgba32,
    ];

    /// Stable lowercase name, used on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Mono1 => "mono1",
            PixelFormat::Gray8 => "gray8",
            PixelFormat::GrayWhite8 => "graywhite8",
            PixelFormat::Rgba32 => "rgba32",
        }
    }

    pub const fn bits_per_pixel(self) -> usize {
        match self {
            PixelFormat::Mono1 => 1,
            PixelFormat::Gray8 | PixelFormat::GrayWhite8 => 8,
            PixelFormat::Rgba32 => 32,
        }
    }

    /// Channel names in storage order.
    pub const fn channels(self) -> &'static [&'static str] {
        match self {
            PixelFormat::Mono1 => &["ink"],
            PixelFormat::Gray8 => &["gray"],
            PixelFormat::GrayWhite8 => &["ink"],
            PixelFormat::Rgba32 => &["red", "green", "blue", "alpha"],
        }
    }

    /// Whether the format carries transparency.
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba32)
    }

    /// Bytes needed to hold `count` pixels: `ceil(count * bpp / 8)`.
    ///
    /// ```
    /// use bitonal_convert::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::Mono1.bytes_for(10), 2);
    /// assert_eq!(PixelFormat::Rgba32.bytes_for(10), 40);
    /// ```
    pub const fn bytes_for(self, count: usize) -> usize {
        (count * self.bits_per_pixel()).div_ceil(8)
    }

    /// [`bytes_for`](Self::bytes_for), or `None` when the bit count overflows `usize`.
    pub const fn checked_bytes_for(self, count: usize) -> Option<usize> {
        match count.checked_mul(self.bits_per_pixel()) {
            Some(bits) => Some(bits.div_ceil(8)),
            None => None,
        }
    }

    /// Dense index into [`PixelFormat::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError {
    name: String,
}

impl ParseFormatError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown pixel format '{}' (expected mono1, gray8, graywhite8 or rgba32)",
            self.name
        )
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for PixelFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono1" | "mono" | "bitonal" => Ok(PixelFormat::Mono1),
            "gray8" | "gray" | "grey8" => Ok(PixelFormat::Gray8),
            "graywhite8" | "greywhite8" => Ok(PixelFormat::GrayWhite8),
            "rgba32" | "rgba" => Ok(PixelFormat::Rgba32),
            _ => Err(ParseFormatError {
                name: s.to_string(),
            }),
        }
    }
}
