//! PNG previews of raw pixel buffers.
//!
//! Pixels are laid out in rows of a caller-chosen width. A short last row
//! is padded with white.

use crate::error::ConvertError;
use crate::services::converter_registry::ConverterRegistry;
use bitonal_convert::PixelFormat;
use std::io::Cursor;

/// Encode `count` pixels of `buf` as a PNG image `width` pixels wide.
///
/// Mono1 buffers are expanded through the registered Mono1 to Gray8
/// converter. GrayWhite8 is inverted so ink shows as black.
pub fn encode_preview(
    registry: &ConverterRegistry,
    format: PixelFormat,
    buf: &[u8],
    count: usize,
    width: u32,
) -> Result<Vec<u8>, ConvertError> {
    if width == 0 {
        return Err(ConvertError::PreviewWidth(width));
    }

    let needed = format
        .checked_bytes_for(count)
        .ok_or(ConvertError::TooManyPixels {
            count,
            max: usize::MAX / format.bits_per_pixel(),
        })?;
    if buf.len() < needed {
        return Err(ConvertError::SourceTooSmall {
            format,
            count,
            needed,
            actual: buf.len(),
        });
    }

    let rows = count.div_ceil(width as usize).max(1);
    let height = u32::try_from(rows).map_err(|_| ConvertError::TooManyPixels {
        count,
        max: (u32::MAX as usize).saturating_mul(width as usize),
    })?;
    let total = rows * width as usize;

    let (color_type, data) = match format {
        PixelFormat::Mono1 => {
            let converter = registry
                .lookup(PixelFormat::Mono1, PixelFormat::Gray8)
                .ok_or(ConvertError::NoRoute {
                    from: PixelFormat::Mono1,
                    to: PixelFormat::Gray8,
                })?;
            let mut gray = vec![0u8; count];
            converter.convert(buf, &mut gray, count);
            gray.resize(total, 0xFF);
            (png::ColorType::Grayscale, gray)
        }
        PixelFormat::Gray8 => {
            let mut gray = buf[..count].to_vec();
            gray.resize(total, 0xFF);
            (png::ColorType::Grayscale, gray)
        }
        PixelFormat::GrayWhite8 => {
            let mut gray: Vec<u8> = buf[..count].iter().map(|&v| !v).collect();
            gray.resize(total, 0xFF);
            (png::ColorType::Grayscale, gray)
        }
        PixelFormat::Rgba32 => {
            let mut rgba = buf[..count * 4].to_vec();
            rgba.resize(total * 4, 0xFF);
            (png::ColorType::Rgba, rgba)
        }
    };

    let png = encode_png(width, height, color_type, &data)?;
    tracing::debug!(
        format = %format,
        width,
        height,
        bytes = png.len(),
        "Encoded preview"
    );
    Ok(png)
}

fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
