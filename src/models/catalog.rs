use bitonal_convert::PixelFormat;
use serde::Serialize;

/// Metadata callers need to size buffers for a pixel format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatDescriptor {
    #[serde(skip)]
    pub id: PixelFormat,
    pub name: &'static str,
    pub bits_per_pixel: usize,
    pub channels: &'static [&'static str],
    pub has_alpha: bool,
}

impl FormatDescriptor {
    pub fn of(id: PixelFormat) -> Self {
        Self {
            id,
            name: id.name(),
            bits_per_pixel: id.bits_per_pixel(),
            channels: id.channels(),
            has_alpha: id.has_alpha(),
        }
    }
}

/// Built-in formats, registered in this order at startup
const BUILTIN_FORMATS: [PixelFormat; PixelFormat::COUNT] = PixelFormat::ALL;

/// Catalog of known pixel formats
#[derive(Debug, Clone)]
pub struct FormatCatalog {
    formats: Vec<FormatDescriptor>,
}

impl FormatCatalog {
    /// Catalog holding every built-in format
    pub fn builtin() -> Self {
        Self {
            formats: BUILTIN_FORMATS
                .into_iter()
                .map(FormatDescriptor::of)
                .collect(),
        }
    }

    pub fn get(&self, id: PixelFormat) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|d| d.id == id)
    }

    /// Look up a format by name or alias
    pub fn find(&self, name: &str) -> Option<&FormatDescriptor> {
        let id: PixelFormat = name.parse().ok()?;
        self.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.formats.iter()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Bytes needed for `count` pixels of `id`, `None` if unknown or too large
    pub fn buffer_len(&self, id: PixelFormat, count: usize) -> Option<usize> {
        self.get(id).and_then(|d| d.id.checked_bytes_for(count))
    }
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
