pub mod conversion;
pub mod converter_registry;
pub mod preview;

pub use conversion::{ConversionReport, ConversionService, LostChannel};
pub use converter_registry::{ConverterRef, ConverterRegistry, FormatTables};
pub use preview::encode_preview;
