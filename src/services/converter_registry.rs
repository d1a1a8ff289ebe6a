//! Lookup of converters by `(source, destination)` format pair.
//!
//! Each format owns two tables: converters that produce it ("accepts
//! from") and converters that consume it ("produces into"). The pairs are
//! registered individually; the tables are not a symmetric matrix.
//!
//! Tables are built lazily, once per format, the first time a lookup touches
//! that format. After the build they are read-only and lookups take no lock.

use bitonal_convert::{
    Gray8ToMono1, Mono1Copy, Mono1ToGray8, Mono1ToGrayWhite8, Mono1ToRgba32, PixelConverter,
    PixelFormat, Rgba32ToMono1,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Shared handle to a stateless converter
pub type ConverterRef = &'static dyn PixelConverter;

/// Converter tables owned by one format
#[derive(Default)]
pub struct FormatTables {
    /// Converters writing this format, keyed by their source format
    pub accepts_from: HashMap<PixelFormat, ConverterRef>,
    /// Converters reading this format, keyed by their destination format
    pub produces_into: HashMap<PixelFormat, ConverterRef>,
}

impl FormatTables {
    fn accept(&mut self, converter: ConverterRef) {
        self.accepts_from.insert(converter.source(), converter);
    }

    fn produce(&mut self, converter: ConverterRef) {
        self.produces_into.insert(converter.destination(), converter);
    }

    pub fn len(&self) -> usize {
        self.accepts_from.len() + self.produces_into.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Populates the tables of one format
type Registration = (PixelFormat, fn(&mut FormatTables));

/// Startup registration table, in dependency order.
///
/// Only Mono1 owns converters; the other formats register empty tables and
/// are reached through Mono1's entries.
const REGISTRATIONS: [Registration; PixelFormat::COUNT] = [
    (PixelFormat::Mono1, register_mono1),
    (PixelFormat::Gray8, register_nothing),
    (PixelFormat::GrayWhite8, register_nothing),
    (PixelFormat::Rgba32, register_nothing),
];

fn register_mono1(tables: &mut FormatTables) {
    tables.accept(&Mono1Copy);
    tables.accept(&Gray8ToMono1);
    tables.accept(&Rgba32ToMono1);

    tables.produce(&Mono1Copy);
    tables.produce(&Mono1ToRgba32);
    tables.produce(&Mono1ToGray8);
    tables.produce(&Mono1ToGrayWhite8);
}

fn register_nothing(_: &mut FormatTables) {}

/// Process-wide registry instance
static GLOBAL_REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();

/// Per-format converter tables with lazy, once-only construction
pub struct ConverterRegistry {
    tables: [OnceLock<FormatTables>; PixelFormat::COUNT],
    builds: AtomicUsize,
}

impl ConverterRegistry {
    /// Create a registry with no tables built yet
    pub fn new() -> Self {
        Self {
            tables: std::array::from_fn(|_| OnceLock::new()),
            builds: AtomicUsize::new(0),
        }
    }

    /// The shared registry used by the application
    pub fn global() -> &'static ConverterRegistry {
        GLOBAL_REGISTRY.get_or_init(ConverterRegistry::new)
    }

    /// Find the converter for a format pair.
    ///
    /// Checks what the destination accepts first, then what the source
    /// produces. `None` means no direct converter is registered.
    pub fn lookup(&self, from: PixelFormat, to: PixelFormat) -> Option<ConverterRef> {
        self.tables(to)
            .accepts_from
            .get(&from)
            .or_else(|| self.tables(from).produces_into.get(&to))
            .copied()
    }

    /// Tables owned by `format`, building them on first access
    pub fn tables(&self, format: PixelFormat) -> &FormatTables {
        self.tables[format.index()].get_or_init(|| self.build(format))
    }

    /// Every registered pair, sorted by source then destination
    pub fn converters(&self) -> Vec<ConverterRef> {
        let mut by_pair: HashMap<(PixelFormat, PixelFormat), ConverterRef> = HashMap::new();
        for format in PixelFormat::ALL {
            let tables = self.tables(format);
            for converter in tables
                .accepts_from
                .values()
                .chain(tables.produces_into.values())
            {
                by_pair.insert((converter.source(), converter.destination()), *converter);
            }
        }

        let mut converters: Vec<_> = by_pair.into_iter().collect();
        converters.sort_by_key(|(pair, _)| *pair);
        converters.into_iter().map(|(_, c)| c).collect()
    }

    /// Number of table builds performed so far
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    fn build(&self, format: PixelFormat) -> FormatTables {
        let mut tables = FormatTables::default();
        for (registered, register) in REGISTRATIONS {
            if registered == format {
                register(&mut tables);
            }
        }
        self.builds.fetch_add(1, Ordering::AcqRel);

        tracing::debug!(
            format = %format,
            accepts_from = tables.accepts_from.len(),
            produces_into = tables.produces_into.len(),
            "Built converter tables"
        );
        tables
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
