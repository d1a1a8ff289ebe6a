use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitonal_convert::PixelFormat;
use pixconv::models::{AppConfig, FormatCatalog};
use pixconv::services::{encode_preview, ConversionService, ConverterRegistry};

#[derive(Parser)]
#[command(name = "pixconv")]
#[command(about = "Convert raw pixel buffers between 1-bit, grayscale and RGBA formats")]
struct Cli {
    /// YAML configuration file (defaults to $PIXCONV_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw pixel buffer to another format
    Convert {
        /// Source format (mono1, gray8, graywhite8, rgba32)
        #[arg(short, long)]
        from: PixelFormat,

        /// Destination format
        #[arg(short, long)]
        to: PixelFormat,

        /// Number of pixels in the buffer
        #[arg(short, long)]
        pixels: usize,

        /// Raw input file
        #[arg(short, long)]
        input: PathBuf,

        /// Raw output file
        #[arg(short, long)]
        output: PathBuf,

        /// Composite onto the existing contents of the output file
        #[arg(long)]
        compose: bool,

        /// Also write a PNG preview of the result
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Preview row width in pixels
        #[arg(short, long)]
        width: Option<u32>,
    },
    /// List known pixel formats
    Formats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered converters
    Converters,
    /// Show the conversion route between two formats
    Route {
        #[arg(short, long)]
        from: PixelFormat,

        #[arg(short, long)]
        to: PixelFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var("PIXCONV_CONFIG").ok().map(PathBuf::from));
    let (config, source) = load_config(config_path.as_deref());

    match cli.command {
        Some(Commands::Convert {
            from,
            to,
            pixels,
            input,
            output,
            compose,
            preview,
            width,
        }) => run_convert_command(
            config,
            ConvertArgs {
                from,
                to,
                pixels,
                input,
                output,
                compose,
                preview,
                width,
            },
        ),
        Some(Commands::Formats { json }) => run_formats_command(json),
        Some(Commands::Converters) => {
            run_converters_command();
            Ok(())
        }
        Some(Commands::Route { from, to }) => {
            run_route_command(config, from, to);
            Ok(())
        }
        None => {
            run_status_command(&source);
            Ok(())
        }
    }
}

/// Where the active configuration came from
enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// The file could not be read or parsed, so defaults are in use
    Fallback(PathBuf),
}

impl ConfigSource {
    fn of<T, E>(path: &Path, loaded: &Result<T, E>) -> Self {
        match loaded {
            Ok(_) => ConfigSource::File(path.to_path_buf()),
            Err(_) => ConfigSource::Fallback(path.to_path_buf()),
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfigSource::File(path) => path.display().to_string(),
            ConfigSource::Fallback(path) => format!("defaults ({} failed to load)", path.display()),
            ConfigSource::Defaults => "defaults".to_string(),
        }
    }
}

/// Read the config, then start logging with its filter unless RUST_LOG is set
fn load_config(path: Option<&Path>) -> (AppConfig, ConfigSource) {
    let loaded = path.map(|p| (p, AppConfig::from_file(p)));
    let log_filter = match &loaded {
        Some((_, Ok(config))) => config.log_filter.clone(),
        _ => AppConfig::default().log_filter,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match loaded {
        Some((path, result)) => {
            let source = ConfigSource::of(path, &result);
            (AppConfig::resolve(path, result), source)
        }
        None => (AppConfig::default(), ConfigSource::Defaults),
    }
}

struct ConvertArgs {
    from: PixelFormat,
    to: PixelFormat,
    pixels: usize,
    input: PathBuf,
    output: PathBuf,
    compose: bool,
    preview: Option<PathBuf>,
    width: Option<u32>,
}

/// Convert a raw buffer file and write the result
fn run_convert_command(config: AppConfig, args: ConvertArgs) -> anyhow::Result<()> {
    let registry = ConverterRegistry::global();
    let service = ConversionService::new(registry, config);

    let src = std::fs::read(&args.input)?;

    let (dst, report) = if args.compose {
        let mut dst = std::fs::read(&args.output)?;
        let report = service.compose(args.from, args.to, &src, &mut dst, args.pixels)?;
        (dst, report)
    } else {
        let mut dst = vec![0u8; service.buffer_len(args.to, args.pixels)?];
        let report = service.convert(args.from, args.to, &src, &mut dst, args.pixels)?;
        (dst, report)
    };

    std::fs::write(&args.output, &dst)?;

    let route: Vec<_> = report.route.iter().map(|f| f.name()).collect();
    println!(
        "Wrote {} ({} bytes, route {})",
        args.output.display(),
        dst.len(),
        route.join(" -> ")
    );
    for lost in &report.lost_channels {
        println!("  discarded {} channel of {}", lost.channel, lost.format);
    }

    if let Some(preview) = args.preview {
        let width = args
            .width
            .or(service.config().preview.width)
            .unwrap_or_else(|| u32::try_from(args.pixels.max(1)).unwrap_or(u32::MAX));
        let png_bytes = encode_preview(registry, args.to, &dst, args.pixels, width)?;
        std::fs::write(&preview, &png_bytes)?;
        println!("Rendered {} ({} bytes)", preview.display(), png_bytes.len());
    }

    Ok(())
}

/// Print the format catalog
fn run_formats_command(json: bool) -> anyhow::Result<()> {
    let catalog = FormatCatalog::builtin();

    if json {
        let formats: Vec<_> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&formats)?);
        return Ok(());
    }

    println!("Formats:");
    for format in catalog.iter() {
        println!(
            "  {:<11} {:>2} bpp  {}",
            format.name,
            format.bits_per_pixel,
            format.channels.join(",")
        );
    }
    Ok(())
}

/// Print every registered converter pair
fn run_converters_command() {
    println!("Converters:");
    for converter in ConverterRegistry::global().converters() {
        let compose = if converter.composer().is_some() {
            "  (compose)"
        } else {
            ""
        };
        println!(
            "  {:<11} -> {:<11}{compose}",
            converter.source().name(),
            converter.destination().name()
        );
    }
}

/// Print the route the conversion service would take
fn run_route_command(config: AppConfig, from: PixelFormat, to: PixelFormat) {
    let service = ConversionService::new(ConverterRegistry::global(), config);

    match service.route(from, to) {
        Some(route) => {
            let names: Vec<_> = route.iter().map(|f| f.name()).collect();
            println!("{}", names.join(" -> "));
        }
        None => println!("No route from {from} to {to}"),
    }
}

/// Display status and configuration information
fn run_status_command(source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("pixconv v{VERSION}");
    println!("Raw pixel buffer conversion\n");

    println!("Config:     {}", source.describe());

    let catalog = FormatCatalog::builtin();
    let converters = ConverterRegistry::global().converters();
    println!("Formats:    {}", catalog.len());
    println!("Converters: {}", converters.len());

    println!("\nCommands:");
    println!("  pixconv convert      Convert a raw buffer file");
    println!("  pixconv formats      List pixel formats");
    println!("  pixconv converters   List registered converters");
    println!("  pixconv route        Show a conversion route");
    println!("\nRun 'pixconv --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_config_reports_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixconv.yaml");
        std::fs::write(&path, "max_pixels: lots\n").unwrap();

        let source = ConfigSource::of(&path, &AppConfig::from_file(&path));

        assert!(matches!(source, ConfigSource::Fallback(_)));
        assert!(source.describe().starts_with("defaults ("));
    }

    #[test]
    fn test_loaded_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixconv.yaml");
        std::fs::write(&path, "max_hops: 1\n").unwrap();

        let source = ConfigSource::of(&path, &AppConfig::from_file(&path));

        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_no_config_reports_defaults() {
        assert_eq!(ConfigSource::Defaults.describe(), "defaults");
    }
}
