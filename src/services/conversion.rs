//! Validated conversions on top of the converter registry.
//!
//! The core converters trust their callers' buffer geometry. This service
//! is the calling layer that checks it, resolves a route when no direct
//! converter exists, and owns any intermediate buffers a route needs.

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::services::converter_registry::{ConverterRef, ConverterRegistry};
use bitonal_convert::PixelFormat;
use std::borrow::Cow;
use std::collections::VecDeque;

/// A source channel that a conversion discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LostChannel {
    pub format: PixelFormat,
    pub channel: &'static str,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Formats visited, source first and destination last
    pub route: Vec<PixelFormat>,
    /// Channels with no representation further down the route
    pub lost_channels: Vec<LostChannel>,
}

impl ConversionReport {
    /// Number of converters applied
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Converts buffers after validating their geometry
pub struct ConversionService<'r> {
    registry: &'r ConverterRegistry,
    config: AppConfig,
}

impl<'r> ConversionService<'r> {
    pub fn new(registry: &'r ConverterRegistry, config: AppConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Longest route this service will follow
    fn max_hops(&self) -> usize {
        if self.config.allow_multi_step {
            self.config.max_hops.max(1)
        } else {
            1
        }
    }

    /// Shortest chain of registered converters from `from` to `to`.
    ///
    /// Same-format requests without a registered converter resolve to a
    /// zero-hop route, which copies bytes unchanged.
    pub fn route(&self, from: PixelFormat, to: PixelFormat) -> Option<Vec<PixelFormat>> {
        if self.registry.lookup(from, to).is_some() {
            return Some(vec![from, to]);
        }
        if from == to {
            return Some(vec![from]);
        }

        let max_hops = self.max_hops();
        let mut previous: [Option<PixelFormat>; PixelFormat::COUNT] = [None; PixelFormat::COUNT];
        let mut depth = [usize::MAX; PixelFormat::COUNT];
        let mut queue = VecDeque::from([from]);
        depth[from.index()] = 0;

        while let Some(current) = queue.pop_front() {
            if depth[current.index()] == max_hops {
                continue;
            }
            for next in PixelFormat::ALL {
                if depth[next.index()] != usize::MAX
                    || self.registry.lookup(current, next).is_none()
                {
                    continue;
                }
                depth[next.index()] = depth[current.index()] + 1;
                previous[next.index()] = Some(current);

                if next == to {
                    let mut route = vec![to];
                    let mut step = to;
                    while let Some(prior) = previous[step.index()] {
                        route.push(prior);
                        step = prior;
                    }
                    route.reverse();
                    return Some(route);
                }
                queue.push_back(next);
            }
        }

        None
    }

    /// Convert `count` pixels, overwriting the start of `dst`.
    pub fn convert(
        &self,
        from: PixelFormat,
        to: PixelFormat,
        src: &[u8],
        dst: &mut [u8],
        count: usize,
    ) -> Result<ConversionReport, ConvertError> {
        self.check_geometry(from, to, src, dst, count)?;

        let route = self
            .route(from, to)
            .ok_or(ConvertError::NoRoute { from, to })?;

        if route.len() == 1 {
            let len = from.bytes_for(count);
            dst[..len].copy_from_slice(&src[..len]);
            tracing::debug!(format = %from, count, "Copied buffer without conversion");
            return Ok(ConversionReport {
                route,
                lost_channels: Vec::new(),
            });
        }

        let mut lost_channels = Vec::new();
        let mut current: Cow<[u8]> = Cow::Borrowed(src);
        let last_hop = route.len() - 2;

        for (hop, pair) in route.windows(2).enumerate() {
            let converter = self.converter(pair[0], pair[1])?;
            lost_channels.extend(lost(converter));

            if hop == last_hop {
                converter.convert(&current, dst, count);
            } else {
                let mut scratch = vec![0u8; self.buffer_len(pair[1], count)?];
                converter.convert(&current, &mut scratch, count);
                current = Cow::Owned(scratch);
            }
        }

        if route.len() > 2 {
            tracing::debug!(
                route = ?route,
                count,
                "Converted through intermediate formats"
            );
        } else {
            tracing::debug!(from = %from, to = %to, count, "Converted buffer");
        }

        Ok(ConversionReport {
            route,
            lost_channels,
        })
    }

    /// Composite `count` pixels of `src` over the existing contents of `dst`.
    ///
    /// Only direct converters whose source carries alpha can compose.
    pub fn compose(
        &self,
        from: PixelFormat,
        to: PixelFormat,
        src: &[u8],
        dst: &mut [u8],
        count: usize,
    ) -> Result<ConversionReport, ConvertError> {
        self.check_geometry(from, to, src, dst, count)?;

        let converter = self
            .registry
            .lookup(from, to)
            .ok_or(ConvertError::NoRoute { from, to })?;
        let composer = converter
            .composer()
            .ok_or(ConvertError::ComposeUnsupported { from, to })?;

        composer.compose(src, dst, count);
        tracing::debug!(from = %from, to = %to, count, "Composed buffer");

        Ok(ConversionReport {
            route: vec![from, to],
            lost_channels: lost(converter).collect(),
        })
    }

    fn converter(&self, from: PixelFormat, to: PixelFormat) -> Result<ConverterRef, ConvertError> {
        self.registry
            .lookup(from, to)
            .ok_or(ConvertError::NoRoute { from, to })
    }

    /// Bytes needed for `count` pixels of `format`, within the configured limit
    pub fn buffer_len(&self, format: PixelFormat, count: usize) -> Result<usize, ConvertError> {
        let too_many = ConvertError::TooManyPixels {
            count,
            max: self.config.max_pixels,
        };
        if count > self.config.max_pixels {
            return Err(too_many);
        }
        format.checked_bytes_for(count).ok_or(too_many)
    }

    fn check_geometry(
        &self,
        from: PixelFormat,
        to: PixelFormat,
        src: &[u8],
        dst: &[u8],
        count: usize,
    ) -> Result<(), ConvertError> {
        let needed = self.buffer_len(from, count)?;
        if src.len() < needed {
            return Err(ConvertError::SourceTooSmall {
                format: from,
                count,
                needed,
                actual: src.len(),
            });
        }

        let needed = self.buffer_len(to, count)?;
        if dst.len() < needed {
            return Err(ConvertError::DestinationTooSmall {
                format: to,
                count,
                needed,
                actual: dst.len(),
            });
        }

        Ok(())
    }
}

fn lost(converter: ConverterRef) -> impl Iterator<Item = LostChannel> {
    let format = converter.source();
    converter.lost_channels().iter().map(move |&index| LostChannel {
        format,
        channel: format.channels()[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use PixelFormat::*;

    fn service(registry: &ConverterRegistry) -> ConversionService<'_> {
        ConversionService::new(registry, AppConfig::default())
    }

    #[test]
    fn test_direct_route() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);

        assert_eq!(service.route(Gray8, Mono1), Some(vec![Gray8, Mono1]));
        assert_eq!(service.route(Mono1, Mono1), Some(vec![Mono1, Mono1]));
    }

    #[test]
    fn test_two_hop_route_through_mono1() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);

        assert_eq!(service.route(Rgba32, Gray8), Some(vec![Rgba32, Mono1, Gray8]));
        assert_eq!(
            service.route(Gray8, GrayWhite8),
            Some(vec![Gray8, Mono1, GrayWhite8])
        );
    }

    #[test]
    fn test_no_route_from_gray_white8() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);

        assert_eq!(service.route(GrayWhite8, Mono1), None);
        assert_eq!(service.route(GrayWhite8, GrayWhite8), Some(vec![GrayWhite8]));
    }

    #[test]
    fn test_multi_step_disabled() {
        let registry = ConverterRegistry::new();
        let config = AppConfig {
            allow_multi_step: false,
            ..AppConfig::default()
        };
        let service = ConversionService::new(&registry, config);

        assert_eq!(service.route(Rgba32, Gray8), None);
        assert_eq!(service.route(Rgba32, Mono1), Some(vec![Rgba32, Mono1]));
    }

    #[test]
    fn test_max_hops_limits_routes() {
        let registry = ConverterRegistry::new();
        let config = AppConfig {
            max_hops: 1,
            ..AppConfig::default()
        };
        let service = ConversionService::new(&registry, config);

        assert_eq!(service.route(Gray8, Rgba32), None);
    }

    #[test]
    fn test_convert_direct() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 1];

        let report = service
            .convert(Gray8, Mono1, &[0, 255, 45, 46], &mut dst, 4)
            .unwrap();

        assert_eq!(dst, [0b1010_0000]);
        assert_eq!(report.hops(), 1);
        assert!(report.lost_channels.is_empty());
    }

    #[test]
    fn test_convert_multi_step_reports_lost_alpha() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let src = [10, 10, 10, 0, 200, 200, 200, 255];
        let mut dst = [0u8; 2];

        let report = service.convert(Rgba32, Gray8, &src, &mut dst, 2).unwrap();

        assert_eq!(dst, [0, 255]);
        assert_eq!(report.route, vec![Rgba32, Mono1, Gray8]);
        assert_eq!(
            report.lost_channels,
            vec![LostChannel {
                format: Rgba32,
                channel: "alpha"
            }]
        );
    }

    #[test]
    fn test_convert_same_format_copies() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 3];

        let report = service
            .convert(Gray8, Gray8, &[1, 2, 3], &mut dst, 3)
            .unwrap();

        assert_eq!(dst, [1, 2, 3]);
        assert_eq!(report.hops(), 0);
    }

    #[test]
    fn test_convert_rejects_short_source() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 40];

        let err = service
            .convert(Mono1, Rgba32, &[0xFF], &mut dst, 10)
            .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::SourceTooSmall {
                needed: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_convert_rejects_short_destination() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 39];

        let err = service
            .convert(Mono1, Rgba32, &[0xFF, 0xFF], &mut dst, 10)
            .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::DestinationTooSmall {
                needed: 40,
                actual: 39,
                ..
            }
        ));
    }

    #[test]
    fn test_convert_rejects_too_many_pixels() {
        let registry = ConverterRegistry::new();
        let config = AppConfig {
            max_pixels: 8,
            ..AppConfig::default()
        };
        let service = ConversionService::new(&registry, config);
        let mut dst = [0u8; 9];

        let err = service
            .convert(Gray8, Gray8, &[0; 9], &mut dst, 9)
            .unwrap_err();

        assert!(matches!(err, ConvertError::TooManyPixels { count: 9, max: 8 }));
    }

    #[test]
    fn test_overflowing_pixel_count_is_error_without_limit() {
        let registry = ConverterRegistry::new();
        let config = AppConfig {
            max_pixels: usize::MAX,
            ..AppConfig::default()
        };
        let service = ConversionService::new(&registry, config);
        let mut dst = [0u8; 1];

        let err = service
            .convert(Rgba32, Mono1, &[0; 4], &mut dst, usize::MAX / 8)
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::TooManyPixels {
                max: usize::MAX,
                ..
            }
        ));

        let err = service
            .compose(Rgba32, Mono1, &[0; 4], &mut dst, usize::MAX / 8)
            .unwrap_err();
        assert!(matches!(err, ConvertError::TooManyPixels { .. }));
    }

    #[test]
    fn test_buffer_len() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);

        assert_eq!(service.buffer_len(Mono1, 10).unwrap(), 2);
        assert_eq!(service.buffer_len(Rgba32, 10).unwrap(), 40);
        assert!(matches!(
            service.buffer_len(Gray8, usize::MAX),
            Err(ConvertError::TooManyPixels { .. })
        ));
    }

    #[test]
    fn test_convert_no_route() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 1];

        let err = service
            .convert(GrayWhite8, Mono1, &[0; 8], &mut dst, 8)
            .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::NoRoute {
                from: GrayWhite8,
                to: Mono1
            }
        ));
    }

    #[test]
    fn test_compose_rgba_over_mono() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let src = [0, 0, 0, 255, 0, 0, 0, 0];
        let mut dst = [0b0100_0000];

        let report = service.compose(Rgba32, Mono1, &src, &mut dst, 2).unwrap();

        assert_eq!(dst, [0b1100_0000]);
        assert_eq!(report.lost_channels.len(), 1);
    }

    #[test]
    fn test_compose_unsupported_without_alpha() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 1];

        let err = service
            .compose(Gray8, Mono1, &[0; 8], &mut dst, 8)
            .unwrap_err();

        assert!(matches!(err, ConvertError::ComposeUnsupported { .. }));
    }

    #[test]
    fn test_compose_requires_direct_converter() {
        let registry = ConverterRegistry::new();
        let service = service(&registry);
        let mut dst = [0u8; 1];

        let err = service
            .compose(Rgba32, Gray8, &[0; 4], &mut dst, 1)
            .unwrap_err();

        assert!(matches!(err, ConvertError::NoRoute { .. }));
    }
}
