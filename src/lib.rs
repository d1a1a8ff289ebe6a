//! pixconv - bitonal pixel format conversion
//!
//! Converter registry, format catalog and validated conversions on top of
//! the `bitonal-convert` kernels.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
