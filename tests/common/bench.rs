//! Isolated registry and scratch directory for a single test.

use pixconv::models::AppConfig;
use pixconv::services::{ConversionService, ConverterRegistry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fresh registry plus a temporary directory for raw buffer files
pub struct TestBench {
    pub registry: ConverterRegistry,
    dir: TempDir,
}

impl TestBench {
    pub fn new() -> Self {
        Self {
            registry: ConverterRegistry::new(),
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Service with default configuration
    pub fn service(&self) -> ConversionService<'_> {
        ConversionService::new(&self.registry, AppConfig::default())
    }

    /// Service with a custom configuration
    pub fn service_with(&self, config: AppConfig) -> ConversionService<'_> {
        ConversionService::new(&self.registry, config)
    }

    /// Path of a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a raw buffer and return its path
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write raw buffer");
        path
    }

    pub fn read_raw(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read raw buffer")
    }

    /// Write a YAML config file and return its path
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("pixconv.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}
