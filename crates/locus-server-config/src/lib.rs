// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Locus.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`LOCUS_*`)
//!
//! # Usage
//!
//! ```ignore
//! use locus_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Probing {} with a {}s timeout", config.probe.base_url, config.probe.timeout_secs);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::LocusConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocusConfig {
	pub locale: LocaleConfig,
	pub probe: ProbeConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LOCUS_*`)
/// 2. Config file (`/etc/locus/locus.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<LocusConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<LocusConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<LocusConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<LocusConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = LocusConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: LocusConfigLayer) -> Result<LocusConfig, ConfigError> {
	let locale = layer.locale.unwrap_or_default().finalize()?;
	let probe = layer.probe.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&locale, &probe)?;

	info!(
		resolver_default = %locale.default_tag,
		platform_default = %probe.default_tag,
		probe_base_url = %probe.base_url,
		probe_timeout_secs = probe.timeout_secs,
		cache_ttl_secs = probe.cache_ttl_secs,
		"Locus configuration loaded"
	);

	Ok(LocusConfig {
		locale,
		probe,
		logging,
	})
}

/// Validate cross-section configuration rules.
fn validate_config(locale: &LocaleConfig, probe: &ProbeConfig) -> Result<(), ConfigError> {
	if probe.default_tag.region().is_none() {
		return Err(ConfigError::Validation(format!(
			"probe.default_tag '{}' must include a region (e.g. en_US)",
			probe.default_tag
		)));
	}
	if locale.default_tag.region().is_none() {
		return Err(ConfigError::Validation(format!(
			"locale.default_tag '{}' must include a region (e.g. en_GB)",
			locale.default_tag
		)));
	}

	Ok(())
}
