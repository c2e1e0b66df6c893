// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Platform locale probe configuration section.

use std::time::Duration;

use locus_common_locale::platform::{
	default_platform_tag, DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL,
	DEFAULT_INVALID_LOCALE_MARKER, DEFAULT_PROBE_TIMEOUT, DEFAULT_RESOURCE_PATH, MAX_CACHE_TTL,
	MAX_PROBE_TIMEOUT,
};
use locus_common_locale::RegionTag;
use serde::{Deserialize, Serialize};

use super::parse_tag;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProbeConfigLayer {
	pub base_url: Option<String>,
	pub resource_path: Option<String>,
	pub invalid_marker: Option<String>,
	pub timeout_secs: Option<u64>,
	pub cache_ttl_secs: Option<u64>,
	pub cache_max_entries: Option<usize>,
	pub default_tag: Option<String>,
}

impl ProbeConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.resource_path.is_some() {
			self.resource_path = other.resource_path;
		}
		if other.invalid_marker.is_some() {
			self.invalid_marker = other.invalid_marker;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.cache_ttl_secs.is_some() {
			self.cache_ttl_secs = other.cache_ttl_secs;
		}
		if other.cache_max_entries.is_some() {
			self.cache_max_entries = other.cache_max_entries;
		}
		if other.default_tag.is_some() {
			self.default_tag = other.default_tag;
		}
	}

	pub fn finalize(self) -> Result<ProbeConfig, ConfigError> {
		let config = ProbeConfig {
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			resource_path: self
				.resource_path
				.unwrap_or_else(|| DEFAULT_RESOURCE_PATH.to_string()),
			invalid_marker: self
				.invalid_marker
				.unwrap_or_else(|| DEFAULT_INVALID_LOCALE_MARKER.to_string()),
			timeout_secs: self
				.timeout_secs
				.unwrap_or(DEFAULT_PROBE_TIMEOUT.as_secs()),
			cache_ttl_secs: self
				.cache_ttl_secs
				.unwrap_or(DEFAULT_CACHE_TTL.as_secs()),
			cache_max_entries: self.cache_max_entries.unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
			default_tag: match self.default_tag.as_deref() {
				Some(tag) => parse_tag("probe.default_tag", tag)?,
				None => default_platform_tag(),
			},
		};
		config.validate()?;
		Ok(config)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
	pub base_url: String,
	pub resource_path: String,
	pub invalid_marker: String,
	pub timeout_secs: u64,
	pub cache_ttl_secs: u64,
	pub cache_max_entries: usize,
	/// Tag presented to the platform when the resolved tag is unsupported.
	pub default_tag: RegionTag,
}

impl Default for ProbeConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			resource_path: DEFAULT_RESOURCE_PATH.to_string(),
			invalid_marker: DEFAULT_INVALID_LOCALE_MARKER.to_string(),
			timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs(),
			cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
			cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
			default_tag: default_platform_tag(),
		}
	}
}

impl ProbeConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	pub fn cache_ttl(&self) -> Duration {
		Duration::from_secs(self.cache_ttl_secs)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
			return Err(invalid("probe.base_url", "must start with http:// or https://"));
		}
		if self.resource_path.trim_matches('/').is_empty() {
			return Err(invalid("probe.resource_path", "must not be empty"));
		}
		if self.invalid_marker.is_empty() {
			return Err(invalid("probe.invalid_marker", "must not be empty"));
		}
		if self.timeout_secs == 0 {
			return Err(invalid("probe.timeout_secs", "must be greater than zero"));
		}
		if self.timeout_secs > MAX_PROBE_TIMEOUT.as_secs() {
			return Err(invalid(
				"probe.timeout_secs",
				&format!("must be at most {}", MAX_PROBE_TIMEOUT.as_secs()),
			));
		}
		if self.cache_ttl_secs == 0 {
			return Err(invalid("probe.cache_ttl_secs", "must be greater than zero"));
		}
		if self.cache_ttl_secs > MAX_CACHE_TTL.as_secs() {
			return Err(invalid(
				"probe.cache_ttl_secs",
				&format!("must be at most {}", MAX_CACHE_TTL.as_secs()),
			));
		}
		if self.cache_max_entries == 0 {
			return Err(invalid("probe.cache_max_entries", "must be greater than zero"));
		}
		Ok(())
	}
}

fn invalid(key: &str, message: &str) -> ConfigError {
	ConfigError::InvalidValue {
		key: key.to_string(),
		message: message.to_string(),
	}
}
