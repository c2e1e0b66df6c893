// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Construction options for [`crate::SupportedLocaleSelector`].

use std::time::Duration;

use locus_common_locale::platform::{
	default_platform_tag, DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL,
	DEFAULT_INVALID_LOCALE_MARKER, DEFAULT_PROBE_TIMEOUT, DEFAULT_RESOURCE_PATH, MAX_CACHE_TTL,
	MAX_PROBE_TIMEOUT,
};
use locus_common_locale::{default_region_tag, RegionTag};

use crate::error::SupportError;

/// Everything needed to build a selector backed by the HTTP probe and the
/// in-memory cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
	/// Platform base URL. Default: `https://connect.facebook.net`.
	pub base_url: String,
	/// Resource below `<base_url>/<tag>/`. Default: `sdk.js`.
	pub resource_path: String,
	/// Body substring meaning "unsupported locale". Default: `is not a valid locale`.
	pub invalid_marker: String,
	/// Probe request timeout. Default: 10 seconds, at most 5 minutes.
	pub timeout: Duration,
	/// Lifetime of cached verdicts. Default: 10 minutes, at most 30 days.
	pub cache_ttl: Duration,
	/// In-memory cache bound. Default: 10 000.
	pub cache_max_entries: usize,
	/// Tag presented to the platform when the resolved tag is unsupported. Default: `en_US`.
	pub platform_default: RegionTag,
	/// Tag the resolver falls back to. Default: `en_GB`.
	pub resolver_default: RegionTag,
}

impl Default for SelectorOptions {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			resource_path: DEFAULT_RESOURCE_PATH.to_string(),
			invalid_marker: DEFAULT_INVALID_LOCALE_MARKER.to_string(),
			timeout: DEFAULT_PROBE_TIMEOUT,
			cache_ttl: DEFAULT_CACHE_TTL,
			cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
			platform_default: default_platform_tag(),
			resolver_default: default_region_tag(),
		}
	}
}

impl SelectorOptions {
	pub fn validate(&self) -> Result<(), SupportError> {
		if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
			return Err(invalid("base_url", "must be an http(s) URL"));
		}
		if self.resource_path.trim_matches('/').is_empty() {
			return Err(invalid("resource_path", "must not be empty"));
		}
		if self.invalid_marker.is_empty() {
			return Err(invalid("invalid_marker", "must not be empty"));
		}
		if self.timeout.is_zero() {
			return Err(invalid("timeout", "must be greater than zero"));
		}
		if self.timeout > MAX_PROBE_TIMEOUT {
			return Err(invalid("timeout", "must be at most 300 seconds"));
		}
		if self.cache_ttl.is_zero() {
			return Err(invalid("cache_ttl", "must be greater than zero"));
		}
		if self.cache_ttl > MAX_CACHE_TTL {
			return Err(invalid("cache_ttl", "must be at most 30 days"));
		}
		if self.cache_max_entries == 0 {
			return Err(invalid("cache_max_entries", "must be greater than zero"));
		}
		Ok(())
	}
}

fn invalid(field: &'static str, message: &str) -> SupportError {
	SupportError::InvalidOption {
		field,
		message: message.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = SelectorOptions::default();
		assert_eq!(options.base_url, "https://connect.facebook.net");
		assert_eq!(options.resource_path, "sdk.js");
		assert_eq!(options.invalid_marker, "is not a valid locale");
		assert_eq!(options.timeout, Duration::from_secs(10));
		assert_eq!(options.cache_ttl, Duration::from_secs(600));
		assert_eq!(options.platform_default.as_str(), "en_US");
		assert_eq!(options.resolver_default.as_str(), "en_GB");
		assert!(options.validate().is_ok());
	}

	#[test]
	fn test_rejects_bad_base_url() {
		let options = SelectorOptions {
			base_url: "connect.facebook.net".to_string(),
			..Default::default()
		};
		let err = options.validate().unwrap_err();
		assert!(err.to_string().contains("base_url"));
	}

	#[test]
	fn test_rejects_zero_durations() {
		let options = SelectorOptions {
			timeout: Duration::ZERO,
			..Default::default()
		};
		assert!(matches!(
			options.validate(),
			Err(SupportError::InvalidOption {
				field: "timeout",
				..
			})
		));

		let options = SelectorOptions {
			cache_ttl: Duration::ZERO,
			..Default::default()
		};
		assert!(matches!(
			options.validate(),
			Err(SupportError::InvalidOption {
				field: "cache_ttl",
				..
			})
		));
	}

	#[test]
	fn test_rejects_oversized_durations() {
		let options = SelectorOptions {
			cache_ttl: Duration::from_secs(u64::MAX),
			..Default::default()
		};
		assert!(matches!(
			options.validate(),
			Err(SupportError::InvalidOption {
				field: "cache_ttl",
				..
			})
		));

		let options = SelectorOptions {
			timeout: MAX_PROBE_TIMEOUT + Duration::from_secs(1),
			..Default::default()
		};
		assert!(matches!(
			options.validate(),
			Err(SupportError::InvalidOption {
				field: "timeout",
				..
			})
		));

		let options = SelectorOptions {
			cache_ttl: MAX_CACHE_TTL,
			timeout: MAX_PROBE_TIMEOUT,
			..Default::default()
		};
		assert!(options.validate().is_ok());
	}

	#[test]
	fn test_rejects_empty_marker_and_path() {
		let options = SelectorOptions {
			invalid_marker: String::new(),
			..Default::default()
		};
		assert!(options.validate().is_err());

		let options = SelectorOptions {
			resource_path: "/".to_string(),
			..Default::default()
		};
		assert!(options.validate().is_err());
	}
}
