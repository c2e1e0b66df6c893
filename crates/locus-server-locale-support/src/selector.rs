// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Selection of the locale presented to the external platform.

use std::sync::Arc;

use locus_common_locale::platform::default_platform_tag;
use locus_common_locale::{LocaleResolver, LocaleSignals, RegionTag};
use tracing::{debug, info, instrument};

use crate::cache::InMemorySupportCache;
use crate::error::SupportError;
use crate::options::SelectorOptions;
use crate::probe::HttpLocaleProbe;
use crate::support::RemoteLocaleSupportCache;

/// Resolves signals and checks the result against the platform.
#[derive(Debug, Clone)]
pub struct SupportedLocaleSelector {
	resolver: LocaleResolver,
	support: RemoteLocaleSupportCache,
	platform_default: RegionTag,
}

impl SupportedLocaleSelector {
	pub fn new(resolver: LocaleResolver, support: RemoteLocaleSupportCache) -> Self {
		Self {
			resolver,
			support,
			platform_default: default_platform_tag(),
		}
	}

	/// Builds a selector probing over HTTP with an in-memory verdict cache.
	pub fn from_options(options: &SelectorOptions) -> Result<Self, SupportError> {
		options.validate()?;

		let probe = HttpLocaleProbe::new(options.base_url.clone(), options.timeout)?
			.with_resource_path(options.resource_path.clone())
			.with_invalid_marker(options.invalid_marker.clone());
		let cache = InMemorySupportCache::with_max_entries(options.cache_max_entries);
		let support = RemoteLocaleSupportCache::new(Arc::new(probe))
			.with_cache(Arc::new(cache))
			.with_ttl(options.cache_ttl);

		info!(
			base_url = %options.base_url,
			resource_path = %options.resource_path,
			ttl_secs = options.cache_ttl.as_secs(),
			platform_default = %options.platform_default,
			"locale selector configured"
		);

		Ok(Self::new(LocaleResolver::new(options.resolver_default.clone()), support)
			.with_platform_default(options.platform_default.clone()))
	}

	pub fn with_platform_default(mut self, tag: RegionTag) -> Self {
		self.platform_default = tag;
		self
	}

	pub fn platform_default(&self) -> &RegionTag {
		&self.platform_default
	}

	pub fn support(&self) -> &RemoteLocaleSupportCache {
		&self.support
	}

	pub fn resolve(&self, signals: &LocaleSignals) -> RegionTag {
		self.resolver.resolve(signals)
	}

	/// The resolved tag when the platform supports it, otherwise the
	/// platform default.
	#[instrument(skip_all)]
	pub async fn select(&self, signals: &LocaleSignals) -> RegionTag {
		let tag = self.resolve(signals);
		self.select_tag(&tag).await
	}

	/// Verifies an already-resolved tag.
	pub async fn select_tag(&self, tag: &RegionTag) -> RegionTag {
		if self.support.is_supported(tag).await {
			return tag.clone();
		}

		debug!(
			tag = %tag,
			default = %self.platform_default,
			"platform does not support locale, using platform default"
		);
		self.platform_default.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ProbeError;
	use crate::probe::{MockLocaleProbe, ProbeVerdict};
	use locus_common_locale::platform::DEFAULT_PLATFORM_TAG;
	use locus_common_locale::CountryLocale;

	fn selector(probe: MockLocaleProbe) -> SupportedLocaleSelector {
		SupportedLocaleSelector::new(
			LocaleResolver::default(),
			RemoteLocaleSupportCache::new(Arc::new(probe)),
		)
	}

	#[tokio::test]
	async fn test_supported_tag_is_returned() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.withf(|t| t.as_str() == "en_US")
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Supported));

		let signals = LocaleSignals::new()
			.with_language_code("en")
			.with_sub_region_code("us");
		assert_eq!(selector(probe).select(&signals).await.as_str(), "en_US");
	}

	#[tokio::test]
	async fn test_unsupported_tag_uses_platform_default() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.withf(|t| t.as_str() == "gd_GB")
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Unsupported));

		let signals = LocaleSignals::new()
			.with_language_code("gd")
			.with_sub_region_code("GB");
		assert_eq!(
			selector(probe).select(&signals).await.as_str(),
			DEFAULT_PLATFORM_TAG
		);
	}

	#[tokio::test]
	async fn test_probe_failure_uses_platform_default() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(1)
			.returning(|_| Err(ProbeError::Timeout));

		let signals = LocaleSignals::new().with_locale(CountryLocale::new("FR").with_official("fr"));
		assert_eq!(selector(probe).select(&signals).await.as_str(), "en_US");
	}

	#[tokio::test]
	async fn test_resolver_default_is_probed_like_any_tag() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.withf(|t| t.as_str() == "en_GB")
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Supported));

		assert_eq!(
			selector(probe).select(&LocaleSignals::new()).await.as_str(),
			"en_GB"
		);
	}

	#[tokio::test]
	async fn test_custom_platform_default() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.returning(|_| Ok(ProbeVerdict::Unsupported));

		let selector =
			selector(probe).with_platform_default(RegionTag::parse("de_DE").unwrap());
		assert_eq!(selector.platform_default().as_str(), "de_DE");
		assert_eq!(
			selector.select(&LocaleSignals::new()).await.as_str(),
			"de_DE"
		);
	}

	#[test]
	fn test_from_options_rejects_invalid() {
		let options = SelectorOptions {
			base_url: String::new(),
			..Default::default()
		};
		assert!(matches!(
			SupportedLocaleSelector::from_options(&options),
			Err(SupportError::InvalidOption {
				field: "base_url",
				..
			})
		));
	}

	#[test]
	fn test_from_options_applies_defaults() {
		let options = SelectorOptions {
			resolver_default: RegionTag::parse("fr_FR").unwrap(),
			..Default::default()
		};
		let selector = SupportedLocaleSelector::from_options(&options).unwrap();
		assert_eq!(selector.platform_default().as_str(), "en_US");
		assert_eq!(selector.resolve(&LocaleSignals::new()).as_str(), "fr_FR");
		assert_eq!(
			selector.support().ttl(),
			std::time::Duration::from_secs(600)
		);
	}
}
