// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Get-or-probe verification of platform locale support.

use std::sync::Arc;
use std::time::Duration;

use locus_common_locale::RegionTag;
use tracing::{debug, info, instrument, trace};

use locus_common_locale::platform::DEFAULT_CACHE_TTL;

use crate::cache::SupportCache;
use crate::probe::{LocaleProbe, ProbeVerdict};

/// Answers "does the platform have a resource for this locale?".
///
/// Every outcome, including probe failures, is written to the cache with the
/// same TTL, so a tag is probed at most once per TTL window (modulo
/// concurrent misses, which may probe twice; last write wins).
#[derive(Clone)]
pub struct RemoteLocaleSupportCache {
	probe: Arc<dyn LocaleProbe>,
	cache: Option<Arc<dyn SupportCache>>,
	ttl: Duration,
}

impl std::fmt::Debug for RemoteLocaleSupportCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RemoteLocaleSupportCache")
			.field("cached", &self.cache.is_some())
			.field("ttl", &self.ttl)
			.finish()
	}
}

impl RemoteLocaleSupportCache {
	/// Creates an uncached instance; every lookup probes.
	pub fn new(probe: Arc<dyn LocaleProbe>) -> Self {
		Self {
			probe,
			cache: None,
			ttl: DEFAULT_CACHE_TTL,
		}
	}

	pub fn with_cache(mut self, cache: Arc<dyn SupportCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;
		self
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Never fails: transport and response errors count as unsupported.
	#[instrument(skip(self), fields(tag = %candidate))]
	pub async fn is_supported(&self, candidate: &RegionTag) -> bool {
		let key = candidate.as_str();

		if let Some(cache) = &self.cache {
			if let Some(supported) = cache.get(key).await {
				trace!(supported, "locale support cache hit");
				return supported;
			}
		}

		let supported = match self.probe.probe(candidate).await {
			Ok(verdict) => {
				debug!(?verdict, "locale probe completed");
				verdict.is_supported()
			}
			Err(e) => {
				info!(error = %e, "locale probe failed, treating locale as unsupported");
				false
			}
		};

		if let Some(cache) = &self.cache {
			cache.set(key, supported, self.ttl).await;
		}

		supported
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cache::InMemorySupportCache;
	use crate::error::ProbeError;
	use crate::probe::MockLocaleProbe;

	fn tag(s: &str) -> RegionTag {
		RegionTag::parse(s).unwrap()
	}

	fn cached(probe: MockLocaleProbe) -> (RemoteLocaleSupportCache, Arc<InMemorySupportCache>) {
		let cache = Arc::new(InMemorySupportCache::new());
		let support = RemoteLocaleSupportCache::new(Arc::new(probe)).with_cache(cache.clone());
		(support, cache)
	}

	#[tokio::test]
	async fn test_supported_is_cached() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.withf(|t| t.as_str() == "fr_FR")
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Supported));

		let (support, cache) = cached(probe);
		assert!(support.is_supported(&tag("fr_FR")).await);
		assert!(support.is_supported(&tag("fr_FR")).await);
		assert_eq!(cache.get("fr_FR").await, Some(true));
	}

	#[tokio::test]
	async fn test_unsupported_is_cached() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Unsupported));

		let (support, cache) = cached(probe);
		assert!(!support.is_supported(&tag("xx_XX")).await);
		assert!(!support.is_supported(&tag("xx_XX")).await);
		assert_eq!(cache.get("xx_XX").await, Some(false));
	}

	#[tokio::test]
	async fn test_probe_failure_degrades_to_false_and_is_cached() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(1)
			.returning(|_| Err(ProbeError::Timeout));

		let (support, cache) = cached(probe);
		assert!(!support.is_supported(&tag("de_DE")).await);
		assert!(!support.is_supported(&tag("de_DE")).await);
		assert_eq!(cache.get("de_DE").await, Some(false));
	}

	#[tokio::test]
	async fn test_status_failure_degrades_to_false() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(1)
			.returning(|_| Err(ProbeError::Status(503)));

		let (support, _cache) = cached(probe);
		assert!(!support.is_supported(&tag("de_DE")).await);
	}

	#[tokio::test]
	async fn test_tags_are_cached_independently() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(2)
			.returning(|t| {
				Ok(if t.as_str() == "fr_FR" {
					ProbeVerdict::Supported
				} else {
					ProbeVerdict::Unsupported
				})
			});

		let (support, _cache) = cached(probe);
		assert!(support.is_supported(&tag("fr_FR")).await);
		assert!(!support.is_supported(&tag("xx_XX")).await);
		assert!(support.is_supported(&tag("fr_FR")).await);
	}

	#[tokio::test]
	async fn test_without_cache_probes_every_time() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(3)
			.returning(|_| Ok(ProbeVerdict::Supported));

		let support = RemoteLocaleSupportCache::new(Arc::new(probe));
		for _ in 0..3 {
			assert!(support.is_supported(&tag("fr_FR")).await);
		}
	}

	#[tokio::test(start_paused = true)]
	async fn test_reprobes_after_ttl() {
		let mut probe = MockLocaleProbe::new();
		let mut seq = mockall::Sequence::new();
		probe
			.expect_probe()
			.times(1)
			.in_sequence(&mut seq)
			.returning(|_| Err(ProbeError::Timeout));
		probe
			.expect_probe()
			.times(1)
			.in_sequence(&mut seq)
			.returning(|_| Ok(ProbeVerdict::Supported));

		let (support, _cache) = cached(probe);
		let support = support.with_ttl(Duration::from_secs(60));

		assert!(!support.is_supported(&tag("fr_FR")).await);
		tokio::time::advance(Duration::from_secs(30)).await;
		assert!(!support.is_supported(&tag("fr_FR")).await);

		tokio::time::advance(Duration::from_secs(31)).await;
		assert!(support.is_supported(&tag("fr_FR")).await);
	}

	#[tokio::test]
	async fn test_unbounded_ttl_does_not_panic() {
		let mut probe = MockLocaleProbe::new();
		probe
			.expect_probe()
			.times(1)
			.returning(|_| Ok(ProbeVerdict::Supported));

		let (support, cache) = cached(probe);
		let support = support.with_ttl(Duration::from_secs(u64::MAX));

		assert!(support.is_supported(&tag("fr_FR")).await);
		assert!(support.is_supported(&tag("fr_FR")).await);
		assert_eq!(cache.get("fr_FR").await, Some(true));
	}

	#[tokio::test]
	async fn test_cache_hit_skips_probe() {
		let mut probe = MockLocaleProbe::new();
		probe.expect_probe().never();

		let (support, cache) = cached(probe);
		cache.set("it_IT", true, DEFAULT_CACHE_TTL).await;
		assert!(support.is_supported(&tag("it_IT")).await);
	}
}
