// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storage for locale support verdicts.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use locus_common_locale::platform::{DEFAULT_CACHE_MAX_ENTRIES, MAX_CACHE_TTL};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::trace;

/// Key/value store for "platform supports this locale" verdicts.
///
/// Implementations own expiry: `get` must not return a value whose TTL has
/// elapsed. A shared external store only needs per-key read/write
/// consistency. `set` must accept any `ttl` without panicking.
#[async_trait]
pub trait SupportCache: Send + Sync {
	async fn get(&self, key: &str) -> Option<bool>;
	async fn set(&self, key: &str, supported: bool, ttl: Duration);
}

#[derive(Debug, Clone)]
struct SupportCacheEntry {
	supported: bool,
	expires_at: Instant,
	last_used: Instant,
}

/// Process-local [`SupportCache`] with TTL expiry and LRU eviction.
///
/// TTLs are capped at [`MAX_CACHE_TTL`].
#[derive(Debug)]
pub struct InMemorySupportCache {
	entries: Mutex<HashMap<String, SupportCacheEntry>>,
	max_entries: usize,
}

impl Default for InMemorySupportCache {
	fn default() -> Self {
		Self::new()
	}
}

impl InMemorySupportCache {
	pub fn new() -> Self {
		Self::with_max_entries(DEFAULT_CACHE_MAX_ENTRIES)
	}

	pub fn with_max_entries(max_entries: usize) -> Self {
		InMemorySupportCache {
			entries: Mutex::new(HashMap::new()),
			max_entries: max_entries.max(1),
		}
	}

	pub async fn len(&self) -> usize {
		self.entries.lock().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.entries.lock().await.is_empty()
	}

	pub async fn cleanup_expired(&self) {
		let now = Instant::now();
		self.entries
			.lock()
			.await
			.retain(|_, entry| entry.expires_at > now);
	}
}

#[async_trait]
impl SupportCache for InMemorySupportCache {
	async fn get(&self, key: &str) -> Option<bool> {
		let now = Instant::now();
		let mut entries = self.entries.lock().await;

		if let Some(entry) = entries.get_mut(key) {
			if entry.expires_at > now {
				entry.last_used = now;
				return Some(entry.supported);
			}
			trace!(key, "support cache entry expired");
			entries.remove(key);
		}

		None
	}

	async fn set(&self, key: &str, supported: bool, ttl: Duration) {
		let now = Instant::now();
		if ttl > MAX_CACHE_TTL {
			trace!(key, ttl_secs = ttl.as_secs(), "capping support cache TTL");
		}
		let ttl = ttl.min(MAX_CACHE_TTL);
		let mut entries = self.entries.lock().await;

		if !entries.contains_key(key) && entries.len() >= self.max_entries {
			evict_lru(&mut entries);
		}

		entries.insert(
			key.to_string(),
			SupportCacheEntry {
				supported,
				expires_at: now + ttl,
				last_used: now,
			},
		);
	}
}

fn evict_lru(entries: &mut HashMap<String, SupportCacheEntry>) {
	if let Some(oldest) = entries
		.iter()
		.min_by_key(|(_, entry)| entry.last_used)
		.map(|(key, _)| key.clone())
	{
		trace!(key = %oldest, "evicting least recently used support entry");
		entries.remove(&oldest);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use locus_common_locale::platform::DEFAULT_CACHE_TTL;

	#[tokio::test]
	async fn test_set_and_get() {
		let cache = InMemorySupportCache::new();
		cache.set("fr_FR", true, DEFAULT_CACHE_TTL).await;
		cache.set("xx_XX", false, DEFAULT_CACHE_TTL).await;

		assert_eq!(cache.get("fr_FR").await, Some(true));
		assert_eq!(cache.get("xx_XX").await, Some(false));
	}

	#[tokio::test]
	async fn test_get_miss() {
		let cache = InMemorySupportCache::new();
		assert_eq!(cache.get("fr_FR").await, None);
		assert!(cache.is_empty().await);
	}

	#[tokio::test(start_paused = true)]
	async fn test_entry_expires_after_ttl() {
		let cache = InMemorySupportCache::new();
		cache.set("fr_FR", true, Duration::from_secs(600)).await;

		tokio::time::advance(Duration::from_secs(599)).await;
		assert_eq!(cache.get("fr_FR").await, Some(true));

		tokio::time::advance(Duration::from_secs(2)).await;
		assert_eq!(cache.get("fr_FR").await, None);
		assert!(cache.is_empty().await);
	}

	#[tokio::test(start_paused = true)]
	async fn test_huge_ttl_is_capped() {
		let cache = InMemorySupportCache::new();
		cache.set("fr_FR", true, Duration::from_secs(u64::MAX)).await;
		cache.set("de_DE", false, Duration::MAX).await;
		assert_eq!(cache.get("fr_FR").await, Some(true));
		assert_eq!(cache.get("de_DE").await, Some(false));

		tokio::time::advance(MAX_CACHE_TTL - Duration::from_secs(1)).await;
		assert_eq!(cache.get("fr_FR").await, Some(true));

		tokio::time::advance(Duration::from_secs(2)).await;
		assert_eq!(cache.get("fr_FR").await, None);
		assert_eq!(cache.get("de_DE").await, None);
	}

	#[tokio::test(start_paused = true)]
	async fn test_overwrite_resets_expiry() {
		let cache = InMemorySupportCache::new();
		cache.set("fr_FR", false, Duration::from_secs(10)).await;

		tokio::time::advance(Duration::from_secs(8)).await;
		cache.set("fr_FR", true, Duration::from_secs(10)).await;

		tokio::time::advance(Duration::from_secs(8)).await;
		assert_eq!(cache.get("fr_FR").await, Some(true));
	}

	#[tokio::test(start_paused = true)]
	async fn test_cleanup_expired() {
		let cache = InMemorySupportCache::new();
		cache.set("a", true, Duration::from_secs(5)).await;
		cache.set("b", true, Duration::from_secs(60)).await;

		tokio::time::advance(Duration::from_secs(10)).await;
		cache.cleanup_expired().await;

		assert_eq!(cache.len().await, 1);
		assert_eq!(cache.get("b").await, Some(true));
	}

	#[tokio::test(start_paused = true)]
	async fn test_lru_eviction() {
		let cache = InMemorySupportCache::with_max_entries(3);

		cache.set("a", true, DEFAULT_CACHE_TTL).await;
		tokio::time::advance(Duration::from_millis(1)).await;
		cache.set("b", true, DEFAULT_CACHE_TTL).await;
		tokio::time::advance(Duration::from_millis(1)).await;
		cache.set("c", true, DEFAULT_CACHE_TTL).await;
		tokio::time::advance(Duration::from_millis(1)).await;

		cache.get("a").await;
		tokio::time::advance(Duration::from_millis(1)).await;
		cache.set("d", true, DEFAULT_CACHE_TTL).await;

		assert_eq!(cache.len().await, 3);
		assert!(cache.get("a").await.is_some());
		assert!(cache.get("b").await.is_none());
		assert!(cache.get("c").await.is_some());
		assert!(cache.get("d").await.is_some());
	}

	#[tokio::test]
	async fn test_max_entries_enforced() {
		let cache = InMemorySupportCache::with_max_entries(10);

		for i in 0..50 {
			cache.set(&format!("key{i}"), true, DEFAULT_CACHE_TTL).await;
		}

		assert!(cache.len().await <= 10);
	}
}
