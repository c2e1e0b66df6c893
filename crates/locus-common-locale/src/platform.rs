// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Defaults for verifying tags against the external platform's locale catalog.
//!
//! Shared by the support crate and the configuration layer.

use std::time::Duration;

use crate::tag::RegionTag;

/// Platform base URL (Facebook JavaScript SDK CDN).
pub const DEFAULT_BASE_URL: &str = "https://connect.facebook.net";

/// Resource requested below `<base>/<tag>/`.
pub const DEFAULT_RESOURCE_PATH: &str = "sdk.js";

/// Phrase the platform embeds in a 200 response for locales it does not know.
pub const DEFAULT_INVALID_LOCALE_MARKER: &str = "is not a valid locale";

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_PROBE_TIMEOUT: Duration = Duration::from_secs(300);

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);
/// Longest lifetime a verdict may be cached for (30 days).
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Tag presented to the platform when the resolved tag is unsupported.
///
/// Independent of the resolver's own default (`en_GB`).
pub const DEFAULT_PLATFORM_TAG: &str = "en_US";

/// Returns [`DEFAULT_PLATFORM_TAG`] as a [`RegionTag`].
pub fn default_platform_tag() -> RegionTag {
	RegionTag::from_static("en", "US")
}
