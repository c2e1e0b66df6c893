// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Platform locale verification for Locus.
//!
//! Given a visitor's resolved [`RegionTag`], this crate decides which tag to
//! present to an external platform whose locale catalog is only discoverable
//! by asking (by default the Facebook JavaScript SDK). A tag is verified with
//! one bounded HTTP request, the verdict is cached for a TTL, and anything
//! unverifiable degrades to the platform default.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use locus_common_locale::LocaleSignals;
//! use locus_server_locale_support::{LocaleContext, SelectorOptions, SupportedLocaleSelector};
//!
//! let selector = Arc::new(SupportedLocaleSelector::from_options(&SelectorOptions::default())?);
//!
//! // One context per request.
//! let signals = LocaleSignals::new().with_language_code("fr").with_sub_region_code("FR");
//! let context = LocaleContext::new(signals, selector.clone());
//! let sdk_locale = context.supported_tag().await;
//! ```

pub mod cache;
pub mod context;
pub mod error;
pub mod options;
pub mod probe;
pub mod selector;
pub mod support;

pub use cache::{InMemorySupportCache, SupportCache};
pub use context::LocaleContext;
pub use error::{ProbeError, SupportError};
pub use locus_common_locale::platform::{
	default_platform_tag, DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL,
	DEFAULT_INVALID_LOCALE_MARKER, DEFAULT_PLATFORM_TAG, DEFAULT_PROBE_TIMEOUT,
	DEFAULT_RESOURCE_PATH, MAX_CACHE_TTL, MAX_PROBE_TIMEOUT,
};
pub use locus_common_locale::RegionTag;
pub use options::SelectorOptions;
pub use probe::{is_unsupported_locale_body, HttpLocaleProbe, LocaleProbe, ProbeVerdict};
pub use selector::SupportedLocaleSelector;
pub use support::RemoteLocaleSupportCache;
