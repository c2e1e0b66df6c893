// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Region tag resolution.

use tracing::{debug, trace};

use crate::signals::{LanguageEntry, LocaleInfo, LocaleSignals};
use crate::tag::{normalize_code, RegionTag};

/// Tag used when no signal yields a usable language and region.
pub const DEFAULT_REGION_TAG: &str = "en_GB";

/// Returns [`DEFAULT_REGION_TAG`] as a [`RegionTag`].
pub fn default_region_tag() -> RegionTag {
	RegionTag::from_static("en", "GB")
}

/// Resolves [`LocaleSignals`] with the built-in default tag.
///
/// # Example
///
/// ```
/// use locus_common_locale::{resolve_region_tag, LocaleSignals};
///
/// let signals = LocaleSignals::new()
///     .with_language_code("en")
///     .with_sub_region_code("us");
/// assert_eq!(resolve_region_tag(&signals).as_str(), "en_US");
///
/// assert_eq!(resolve_region_tag(&LocaleSignals::new()).as_str(), "en_GB");
/// ```
pub fn resolve_region_tag(signals: &LocaleSignals) -> RegionTag {
	LocaleResolver::default().resolve(signals)
}

/// Turns locale signals into a single [`RegionTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolver {
	default_tag: RegionTag,
}

impl Default for LocaleResolver {
	fn default() -> Self {
		Self {
			default_tag: default_region_tag(),
		}
	}
}

impl LocaleResolver {
	pub fn new(default_tag: RegionTag) -> Self {
		Self { default_tag }
	}

	pub fn default_tag(&self) -> &RegionTag {
		&self.default_tag
	}

	/// Resolution order (first match wins):
	///
	/// 1. With a detected language: attach the detected sub-region, or the
	///    locale's country. Without any region, the locale's first official
	///    language replaces the detected language.
	/// 2. Without a result: the first official language with a code, then
	///    the first spoken language with a code, paired with the country.
	/// 3. The default tag.
	///
	/// Codes that are not two ASCII letters are ignored.
	pub fn resolve(&self, signals: &LocaleSignals) -> RegionTag {
		let locale = signals.locale.as_deref();

		let tag = signals
			.language_code
			.as_deref()
			.and_then(|code| valid_code("language", code))
			.and_then(|language| from_detected_language(language, signals, locale))
			.or_else(|| locale.and_then(from_locale));

		match tag {
			Some(tag) => {
				trace!(tag = %tag, "resolved region tag");
				tag
			}
			None => {
				debug!(
					default = %self.default_tag,
					"locale undetermined, falling back to default region tag"
				);
				self.default_tag.clone()
			}
		}
	}
}

fn from_detected_language(
	language: &str,
	signals: &LocaleSignals,
	locale: Option<&dyn LocaleInfo>,
) -> Option<RegionTag> {
	let region = signals
		.sub_region_code
		.as_deref()
		.and_then(|code| valid_code("sub-region", code))
		.map(str::to_string)
		.or_else(|| locale.and_then(country_code));

	if let Some(region) = region {
		return RegionTag::new(language, Some(&region)).ok();
	}

	let locale = locale?;
	let official = locale.official_languages().into_iter().next()?;
	let code = official.code_alpha2()?;
	debug!(
		detected = language,
		official = code,
		"no region for detected language, using locale's official language"
	);
	tag_for_country(code, locale)
}

fn from_locale(locale: &dyn LocaleInfo) -> Option<RegionTag> {
	first_with_code(locale.official_languages())
		.and_then(|entry| tag_for_entry(&entry, locale))
		.or_else(|| {
			first_with_code(locale.spoken_languages()).and_then(|entry| tag_for_entry(&entry, locale))
		})
}

fn first_with_code(entries: Vec<LanguageEntry>) -> Option<LanguageEntry> {
	entries.into_iter().find(|e| e.code_alpha2().is_some())
}

fn tag_for_entry(entry: &LanguageEntry, locale: &dyn LocaleInfo) -> Option<RegionTag> {
	entry
		.code_alpha2()
		.and_then(|code| tag_for_country(code, locale))
}

fn tag_for_country(language: &str, locale: &dyn LocaleInfo) -> Option<RegionTag> {
	let region = country_code(locale)?;
	RegionTag::new(language, Some(&region)).ok()
}

fn country_code(locale: &dyn LocaleInfo) -> Option<String> {
	let code = locale.country_code();
	valid_code("country", &code).map(str::to_string)
}

fn valid_code<'a>(kind: &'static str, code: &'a str) -> Option<&'a str> {
	let normalized = normalize_code(code);
	if normalized.is_none() {
		debug!(kind, code, "ignoring malformed locale code");
	}
	normalized
}
