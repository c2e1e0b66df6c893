// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw locale signals supplied by the detection layer.

use std::fmt;
use std::sync::Arc;

/// A language known to be used in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageEntry {
	code_alpha2: Option<String>,
}

impl LanguageEntry {
	pub fn new(code_alpha2: impl Into<String>) -> Self {
		Self {
			code_alpha2: Some(code_alpha2.into()),
		}
	}

	/// An entry whose ISO 639-1 code is unknown.
	pub fn without_code() -> Self {
		Self::default()
	}

	pub fn code_alpha2(&self) -> Option<&str> {
		self.code_alpha2.as_deref()
	}
}

/// Country-level locale data, typically backed by a geo/locale database.
pub trait LocaleInfo: fmt::Debug + Send + Sync {
	/// Official languages, most significant first.
	fn official_languages(&self) -> Vec<LanguageEntry>;

	/// Spoken languages, most significant first.
	fn spoken_languages(&self) -> Vec<LanguageEntry>;

	/// ISO 3166-1 alpha-2 country code.
	fn country_code(&self) -> String;
}

/// Plain in-memory [`LocaleInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryLocale {
	pub country_code: String,
	pub official_languages: Vec<LanguageEntry>,
	pub spoken_languages: Vec<LanguageEntry>,
}

impl CountryLocale {
	pub fn new(country_code: impl Into<String>) -> Self {
		Self {
			country_code: country_code.into(),
			..Default::default()
		}
	}

	pub fn with_official(mut self, code: impl Into<String>) -> Self {
		self.official_languages.push(LanguageEntry::new(code));
		self
	}

	pub fn with_spoken(mut self, code: impl Into<String>) -> Self {
		self.spoken_languages.push(LanguageEntry::new(code));
		self
	}
}

impl LocaleInfo for CountryLocale {
	fn official_languages(&self) -> Vec<LanguageEntry> {
		self.official_languages.clone()
	}

	fn spoken_languages(&self) -> Vec<LanguageEntry> {
		self.spoken_languages.clone()
	}

	fn country_code(&self) -> String {
		self.country_code.clone()
	}
}

/// Everything the resolver knows about a visitor's locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleSignals {
	pub language_code: Option<String>,
	pub sub_region_code: Option<String>,
	pub locale: Option<Arc<dyn LocaleInfo>>,
}

impl LocaleSignals {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
		self.language_code = Some(code.into());
		self
	}

	pub fn with_sub_region_code(mut self, code: impl Into<String>) -> Self {
		self.sub_region_code = Some(code.into());
		self
	}

	pub fn with_locale(mut self, locale: impl LocaleInfo + 'static) -> Self {
		self.locale = Some(Arc::new(locale));
		self
	}

	pub fn with_shared_locale(mut self, locale: Arc<dyn LocaleInfo>) -> Self {
		self.locale = Some(locale);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.language_code.is_none() && self.sub_region_code.is_none() && self.locale.is_none()
	}
}
