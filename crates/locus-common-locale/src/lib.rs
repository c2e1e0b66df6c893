// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution for Locus.
//!
//! This crate turns the raw signals produced by locale detection (a detected
//! language, an optional sub-region and optional country-level locale data)
//! into one canonical [`RegionTag`] such as `en_GB`.
//!
//! Resolution never fails: malformed or missing signals fall through an
//! ordered chain and end at [`DEFAULT_REGION_TAG`].
//!
//! # Example
//!
//! ```
//! use locus_common_locale::{resolve_region_tag, CountryLocale, LocaleSignals};
//!
//! let signals = LocaleSignals::new().with_locale(CountryLocale::new("FR").with_official("fr"));
//! assert_eq!(resolve_region_tag(&signals).as_str(), "fr_FR");
//! ```

pub mod platform;
mod resolve;
mod signals;
mod tag;

pub use resolve::{default_region_tag, resolve_region_tag, LocaleResolver, DEFAULT_REGION_TAG};
pub use signals::{CountryLocale, LanguageEntry, LocaleInfo, LocaleSignals};
pub use tag::{RegionTag, RegionTagError};
