// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The canonical `ll` / `ll_RR` region tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when building a [`RegionTag`] from malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionTagError {
	#[error("invalid language code '{0}': expected two ASCII letters")]
	InvalidLanguage(String),

	#[error("invalid region code '{0}': expected two ASCII letters")]
	InvalidRegion(String),

	#[error("invalid region tag '{0}': expected 'll' or 'll_RR'")]
	Malformed(String),
}

/// A language tag with an optional region, e.g. `en` or `en_GB`.
///
/// The language part is always two lowercase ASCII letters and the region
/// part, when present, two uppercase ASCII letters joined with `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionTag(String);

impl RegionTag {
	/// Builds a tag from a language code and an optional region code,
	/// normalizing case.
	pub fn new(language: &str, region: Option<&str>) -> Result<Self, RegionTagError> {
		let language = normalize_code(language)
			.ok_or_else(|| RegionTagError::InvalidLanguage(language.to_string()))?
			.to_ascii_lowercase();

		match region {
			Some(region) => {
				let region = normalize_code(region)
					.ok_or_else(|| RegionTagError::InvalidRegion(region.to_string()))?
					.to_ascii_uppercase();
				Ok(Self(format!("{language}_{region}")))
			}
			None => Ok(Self(language)),
		}
	}

	/// Parses `ll`, `ll_RR` or `ll-RR` in any ASCII case.
	pub fn parse(input: &str) -> Result<Self, RegionTagError> {
		let trimmed = input.trim();
		let mut parts = trimmed.split(['_', '-']);

		let (Some(language), region, None) = (parts.next(), parts.next(), parts.next()) else {
			return Err(RegionTagError::Malformed(input.to_string()));
		};

		Self::new(language, region).map_err(|_| RegionTagError::Malformed(input.to_string()))
	}

	/// Tag built from compile-time literals, e.g. `from_static("en", "US")`.
	///
	/// The literals must be two ASCII letters each; case is normalized.
	pub fn from_static(language: &'static str, region: &'static str) -> Self {
		debug_assert!(is_alpha2(language) && is_alpha2(region));
		Self(format!(
			"{}_{}",
			language.to_ascii_lowercase(),
			region.to_ascii_uppercase()
		))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn language(&self) -> &str {
		self.0.get(..2).unwrap_or_default()
	}

	pub fn region(&self) -> Option<&str> {
		self.0.get(3..)
	}
}

impl fmt::Display for RegionTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for RegionTag {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl FromStr for RegionTag {
	type Err = RegionTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for RegionTag {
	type Error = RegionTagError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<RegionTag> for String {
	fn from(tag: RegionTag) -> Self {
		tag.0
	}
}

/// Trims the code and returns it when it is exactly two ASCII letters.
pub(crate) fn normalize_code(code: &str) -> Option<&str> {
	let code = code.trim();
	is_alpha2(code).then_some(code)
}

fn is_alpha2(code: &str) -> bool {
	code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}
