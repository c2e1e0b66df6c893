// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution configuration section.

use locus_common_locale::{default_region_tag, RegionTag};
use serde::{Deserialize, Serialize};

use super::parse_tag;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfigLayer {
	pub default_tag: Option<String>,
}

impl LocaleConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_tag.is_some() {
			self.default_tag = other.default_tag;
		}
	}

	pub fn finalize(self) -> Result<LocaleConfig, ConfigError> {
		let default_tag = match self.default_tag {
			Some(tag) => parse_tag("locale.default_tag", &tag)?,
			None => default_region_tag(),
		};
		Ok(LocaleConfig { default_tag })
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	/// Tag the resolver falls back to when no signal is usable.
	pub default_tag: RegionTag,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			default_tag: default_region_tag(),
		}
	}
}
