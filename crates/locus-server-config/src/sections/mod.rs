// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod locale;
mod logging;
mod probe;

pub use locale::{LocaleConfig, LocaleConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use probe::{ProbeConfig, ProbeConfigLayer};

use locus_common_locale::RegionTag;

use crate::error::ConfigError;

pub(crate) fn parse_tag(key: &str, value: &str) -> Result<RegionTag, ConfigError> {
	RegionTag::parse(value).map_err(|e| ConfigError::InvalidValue {
		key: key.to_string(),
		message: e.to_string(),
	})
}
